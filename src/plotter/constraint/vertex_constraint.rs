use std::collections::HashMap;

use crate::model::goal::GoalSubset;
use crate::model::mode::ModeSet;
use crate::model::network::{EdgeId, VertexId};

use super::edge_ref::EdgeRef;
use super::Constraint;

/// §4.5: the C2/C2' coverage constraint synthesised from one vertex's
/// incident edges, anchored (evaluated) at the lowest digit position among
/// those edges — the union of in-use externals, plus the vertex itself if
/// it is a goal, must cover every goal.
///
/// Pairwise C1 disjointness is handled separately, by
/// [`PairConstraint`](super::PairConstraint) anchored at each pair's own
/// lower position, so this struct only ever needs to look at coverage.
pub struct VertexConstraint {
    pub vertex: VertexId,
    /// incident edges, ascending by digit position; `edges[0].position` is
    /// this constraint's anchor.
    edges: Vec<EdgeRef>,
    /// `Some(g)` when this vertex is goal `g`; pulls in the C2' variant.
    goal_index: Option<usize>,
    k: usize,
}

impl VertexConstraint {
    pub fn new(
        vertex: VertexId,
        edges: Vec<EdgeRef>,
        goal_index: Option<usize>,
        k: usize,
    ) -> VertexConstraint {
        debug_assert!(edges.windows(2).all(|w| w[0].position <= w[1].position));
        VertexConstraint {
            vertex,
            edges,
            goal_index,
            k,
        }
    }

    /// the digit position this constraint is evaluated at: the lowest
    /// position among its incident edges.
    pub fn anchor(&self) -> usize {
        self.edges[0].position
    }
}

impl Constraint for VertexConstraint {
    /// true iff the current digit assignment satisfies C2 or C2' for this
    /// vertex. Reads `digits` only at the positions this constraint's edges
    /// occupy.
    fn check(&self, digits: &[usize], mode_sets: &HashMap<EdgeId, ModeSet>) -> bool {
        let mut union = GoalSubset::EMPTY;
        let mut any_used = false;
        for e in &self.edges {
            let d = digits[e.position];
            if d == 0 {
                continue;
            }
            any_used = true;
            let modes = &mode_sets[&e.edge_id];
            union = union.union(e.external_set(d, modes, self.k));
        }

        match self.goal_index {
            Some(g) => any_used && union.with(g).is_full(self.k),
            None => !any_used || union.is_full(self.k),
        }
    }
}
