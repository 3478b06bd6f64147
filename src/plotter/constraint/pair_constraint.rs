use std::collections::HashMap;
use std::sync::Arc;

use crate::model::mode::ModeSet;
use crate::model::network::EdgeId;

use super::compatibility_table::CompatibilityTable;
use super::Constraint;

/// §4.5 C1: one pair of a vertex's incident edges must have disjoint
/// externals whenever both are in use.
///
/// Anchored at `min(position_i, position_j)` rather than the vertex's
/// overall minimum edge position, so a conflict between two high-position
/// edges clears as soon as the earlier of the two rolls over, instead of
/// waiting on the vertex's lowest-position edge to roll over regardless of
/// how far away it is.
pub struct PairConstraint {
    compat: Arc<CompatibilityTable>,
    local_i: usize,
    local_j: usize,
    position_i: usize,
    position_j: usize,
}

impl PairConstraint {
    pub fn new(
        compat: Arc<CompatibilityTable>,
        local_i: usize,
        local_j: usize,
        position_i: usize,
        position_j: usize,
    ) -> PairConstraint {
        PairConstraint {
            compat,
            local_i,
            local_j,
            position_i,
            position_j,
        }
    }

    /// the digit position this constraint is evaluated at: the lower of its
    /// two edges' positions.
    pub fn anchor(&self) -> usize {
        self.position_i.min(self.position_j)
    }
}

impl Constraint for PairConstraint {
    fn check(&self, digits: &[usize], _mode_sets: &HashMap<EdgeId, ModeSet>) -> bool {
        let di = digits[self.position_i];
        let dj = digits[self.position_j];
        if di == 0 || dj == 0 {
            return true;
        }
        self.compat.compatible(self.local_i, di, self.local_j, dj)
    }
}
