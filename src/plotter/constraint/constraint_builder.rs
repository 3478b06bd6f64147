use std::collections::HashMap;
use std::sync::Arc;

use crate::model::mode::ModeSet;
use crate::model::network::{EdgeId, IndexedEdge, VertexId};

use super::compatibility_table::CompatibilityTable;
use super::edge_ref::EdgeRef;
use super::pair_constraint::PairConstraint;
use super::vertex_constraint::VertexConstraint;
use super::Constraint;

/// §4.5: builds every C1 pairwise constraint and every vertex's C2/C2'
/// coverage constraint, and buckets them by anchor position so the
/// enumerator can look up "every constraint to check once digit `i` is
/// reached" in `O(1)`.
///
/// A C1 pair is anchored at the lower of its two edges' digit positions, not
/// at the vertex's overall minimum — a conflict between two high-position
/// edges must clear as soon as the earlier of the two rolls over, rather
/// than waiting on every lower-position edge at the vertex to roll over
/// first.
///
/// `edges_by_position[i]` must be the edge occupying digit position `i`
/// (the output of [`order_edges`](super::super::edge_ordering::order_edges)).
pub fn build_constraints(
    edges_by_position: &[EdgeId],
    indexed_edges: &[IndexedEdge],
    mode_sets: &HashMap<EdgeId, ModeSet>,
    goal_order: &[VertexId],
    k: usize,
) -> Vec<Vec<Box<dyn Constraint>>> {
    let position_of: HashMap<EdgeId, usize> = edges_by_position
        .iter()
        .enumerate()
        .map(|(pos, &id)| (id, pos))
        .collect();
    let goal_index: HashMap<VertexId, usize> = goal_order
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();

    let mut by_vertex: HashMap<VertexId, Vec<EdgeRef>> = HashMap::new();
    for &eid in edges_by_position {
        let edge = &indexed_edges[eid.as_usize()];
        let position = position_of[&eid];
        by_vertex.entry(edge.start).or_default().push(EdgeRef {
            edge_id: eid,
            position,
            inward: false,
        });
        by_vertex.entry(edge.finish).or_default().push(EdgeRef {
            edge_id: eid,
            position,
            inward: true,
        });
    }

    let n = edges_by_position.len();
    let mut constraints_by_anchor: Vec<Vec<Box<dyn Constraint>>> =
        (0..n).map(|_| Vec::new()).collect();

    for (vertex, mut edges) in by_vertex {
        if edges.is_empty() {
            continue;
        }
        edges.sort_by_key(|e| e.position);

        let compat = Arc::new(CompatibilityTable::build(&edges, mode_sets, k));
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                let anchor = edges[i].position.min(edges[j].position);
                constraints_by_anchor[anchor].push(Box::new(PairConstraint::new(
                    compat.clone(),
                    i,
                    j,
                    edges[i].position,
                    edges[j].position,
                )) as Box<dyn Constraint>);
            }
        }

        let vertex_constraint =
            VertexConstraint::new(vertex, edges, goal_index.get(&vertex).copied(), k);
        constraints_by_anchor[vertex_constraint.anchor()]
            .push(Box::new(vertex_constraint) as Box<dyn Constraint>);
    }

    constraints_by_anchor
}
