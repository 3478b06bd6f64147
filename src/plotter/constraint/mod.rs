use std::collections::HashMap;

use crate::model::mode::ModeSet;
use crate::model::network::EdgeId;

mod compatibility_table;
mod constraint_builder;
mod edge_ref;
mod pair_constraint;
mod vertex_constraint;

pub use constraint_builder::build_constraints;
pub use edge_ref::EdgeRef;
pub use pair_constraint::PairConstraint;
pub use vertex_constraint::VertexConstraint;

/// One constraint the enumerator checks once every digit up to its anchor
/// position has been assigned: either a pairwise C1 disjointness check
/// ([`PairConstraint`]) or a vertex's C2/C2' coverage check
/// ([`VertexConstraint`]).
pub trait Constraint: Send + Sync {
    fn check(&self, digits: &[usize], mode_sets: &HashMap<EdgeId, ModeSet>) -> bool;
}
