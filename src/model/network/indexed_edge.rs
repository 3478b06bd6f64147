use super::{cost::Cost, edge_id::EdgeId, qualified_edge::QualifiedEdge, vertex_id::VertexId};
use crate::model::capacity::BidiCapacity;

/// The plotter's own copy of one input edge's scalar fields, built once at
/// the start of `plot` and indexed by [`EdgeId`] from then on. Keeping a
/// plain, `Copy` snapshot instead of re-querying the caller's
/// [`QualifiedEdge`] on every access keeps every later stage free of the
/// caller's generic edge type.
#[derive(Copy, Clone, Debug)]
pub struct IndexedEdge {
    pub id: EdgeId,
    pub start: VertexId,
    pub finish: VertexId,
    pub cost: Cost,
    pub capacity: BidiCapacity,
}

impl IndexedEdge {
    pub fn from_qualified<E: QualifiedEdge>(id: EdgeId, edge: &E) -> IndexedEdge {
        IndexedEdge {
            id,
            start: edge.start(),
            finish: edge.finish(),
            cost: Cost::new(edge.cost()),
            capacity: edge.capacity(),
        }
    }

    /// the vertex on the far side of this edge from `from`, or `None` if
    /// `from` is neither endpoint.
    pub fn other(&self, from: VertexId) -> Option<VertexId> {
        if from == self.start {
            Some(self.finish)
        } else if from == self.finish {
            Some(self.start)
        } else {
            None
        }
    }
}
