mod cost;
mod edge_id;
mod indexed_edge;
mod network_error;
mod qualified_edge;
mod vertex_id;

pub use cost::{Cost, COST_EPSILON};
pub use edge_id::EdgeId;
pub use indexed_edge::IndexedEdge;
pub use network_error::NetworkError;
pub use qualified_edge::QualifiedEdge;
pub use vertex_id::VertexId;
