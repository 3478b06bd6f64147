use std::collections::HashMap;

use crate::model::mode::ModeSet;
use crate::model::network::{EdgeId, IndexedEdge, VertexId};

/// Vertex -> incident retained edge ids, in edge-id order. Shared by the
/// router (§4.3), edge ordering (§4.4), and constraint builder (§4.5), all of
/// which only ever need to walk the edges touching one vertex at a time.
pub fn build_adjacency(
    edges: &[IndexedEdge],
    retained: &HashMap<EdgeId, ModeSet>,
) -> HashMap<VertexId, Vec<EdgeId>> {
    let mut adjacency: HashMap<VertexId, Vec<EdgeId>> = HashMap::new();
    for edge in edges {
        if retained.contains_key(&edge.id) {
            adjacency.entry(edge.start).or_default().push(edge.id);
            adjacency.entry(edge.finish).or_default().push(edge.id);
        }
    }
    adjacency
}
