use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

/// A stable index assigned to a caller-supplied vertex for the lifetime of a single
/// [`plot`] call. The plotter never inspects vertex payloads directly; it only ever
/// compares, hashes, and orders `VertexId` handles.
///
/// [`plot`]: crate::plot
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Default)]
pub struct VertexId(pub usize);

impl PartialOrd for VertexId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
