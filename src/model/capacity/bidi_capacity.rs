use super::range::Range;
use serde::{Deserialize, Serialize};

/// Per-direction bandwidth capacity of a bidirectional edge.
///
/// `ingress` bounds traffic flowing `start -> finish`; `egress` bounds traffic
/// flowing `finish -> start`. Both are supplied by the caller on every
/// [`QualifiedEdge`] and never mutated by the plotter.
///
/// [`QualifiedEdge`]: crate::model::network::QualifiedEdge
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BidiCapacity {
    pub ingress: Range,
    pub egress: Range,
}

impl BidiCapacity {
    pub fn new(ingress: Range, egress: Range) -> BidiCapacity {
        BidiCapacity { ingress, egress }
    }
}
