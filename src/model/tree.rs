use std::collections::HashMap;

use super::capacity::BidiCapacity;
use super::network::EdgeId;

/// One yielded solution of [`plot`](crate::plot): the edges in use, each
/// keyed by the stable [`EdgeId`] assigned to it at the start of `plot`, and
/// mapped to the forward/reverse bandwidth pair its chosen mode requires
/// that edge to carry.
///
/// An edge absent from this map was not used by this particular tree; it is
/// not an error for the map to be a strict subset of the input edge set.
pub type Tree = HashMap<EdgeId, BidiCapacity>;
