//! Low-cost multi-point tree enumeration over a capacitated, bidirectional
//! network.
//!
//! The single entry point is [`plot`]: given an ordered set of goal
//! vertices, a [`DemandFunction`](model::demand::DemandFunction) describing
//! the bandwidth any cut of the goal set requires, and the candidate edges
//! of the network, it returns a lazy sequence of every valid [`Tree`] —
//! every assignment of per-edge traffic direction ("mode") that connects all
//! goals without violating any edge's capacity.
//!
//! Everything upstream of the edge/goal/demand triple (topology layout,
//! visualization, switch control-plane, persistence) is the caller's
//! concern; this crate enumerates and leaves scoring and selection to
//! whoever consumes the sequence.

pub mod model;
mod plotter;

pub use model::Tree;
pub use plotter::{plot, PlotIter, PlotterConfig, PlotterError};
