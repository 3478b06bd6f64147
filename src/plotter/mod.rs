//! The `TreePlotter` engine: §4.2–§4.7 of the design, wired together by
//! [`plot`].

mod adjacency;
mod constraint;
mod edge_mode_enumeration;
mod edge_ordering;
mod mixed_radix;
mod plot;
mod plot_iter;
mod plotter_config;
mod plotter_error;
mod result_translator;
mod router;

pub use plot::plot;
pub use plot_iter::PlotIter;
pub use plotter_config::{PlotterConfig, DEFAULT_BIAS_THRESHOLD};
pub use plotter_error::PlotterError;
