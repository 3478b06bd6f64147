use serde::{Deserialize, Serialize};

use super::plotter_error::PlotterError;

/// Default strictness of the §4.3 bias pruner: aggressive enough to cut a
/// meaningful fraction of the search space, conservative enough that it
/// rarely eliminates a genuinely valid tree. See [`PlotterConfig::bias_threshold`].
pub const DEFAULT_BIAS_THRESHOLD: f64 = 0.99;

/// Tunables accepted by [`plot`](crate::plot). Constructed through
/// [`PlotterConfig::new`] or [`PlotterConfig::default`] and refined with the
/// `with_*` builders, in the style of the search algorithm configs this
/// engine's lineage ships.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    /// strictness of the router's shortest-path bias pruning, in `(0, 1)`.
    /// Higher is safer (fewer valid trees culled); lower is more aggressive.
    /// A threshold `>= 1.0` disables pruning outright.
    pub bias_threshold: f64,

    /// when set, edge-mode enumeration (§4.2) retains every candidate mode
    /// regardless of capacity, acting as a ground-truth oracle for testing
    /// the constraint builder and enumerator in isolation from capacity
    /// filtering.
    pub all_edge_modes: bool,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        PlotterConfig {
            bias_threshold: DEFAULT_BIAS_THRESHOLD,
            all_edge_modes: false,
        }
    }
}

impl PlotterConfig {
    pub fn new(bias_threshold: f64, all_edge_modes: bool) -> Result<PlotterConfig, PlotterError> {
        PlotterConfig::default()
            .with_bias_threshold(bias_threshold)
            .map(|c| c.with_all_edge_modes(all_edge_modes))
    }

    /// strictness must be a positive real; values `>= 1.0` are accepted and
    /// simply disable pruning (see [`PlotterConfig::bias_threshold`]).
    pub fn with_bias_threshold(mut self, bias_threshold: f64) -> Result<Self, PlotterError> {
        if !(bias_threshold > 0.0) {
            return Err(PlotterError::InvalidInput(format!(
                "bias_threshold must be a positive real, got {bias_threshold}"
            )));
        }
        self.bias_threshold = bias_threshold;
        Ok(self)
    }

    pub fn with_all_edge_modes(mut self, all_edge_modes: bool) -> Self {
        self.all_edge_modes = all_edge_modes;
        self
    }

    /// true when [`PlotterConfig::bias_threshold`] is strictly below 1.0,
    /// i.e. the router's pruning stage should actually run.
    pub fn pruning_enabled(&self) -> bool {
        self.bias_threshold < 1.0
    }
}
