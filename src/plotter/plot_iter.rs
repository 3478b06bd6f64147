use std::collections::HashMap;
use std::sync::Arc;

use crate::model::demand::DemandFunction;
use crate::model::mode::ModeSet;
use crate::model::network::EdgeId;
use crate::model::Tree;

use super::mixed_radix::MixedRadixEnumerator;
use super::plotter_error::PlotterError;
use super::result_translator::translate;

/// The lazy, single-use sequence [`plot`](crate::plot) returns.
///
/// `Empty` and `Trivial` short-circuit the three cases the full search
/// pipeline never needs to run for: a contract-satisfying but trivially
/// infeasible input (a goal with no viable incident edge after pruning), and
/// a trivially feasible one (zero or one goal, which needs no edges at all
/// to be "connected"). `Search` drives the full §4.2–§4.7 pipeline.
pub enum PlotIter {
    /// no valid tree exists; yields nothing.
    Empty,
    /// zero or one goal: the empty tree is the unique valid answer, since a
    /// single vertex needs no edges to be considered connected to itself.
    Trivial { yielded: bool },
    Search {
        enumerator: MixedRadixEnumerator,
        positions: Vec<EdgeId>,
        mode_sets: Arc<HashMap<EdgeId, ModeSet>>,
        demand: Arc<dyn DemandFunction>,
    },
}

impl Iterator for PlotIter {
    type Item = Result<Tree, PlotterError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            PlotIter::Empty => None,
            PlotIter::Trivial { yielded } => {
                if *yielded {
                    None
                } else {
                    *yielded = true;
                    Some(Ok(Tree::new()))
                }
            }
            PlotIter::Search {
                enumerator,
                positions,
                mode_sets,
                demand,
            } => {
                let digits = enumerator.next_valid()?.to_vec();
                Some(translate(&digits, positions, mode_sets, demand.as_ref()))
            }
        }
    }
}
