use crate::model::demand::DemandError;
use crate::model::network::NetworkError;

/// Every failure the plotter can surface, matching the three error kinds of
/// the design: contract violations are caller mistakes caught before any
/// work begins; infeasibility is never an error (an empty [`Tree`] sequence
/// is the correct, normal result); and `Internal` is reserved for invariant
/// failures that indicate a bug in the plotter itself.
///
/// [`Tree`]: crate::model::Tree
#[derive(thiserror::Error, Debug, Clone)]
pub enum PlotterError {
    /// the caller's inputs violate `plot`'s preconditions: degree mismatch,
    /// duplicate goal, a goal absent from the edge set, a non-finite or
    /// non-positive edge cost, or too many goals.
    #[error("{0}")]
    InvalidInput(String),

    /// a defensive internal-invariant failure — a digit position referencing
    /// a dropped edge, an out-of-range mode index. Should be unreachable
    /// given a correct build; if observed, it indicates a bug in the
    /// plotter, not in the caller's inputs.
    #[error("internal plotter error: {0}")]
    Internal(String),
}

impl From<NetworkError> for PlotterError {
    fn from(e: NetworkError) -> Self {
        PlotterError::InvalidInput(e.to_string())
    }
}

impl From<DemandError> for PlotterError {
    fn from(e: DemandError) -> Self {
        match e {
            DemandError::DegreeMismatch(_, _) => PlotterError::InvalidInput(e.to_string()),
            other => PlotterError::Internal(other.to_string()),
        }
    }
}
