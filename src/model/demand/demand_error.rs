use crate::model::goal::GoalSubset;

#[derive(thiserror::Error, Debug, Clone)]
pub enum DemandError {
    #[error("demand function degree {0} does not match goal count {1}")]
    DegreeMismatch(usize, usize),
    #[error("demand requested for subset {0}, which is empty or the full goal set")]
    SubsetOutOfDomain(GoalSubset),
    #[error("matrix demand references goal index {0}, which is out of range for degree {1}")]
    GoalIndexOutOfRange(usize, usize),
    #[error("{0}")]
    InternalError(String),
}
