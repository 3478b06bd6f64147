use super::{edge_id::EdgeId, vertex_id::VertexId};

#[derive(thiserror::Error, Debug, Clone)]
pub enum NetworkError {
    #[error("edge {0} has non-finite cost")]
    NonFiniteCost(EdgeId),
    #[error("edge {0} has non-positive cost")]
    NonPositiveCost(EdgeId),
    #[error("goal vertex {0} appears in goal_order but is not an endpoint of any edge")]
    GoalVertexUnused(VertexId),
    #[error("goal vertex {0} appears more than once in goal_order")]
    DuplicateGoal(VertexId),
    #[error("too many goals: {0} exceeds the supported maximum of {1}")]
    TooManyGoals(usize, usize),
    #[error("{0}")]
    InternalError(String),
}
