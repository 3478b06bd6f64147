mod goal_subset;

pub use goal_subset::{GoalSubset, MAX_GOALS};
