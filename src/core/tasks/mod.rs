mod manager;
mod types;

pub use manager::{
    TaskManager,
    RECOMMENDED_CONCEPT_LIMIT,
    RECOMMENDED_PROBLEM_LIMIT,
};
pub use types::TaskResult;
