pub mod errors;
pub mod models;
pub mod snapshot;
pub mod tasks;
pub mod view_model;

pub use errors::DashboardError;
pub use models::{
    Concept,
    ConceptGraph,
    PlanEntry,
    Problem,
    StudyPlanDay,
};
pub use snapshot::Snapshot;
