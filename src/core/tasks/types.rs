use crate::core::{
    Concept,
    ConceptGraph,
    Problem,
    StudyPlanDay,
};

/// Everything a background task can hand back to the UI thread. Errors cross
/// the channel as strings; the app decides how to surface them.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Full concept/problem refetch. `generation` was stamped when the request
    /// was issued; the app drops results older than the applied snapshot.
    SnapshotLoaded {
        generation: u64,
        result: Result<(Vec<Concept>, Vec<Problem>), String>,
    },

    RecommendedConcepts(Result<Vec<String>, String>),
    RecommendedProblems(Result<Vec<Problem>, String>),
    LearningPath(Result<Vec<String>, String>),

    /// `days` is echoed back so a failed generation can be retried with the
    /// same span.
    StudyPlanLoaded {
        days: u32,
        result: Result<Vec<StudyPlanDay>, String>,
    },
    GraphLoaded(Result<ConceptGraph, String>),

    /// The complete-problem POST settled. On success the app starts the full
    /// refetch cycle; the POST itself never flips local state.
    ProblemCompleted {
        problem_id: String,
        result: Result<(), String>,
    },

    BackendStatus(bool),
}
