use std::{
    sync::{
        atomic::{
            AtomicU64,
            AtomicUsize,
            Ordering,
        },
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::api::ApiClient;

pub const RECOMMENDED_CONCEPT_LIMIT: usize = 3;
pub const RECOMMENDED_PROBLEM_LIMIT: usize = 5;

/// Runs backend I/O off the UI thread. Each operation spawns a thread that
/// drives the shared tokio runtime and reports back over an mpsc channel the
/// app drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    snapshot_generation: AtomicU64,
    pending: AtomicUsize,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self {
            runtime,
            receiver,
            sender,
            snapshot_generation: AtomicU64::new(0),
            pending: AtomicUsize::new(0),
        }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        if !results.is_empty() {
            self.pending.fetch_sub(results.len(), Ordering::Relaxed);
        }

        results
    }

    /// Whether any spawned task has yet to deliver its result. Drives the
    /// repaint loop while work settles in the background.
    pub fn has_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed) > 0
    }

    /// Generation of the most recently issued snapshot refresh.
    pub fn latest_snapshot_generation(&self) -> u64 {
        self.snapshot_generation.load(Ordering::Relaxed)
    }

    /// Every spawned thread sends exactly `results` messages, so the pending
    /// count drains to zero as `poll_results` drains the channel.
    fn task_context(&self, results: usize) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        self.pending.fetch_add(results, Ordering::Relaxed);
        (self.sender.clone(), self.runtime.clone())
    }

    /// Refetches concepts and problems in parallel. The generation is taken
    /// when the request is issued, not when it completes, so a slow response
    /// superseded by a newer request loses at the UI.
    pub fn refresh_snapshot(&self, api: ApiClient) {
        let (sender, runtime) = self.task_context(1);
        let generation = self.snapshot_generation.fetch_add(1, Ordering::Relaxed) + 1;

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let (concepts, problems) =
                    futures::future::join(api.concepts(), api.problems()).await;

                Ok::<_, String>((
                    concepts.map_err(|e| e.to_string())?,
                    problems.map_err(|e| e.to_string())?,
                ))
            });

            let _ = sender.send(TaskResult::SnapshotLoaded { generation, result });
        });
    }

    /// Refetches both recommendation lists and the learning path. Each list
    /// reports independently, matching the per-renderer fetches the views do.
    pub fn fetch_recommendations(&self, api: ApiClient) {
        let (sender, runtime) = self.task_context(3);

        thread::spawn(move || {
            runtime.block_on(async {
                let (concepts, problems, path) = futures::future::join3(
                    api.recommended_concepts(RECOMMENDED_CONCEPT_LIMIT),
                    api.recommended_problems(RECOMMENDED_PROBLEM_LIMIT),
                    api.learning_path(),
                )
                .await;

                let _ = sender.send(TaskResult::RecommendedConcepts(
                    concepts.map_err(|e| e.to_string()),
                ));
                let _ = sender.send(TaskResult::RecommendedProblems(
                    problems.map_err(|e| e.to_string()),
                ));
                let _ = sender.send(TaskResult::LearningPath(path.map_err(|e| e.to_string())));
            });
        });
    }

    pub fn fetch_study_plan(&self, api: ApiClient, days: u32) {
        let (sender, runtime) = self.task_context(1);

        thread::spawn(move || {
            let result =
                runtime.block_on(async { api.study_plan(days).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::StudyPlanLoaded { days, result });
        });
    }

    pub fn fetch_concept_graph(&self, api: ApiClient) {
        let (sender, runtime) = self.task_context(1);

        thread::spawn(move || {
            let result =
                runtime.block_on(async { api.concept_graph().await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::GraphLoaded(result));
        });
    }

    /// Sends the completion POST. Refetching happens only after this settles;
    /// the app reacts to the result rather than updating optimistically.
    pub fn complete_problem(&self, api: ApiClient, problem_id: String) {
        let (sender, runtime) = self.task_context(1);

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api.complete_problem(&problem_id).await.map_err(|e| e.to_string())
            });

            println!("Completion request for '{}' settled: {:?}", problem_id, result.is_ok());
            let _ = sender.send(TaskResult::ProblemCompleted { problem_id, result });
        });
    }

    pub fn check_backend(&self, api: ApiClient) {
        let (sender, runtime) = self.task_context(1);

        thread::spawn(move || {
            let reachable = runtime.block_on(async { api.is_reachable().await });

            let _ = sender.send(TaskResult::BackendStatus(reachable));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;

    fn unreachable_api() -> ApiClient {
        // Nothing listens on port 1; requests fail fast with a refusal.
        ApiClient::new("http://127.0.0.1:1/api")
    }

    #[test]
    fn generations_are_stamped_per_request() {
        let manager = TaskManager::new();
        assert_eq!(manager.latest_snapshot_generation(), 0);

        manager.refresh_snapshot(unreachable_api());
        manager.refresh_snapshot(unreachable_api());

        assert_eq!(manager.latest_snapshot_generation(), 2);
    }

    #[test]
    fn pending_drains_as_results_arrive() {
        let mut manager = TaskManager::new();
        assert!(!manager.has_pending());

        manager.refresh_snapshot(unreachable_api());
        assert!(manager.has_pending());

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut results = Vec::new();
        while manager.has_pending() && Instant::now() < deadline {
            results.extend(manager.poll_results());
            thread::sleep(Duration::from_millis(10));
        }

        assert!(!manager.has_pending());
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            TaskResult::SnapshotLoaded { generation: 1, result: Err(_) }
        ));
    }
}
