use std::time::Instant;

use eframe::egui;

use super::{
    error_modal::{
        ErrorModal,
        FailureContext,
    },
    graph_view::GraphView,
    loading_overlay::{
        LoadingOverlay,
        LoadingPhase,
    },
    plan_modal::{
        study_plan_window,
        PlanModal,
    },
    problem_table,
    recommendations,
    settings_modal::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    ActionQueue,
    UiAction,
};
use crate::{
    api::ApiClient,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        view_model::ConceptFilter,
        Problem,
        Snapshot,
        StudyPlanDay,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const BACKEND_CHECK_INTERVAL_SECS: u64 = 5;

pub struct DashboardApp {
    // Server state snapshots
    pub snapshot: Snapshot,
    pub recommended_concepts: Vec<String>,
    pub recommended_problems: Vec<Problem>,
    pub learning_path: Vec<String>,
    pub study_plan: Option<Vec<StudyPlanDay>>,

    // UI state
    pub filter: ConceptFilter,
    pub theme: Theme,
    pub loading: LoadingOverlay,
    pub error_modal: ErrorModal,
    settings_modal: SettingsModal,
    plan_modal: PlanModal,
    graph_view: GraphView,

    // Configuration
    settings_data: SettingsData,

    // Backend plumbing
    api: ApiClient,
    task_manager: TaskManager,
    backend_connected: bool,
    last_backend_check: Option<Instant>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let api = ApiClient::new(settings_data.api_base_url.clone());
        let task_manager = TaskManager::new();

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);

        let app = Self {
            snapshot: Snapshot::default(),
            recommended_concepts: Vec::new(),
            recommended_problems: Vec::new(),
            learning_path: Vec::new(),
            study_plan: None,

            filter: ConceptFilter::All,
            theme,
            loading: LoadingOverlay::new(),
            error_modal: ErrorModal::new(),
            settings_modal: SettingsModal::new(),
            plan_modal: PlanModal::new(),
            graph_view: GraphView::new(),

            settings_data,

            api,
            task_manager,
            backend_connected: false,
            last_backend_check: None,
        };

        app.refresh_all();
        app
    }

    /// The full refresh cycle: snapshot, recommendation lists and graph are
    /// all refetched and every view rebuilds from the replacement data.
    fn refresh_all(&self) {
        self.task_manager.refresh_snapshot(self.api.clone());
        self.task_manager.fetch_recommendations(self.api.clone());
        self.task_manager.fetch_concept_graph(self.api.clone());
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::SnapshotLoaded { generation, result } => {
                // Superseded results carry nothing worth showing: neither
                // stale data nor a failure from a refresh that a newer
                // request already replaced.
                if !self.snapshot.accepts(generation)
                    || generation < self.task_manager.latest_snapshot_generation()
                {
                    println!("Dropping superseded snapshot result (generation {})", generation);
                    return;
                }

                match result {
                    Ok((concepts, problems)) => {
                        self.snapshot = Snapshot::new(concepts, problems, generation);
                        self.backend_connected = true;
                        self.loading.finish();
                    }
                    Err(error_msg) => {
                        self.loading.finish();
                        self.error_modal.report(FailureContext::SnapshotLoad, error_msg);
                    }
                }
            }

            TaskResult::RecommendedConcepts(result) => match result {
                Ok(names) => self.recommended_concepts = names,
                Err(error_msg) => {
                    self.error_modal.report(FailureContext::Recommendations, error_msg);
                }
            },

            TaskResult::RecommendedProblems(result) => match result {
                Ok(problems) => self.recommended_problems = problems,
                Err(error_msg) => {
                    self.error_modal.report(FailureContext::Recommendations, error_msg);
                }
            },

            TaskResult::LearningPath(result) => match result {
                Ok(path) => self.learning_path = path,
                Err(error_msg) => {
                    self.error_modal.report(FailureContext::Recommendations, error_msg);
                }
            },

            TaskResult::StudyPlanLoaded { days, result } => match result {
                Ok(plan) => self.study_plan = Some(plan),
                Err(error_msg) => {
                    self.error_modal.report(FailureContext::StudyPlan(days), error_msg);
                }
            },

            TaskResult::GraphLoaded(result) => match result {
                Ok(graph) => self.graph_view.set_graph(graph),
                Err(error_msg) => {
                    self.error_modal.report(FailureContext::ConceptGraph, error_msg);
                }
            },

            TaskResult::ProblemCompleted { problem_id, result } => match result {
                // Completion never flips local state; the refetch cycle picks
                // up the authoritative value.
                Ok(()) => self.refresh_all(),
                Err(error_msg) => {
                    self.error_modal.report(FailureContext::Completion(problem_id), error_msg);
                }
            },

            TaskResult::BackendStatus(connected) => {
                self.backend_connected = connected;
            }
        }
    }

    fn update_backend_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_backend_check {
            None => true,
            Some(last) => {
                now.duration_since(last).as_secs() >= BACKEND_CHECK_INTERVAL_SECS
            }
        };

        if should_check {
            self.task_manager.check_backend(self.api.clone());
            self.last_backend_check = Some(now);
        }
    }

    fn execute_actions(&mut self, actions: &mut ActionQueue) {
        for action in actions.drain() {
            match action {
                UiAction::CompleteProblem(problem_id) => {
                    self.task_manager.complete_problem(self.api.clone(), problem_id);
                }
                UiAction::SetFilter(filter) => {
                    self.filter = filter;
                }
                UiAction::GeneratePlan(days) => {
                    self.task_manager.fetch_study_plan(self.api.clone(), days);
                }
                UiAction::RefreshAll => {
                    self.refresh_all();
                }
            }
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        self.settings_data = settings;
        self.api = ApiClient::new(self.settings_data.api_base_url.clone());

        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }

        // Everything on screen refers to the old backend; refetch wholesale.
        self.loading.begin(LoadingPhase::BackendSwitch);
        self.refresh_all();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_backend_status();

        let mut actions = ActionQueue::new();

        if let Some(action) = TopBar::show(
            ctx,
            &mut self.settings_modal,
            &self.settings_data,
            self.backend_connected,
            // Refresh stays available whenever no fetch is already blocking
            // the UI, including after a failed startup load.
            !self.loading.is_blocking(),
        ) {
            match action {
                TopBarAction::RefreshAll => actions.push(UiAction::RefreshAll),
                TopBarAction::OpenPlanModal => self.plan_modal.open_modal(),
            }
        }

        recommendations::insights_panel(ctx, self, &mut actions);
        self.graph_view.show(ctx, &self.theme);
        problem_table::problem_list(ctx, self, &mut actions);

        if !study_plan_window(ctx, self) {
            self.study_plan = None;
        }

        self.plan_modal.show(ctx, &mut actions);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(settings);
        }

        self.loading.show(ctx, &self.theme);
        self.error_modal.show(ctx, &mut actions);

        let had_actions = !actions.is_empty();
        self.execute_actions(&mut actions);

        if had_actions {
            ctx.request_repaint();
        }

        // Background tasks settle between frames; keep polling while any are
        // in flight so results render without waiting for pointer input.
        if self.loading.is_blocking() || self.task_manager.has_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
