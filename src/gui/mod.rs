pub mod app;
mod error_modal;
mod graph_view;
mod loading_overlay;
mod plan_modal;
mod problem_table;
mod progress_panel;
mod recommendations;
mod settings_modal;
pub mod theme;
mod top_bar;

pub use app::DashboardApp;

use crate::core::view_model::ConceptFilter;

/// Intents collected while drawing. Widgets push actions instead of mutating
/// the app mid-frame; the app executes the queue once drawing is done.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    CompleteProblem(String),
    SetFilter(ConceptFilter),
    GeneratePlan(u32),
    RefreshAll,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = UiAction> + '_ {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
