use eframe::egui;

use super::{
    ActionQueue,
    UiAction,
};

/// What failed, with enough context to reissue the request from the modal.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureContext {
    SnapshotLoad,
    Recommendations,
    StudyPlan(u32),
    ConceptGraph,
    Completion(String),
}

impl FailureContext {
    pub fn title(&self) -> &'static str {
        match self {
            FailureContext::SnapshotLoad => "Load Error",
            FailureContext::Recommendations => "Recommendation Error",
            FailureContext::StudyPlan(_) => "Study Plan Error",
            FailureContext::ConceptGraph => "Graph Error",
            FailureContext::Completion(_) => "Completion Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            FailureContext::SnapshotLoad => {
                "Unable to load concepts and problems from the backend.".to_string()
            }
            FailureContext::Recommendations => {
                "Unable to refresh recommendations and the learning path.".to_string()
            }
            FailureContext::StudyPlan(days) => {
                format!("Unable to generate a {}-day study plan.", days)
            }
            FailureContext::ConceptGraph => "Unable to load the concept graph.".to_string(),
            FailureContext::Completion(problem_id) => {
                format!("Unable to mark problem '{}' complete.", problem_id)
            }
        }
    }

    /// The action that reissues exactly the request that failed.
    pub fn retry_action(&self) -> UiAction {
        match self {
            FailureContext::SnapshotLoad
            | FailureContext::Recommendations
            | FailureContext::ConceptGraph => UiAction::RefreshAll,
            FailureContext::StudyPlan(days) => UiAction::GeneratePlan(*days),
            FailureContext::Completion(problem_id) => {
                UiAction::CompleteProblem(problem_id.clone())
            }
        }
    }
}

/// Failure surface for background tasks. Nothing fails silently; every
/// reported failure carries a Retry button wired to its own request.
pub struct ErrorModal {
    failure: Option<(FailureContext, String)>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Replaces any failure already on screen; the latest one wins.
    pub fn report(&mut self, context: FailureContext, details: impl Into<String>) {
        self.failure = Some((context, details.into()));
    }

    pub fn show(&mut self, ctx: &egui::Context, actions: &mut ActionQueue) {
        let Some((context, details)) = &self.failure else {
            return;
        };

        let mut retry = false;

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(450.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(context.title()).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(context.message());

            ui.add_space(10.0);
            ui.collapsing("Technical Details", |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut details.as_str())
                        .desired_width(f32::INFINITY)
                        .desired_rows(4)
                        .code_editor(),
                );
            });

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                if ui.button("Retry").clicked() {
                    retry = true;
                    ui.close();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if retry {
            actions.push(context.retry_action());
        }

        if modal.should_close() {
            self.failure = None;
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_reissues_the_failed_request() {
        assert_eq!(FailureContext::SnapshotLoad.retry_action(), UiAction::RefreshAll);
        assert_eq!(FailureContext::ConceptGraph.retry_action(), UiAction::RefreshAll);
        assert_eq!(FailureContext::StudyPlan(7).retry_action(), UiAction::GeneratePlan(7));
        assert_eq!(
            FailureContext::Completion("p1".to_string()).retry_action(),
            UiAction::CompleteProblem("p1".to_string()),
        );
    }

    #[test]
    fn messages_name_the_failed_subject() {
        assert!(FailureContext::StudyPlan(7).message().contains("7-day"));
        assert!(FailureContext::Completion("p1".to_string()).message().contains("p1"));
    }

    #[test]
    fn latest_reported_failure_wins() {
        let mut modal = ErrorModal::new();
        modal.report(FailureContext::SnapshotLoad, "connection refused");
        modal.report(FailureContext::ConceptGraph, "timed out");

        let (context, details) = modal.failure.as_ref().unwrap();
        assert_eq!(*context, FailureContext::ConceptGraph);
        assert_eq!(details, "timed out");
    }
}
