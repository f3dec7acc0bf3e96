use eframe::egui::{
    self,
    RichText,
};

use super::{
    app::DashboardApp,
    ActionQueue,
    UiAction,
};
use crate::core::Problem;

/// Right-hand insights panel: recommended concepts, recommended problems and
/// the full learning path. The lists come straight off the last refresh
/// cycle; a recommended name missing from the concept snapshot is skipped
/// without an error row.
pub fn insights_panel(ctx: &egui::Context, app: &DashboardApp, actions: &mut ActionQueue) {
    egui::SidePanel::right("insights_panel").min_width(260.0).show(ctx, |ui| {
        egui::ScrollArea::vertical().id_salt("insights_scroll").show(ui, |ui| {
            ui.add_space(4.0);
            ui.heading(app.theme.heading("Recommended Concepts"));
            ui.add_space(4.0);
            ui_recommended_concepts(ui, app);

            ui.add_space(12.0);
            ui.heading(app.theme.heading("Recommended Problems"));
            ui.add_space(4.0);
            ui_recommended_problems(ui, app, actions);

            ui.add_space(12.0);
            ui.heading(app.theme.heading("Learning Path"));
            ui.add_space(4.0);
            ui_learning_path(ui, app);

            ui.add_space(12.0);
            super::progress_panel::ui_progress(ui, app);
        });
    });
}

fn ui_recommended_concepts(ui: &mut egui::Ui, app: &DashboardApp) {
    if app.recommended_concepts.is_empty() {
        ui.label(RichText::new("No recommendations available").italics().color(app.theme.comment));
        return;
    }

    for name in &app.recommended_concepts {
        let Some(concept) = app.snapshot.concept_by_name(name) else {
            continue;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&concept.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Level {}", concept.difficulty))
                            .color(app.theme.difficulty_color(concept.difficulty)),
                    );
                });
            });

            let prereq_line = if concept.prerequisites.is_empty() {
                "No prerequisites".to_string()
            } else {
                format!("Prerequisites: {}", concept.prerequisites.join(", "))
            };
            ui.label(RichText::new(prereq_line).small().color(app.theme.comment));

            ui.add(
                egui::ProgressBar::new(concept.proficiency)
                    .desired_height(5.0)
                    .fill(app.theme.cyan),
            );
        });
    }
}

fn ui_recommended_problems(ui: &mut egui::Ui, app: &DashboardApp, actions: &mut ActionQueue) {
    if app.recommended_problems.is_empty() {
        ui.label(RichText::new("No problems recommended").italics().color(app.theme.comment));
        return;
    }

    for problem in &app.recommended_problems {
        ui_problem_card(ui, app, problem, actions);
    }
}

fn ui_problem_card(
    ui: &mut egui::Ui,
    app: &DashboardApp,
    problem: &Problem,
    actions: &mut ActionQueue,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(problem.display_name()).strong());
                ui.label(RichText::new(&problem.concept).small().color(app.theme.comment));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✔").on_hover_text("Mark complete").clicked() {
                    actions.push(UiAction::CompleteProblem(problem.id.clone()));
                }
                ui.label(
                    RichText::new(format!("Level {}", problem.difficulty))
                        .color(app.theme.difficulty_color(problem.difficulty)),
                );
            });
        });
    });
}

fn ui_learning_path(ui: &mut egui::Ui, app: &DashboardApp) {
    if app.learning_path.is_empty() {
        ui.label(RichText::new("No learning path yet").italics().color(app.theme.comment));
        return;
    }

    for (i, concept) in app.learning_path.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}.", i + 1)).color(app.theme.comment));
            ui.label(concept);
        });
    }
}
