use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    app::DashboardApp,
    ActionQueue,
    UiAction,
};
use crate::core::view_model::{
    group_problems,
    ConceptFilter,
    ProblemGroup,
};

/// Central problem list: a concept filter combo box over the snapshot, rows
/// grouped by concept with lexically sorted group headers when "all" is
/// selected.
pub fn problem_list(ctx: &egui::Context, app: &DashboardApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading("Problems"));
        ui.add_space(4.0);

        ui_filter_row(ui, app, actions);
        ui.add_space(8.0);

        let groups = group_problems(&app.snapshot.problems, &app.filter);

        if groups.is_empty() {
            ui.label(
                RichText::new("No problems found").italics().color(app.theme.comment),
            );
            return;
        }

        let show_headers = app.filter == ConceptFilter::All;

        egui::ScrollArea::vertical().id_salt("problem_list_scroll").show(ui, |ui| {
            for group in &groups {
                if show_headers {
                    ui.add_space(6.0);
                    ui.label(app.theme.bold(group.concept).size(16.0));
                    ui.separator();
                }

                ui_group_rows(ui, app, group, actions);
            }
        });
    });
}

fn ui_filter_row(ui: &mut egui::Ui, app: &DashboardApp, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        ui.label("Concept:");

        let mut selected = app.filter.clone();

        egui::ComboBox::from_id_salt("concept_filter")
            .selected_text(selected.label().to_string())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, ConceptFilter::All, "All Concepts");
                for concept in &app.snapshot.concepts {
                    ui.selectable_value(
                        &mut selected,
                        ConceptFilter::Only(concept.name.clone()),
                        &concept.name,
                    );
                }
            });

        if selected != app.filter {
            actions.push(UiAction::SetFilter(selected));
        }
    });
}

fn ui_group_rows(
    ui: &mut egui::Ui,
    app: &DashboardApp,
    group: &ProblemGroup<'_>,
    actions: &mut ActionQueue,
) {
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .id_salt(group.concept)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder())
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(120.0))
        .body(|mut body| {
            for problem in &group.problems {
                body.row(text_height + 10.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(problem.display_name()).strong());
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("Level {}", problem.difficulty))
                                .color(app.theme.difficulty_color(problem.difficulty)),
                        );
                    });
                    row.col(|ui| {
                        if problem.completed {
                            ui.label(
                                RichText::new("✔ Completed").color(app.theme.green),
                            );
                        } else if ui.button("Mark Complete").clicked() {
                            actions.push(UiAction::CompleteProblem(problem.id.clone()));
                        }
                    });
                });
            }
        });
}
