use eframe::egui::{
    self,
    RichText,
};

use super::{
    app::DashboardApp,
    ActionQueue,
    UiAction,
};
use crate::core::view_model::{
    parse_plan_days,
    resolve_plan_day,
};

/// Day-count prompt. The input stays free text; anything that does not parse
/// as a positive integer falls back to 10 days.
pub struct PlanModal {
    open: bool,
    days_input: String,
}

impl PlanModal {
    pub fn new() -> Self {
        Self { open: false, days_input: "10".to_string() }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, actions: &mut ActionQueue) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("plan_modal")).show(ctx, |ui| {
            ui.heading("Generate Study Plan");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Number of days:");
                ui.add(egui::TextEdit::singleline(&mut self.days_input).desired_width(60.0));
            });

            ui.add_space(10.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Create Plan").clicked() {
                    actions.push(UiAction::GeneratePlan(parse_plan_days(&self.days_input)));
                    ui.close();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for PlanModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Floating study-plan window, shown only while a plan is held in memory.
/// Regeneration replaces the whole plan; closing the window drops it back to
/// the idle state.
pub fn study_plan_window(ctx: &egui::Context, app: &DashboardApp) -> bool {
    let Some(plan) = &app.study_plan else {
        return true;
    };

    let mut keep_open = true;

    egui::Window::new("Study Plan")
        .open(&mut keep_open)
        .default_width(360.0)
        .vscroll(true)
        .show(ctx, |ui| {
            if plan.is_empty() {
                ui.label(
                    RichText::new("No study plan available").italics().color(app.theme.comment),
                );
                return;
            }

            for day in plan {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(app.theme.bold(&format!("Day {}", day.day)).size(16.0));

                    if !day.concepts.is_empty() {
                        ui.label(RichText::new("Concepts").strong());
                        ui.horizontal_wrapped(|ui| {
                            for concept in &day.concepts {
                                ui.label(
                                    RichText::new(concept)
                                        .small()
                                        .background_color(app.theme.background_light),
                                );
                            }
                        });
                    }

                    let problems = resolve_plan_day(day, &app.snapshot);
                    if !problems.is_empty() {
                        ui.label(RichText::new("Problems").strong());
                        for problem in problems {
                            ui.horizontal(|ui| {
                                let name = RichText::new(problem.display_name());
                                if problem.completed {
                                    ui.label(name.strikethrough().color(app.theme.comment));
                                } else {
                                    ui.label(name);
                                }
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(
                                            RichText::new(format!("Level {}", problem.difficulty))
                                                .small()
                                                .color(
                                                    app.theme
                                                        .difficulty_color(problem.difficulty),
                                                ),
                                        );
                                        ui.label(
                                            RichText::new(&problem.concept)
                                                .small()
                                                .color(app.theme.comment),
                                        );
                                    },
                                );
                            });
                        }
                    }
                });
                ui.add_space(6.0);
            }
        });

    keep_open
}
