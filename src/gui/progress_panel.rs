use eframe::egui::{
    self,
    RichText,
};

use super::app::DashboardApp;
use crate::core::view_model::{
    concept_progress,
    overall_progress,
};

pub fn ui_progress(ui: &mut egui::Ui, app: &DashboardApp) {
    ui.heading(app.theme.heading("Progress"));
    ui.add_space(4.0);

    let overall = overall_progress(&app.snapshot);

    ui.label(RichText::new(format!("Overall: {}%", overall.percent.round() as u32)).strong());
    ui.add(
        egui::ProgressBar::new(overall.percent / 100.0)
            .fill(if overall.is_complete() { app.theme.green } else { app.theme.cyan })
            .show_percentage(),
    );

    ui.add_space(8.0);

    for concept in &app.snapshot.concepts {
        let stats = concept_progress(&app.snapshot, &concept.name);

        ui.horizontal(|ui| {
            ui.label(RichText::new(&concept.name).small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}/{}", stats.completed, stats.total))
                        .small()
                        .color(app.theme.comment),
                );
            });
        });
        ui.add(
            egui::ProgressBar::new(stats.percent / 100.0)
                .desired_height(5.0)
                .fill(if stats.is_complete() { app.theme.green } else { app.theme.cyan }),
        );
    }
}
