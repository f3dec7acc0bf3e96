use eframe::egui::{
    self,
    containers,
};

use crate::gui::settings_modal::{
    SettingsData,
    SettingsModal,
};

pub enum TopBarAction {
    RefreshAll,
    OpenPlanModal,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
        backend_connected: bool,
        can_refresh: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("Dashboard", |ui| {
                    if ui.add_enabled(can_refresh, egui::Button::new("Refresh")).clicked() {
                        action = Some(TopBarAction::RefreshAll);
                    }
                    if ui.button("Generate Study Plan...").clicked() {
                        action = Some(TopBarAction::OpenPlanModal);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Server Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, backend_connected);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, backend_connected: bool) {
        let color = if backend_connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if backend_connected {
            "Connected to the backend"
        } else {
            "Backend unreachable"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("backend").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
