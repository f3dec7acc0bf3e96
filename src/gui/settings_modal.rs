use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::api::DEFAULT_BASE_URL;

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub api_base_url: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_BASE_URL.to_string() }
    }
}

/// Server settings: the backend base URL. Edits a temporary copy with a dirty
/// check; saving hands the new settings back so the app can rebuild its API
/// client and refetch.
pub struct SettingsModal {
    open: bool,
    original: SettingsData,
    url_input: String,
    status: Option<String>,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            original: SettingsData::default(),
            url_input: String::new(),
            status: None,
        }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.url_input = current.api_base_url.clone();
        self.original = current;
        self.status = None;
        self.open = true;
    }

    fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("server_settings_modal")).show(ctx, |ui| {
            ui.heading("Server Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("API base URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input).desired_width(260.0),
                );
            });

            if !Self::is_valid_url(self.url_input.trim()) {
                ui.colored_label(
                    egui::Color32::RED,
                    "⚠ URL must start with http:// or https://",
                );
            }

            if let Some(status) = &self.status {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, "ℹ");
                    ui.label(status);
                });
            }

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.url_input.trim() != self.original.api_base_url;

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    let url = self.url_input.trim().to_string();
                    if Self::is_valid_url(&url) {
                        let settings = SettingsData { api_base_url: url };
                        self.original = settings.clone();
                        result = Some(settings);
                        ui.close();
                    } else {
                        self.status = Some("Invalid URL. No changes saved.".to_string());
                    }
                } else if cancel_clicked {
                    self.url_input = self.original.api_base_url.clone();
                    self.status = None;
                } else if reset_clicked {
                    self.url_input = DEFAULT_BASE_URL.to_string();
                    self.status = None;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
