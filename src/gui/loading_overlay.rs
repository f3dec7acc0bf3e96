use eframe::egui;

use crate::gui::theme::Theme;

/// The two stretches where the dashboard has no trustworthy data on screen
/// and blocks input: the first snapshot load after startup, and the reload
/// after the backend URL changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    InitialLoad,
    BackendSwitch,
}

impl LoadingPhase {
    fn caption(&self) -> &'static str {
        match self {
            LoadingPhase::InitialLoad => "Loading dashboard data...",
            LoadingPhase::BackendSwitch => "Connecting to the new backend...",
        }
    }
}

pub struct LoadingOverlay {
    phase: Option<LoadingPhase>,
}

impl LoadingOverlay {
    /// Starts blocking; the app is born waiting for its first snapshot.
    pub fn new() -> Self {
        Self { phase: Some(LoadingPhase::InitialLoad) }
    }

    pub fn begin(&mut self, phase: LoadingPhase) {
        self.phase = Some(phase);
    }

    /// Ends the blocking stretch. Called whether the pending load succeeded
    /// or failed; failures continue in the error modal.
    pub fn finish(&mut self) {
        self.phase = None;
    }

    pub fn is_blocking(&self) -> bool {
        self.phase.is_some()
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        let Some(phase) = self.phase else {
            return;
        };

        egui::Area::new(egui::Id::new("loading_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                ui.allocate_space(ui.ctx().screen_rect().size());
                ui.painter().rect_filled(
                    ui.ctx().screen_rect(),
                    0.0,
                    egui::Color32::from_black_alpha(120),
                );
            });

        egui::Window::new("loading_box")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(egui::Vec2::new(240.0, 90.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke = egui::Stroke::new(2.0, theme.cyan);

                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.add(egui::Spinner::new().size(22.0));
                    ui.add_space(6.0);
                    ui.label(phase.caption());
                    ui.add_space(10.0);
                });
            });
    }
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_from_startup_until_first_snapshot_settles() {
        let mut overlay = LoadingOverlay::new();
        assert!(overlay.is_blocking());

        overlay.finish();
        assert!(!overlay.is_blocking());

        overlay.begin(LoadingPhase::BackendSwitch);
        assert!(overlay.is_blocking());
    }

    #[test]
    fn captions_track_the_phase() {
        assert_eq!(LoadingPhase::InitialLoad.caption(), "Loading dashboard data...");
        assert_eq!(LoadingPhase::BackendSwitch.caption(), "Connecting to the new backend...");
    }
}
