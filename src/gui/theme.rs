use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
};

#[derive(Clone)]
pub struct Theme {
    pub background: Color32,
    pub background_dark: Color32,
    pub background_darker: Color32,
    pub background_light: Color32,
    pub background_lighter: Color32,
    pub foreground: Color32,
    pub selection: Color32,
    pub comment: Color32,
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub purple: Color32,
    pub cyan: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            yellow: Color32::from_rgb(0xf1, 0xfa, 0x8c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.purple)
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.orange)
    }

    /// Five-bucket ramp over the 1-10 difficulty scale: green, cyan, yellow,
    /// orange, red. Difficulties 1-2 share a bucket, 3-4 the next, and so on.
    pub fn difficulty_color(&self, difficulty: u8) -> Color32 {
        let ramp = [self.green, self.cyan, self.yellow, self.orange, self.red];
        let index = (difficulty.saturating_sub(1) / 2).min(ramp.len() as u8 - 1);
        ramp[index as usize]
    }
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let default = Visuals::dark();

    ctx.set_visuals(Visuals {
        dark_mode: true,
        widgets: Widgets {
            noninteractive: WidgetVisuals {
                bg_fill: theme.background,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke {
                    color: theme.background_dark,
                    ..default.widgets.noninteractive.bg_stroke
                },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.noninteractive.fg_stroke
                },
                ..default.widgets.noninteractive
            },
            inactive: WidgetVisuals {
                bg_fill: theme.background_light,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke {
                    color: theme.background_dark,
                    ..default.widgets.inactive.bg_stroke
                },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.inactive.fg_stroke
                },
                ..default.widgets.inactive
            },
            hovered: WidgetVisuals {
                bg_fill: theme.selection,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke { color: theme.cyan, ..default.widgets.hovered.bg_stroke },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.hovered.fg_stroke
                },
                ..default.widgets.hovered
            },
            active: WidgetVisuals {
                bg_fill: theme.selection,
                weak_bg_fill: theme.background_light,
                bg_stroke: Stroke { color: theme.cyan, ..default.widgets.active.bg_stroke },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.active.fg_stroke
                },
                ..default.widgets.active
            },
            open: WidgetVisuals {
                bg_fill: theme.background_dark,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke { color: theme.purple, ..default.widgets.open.bg_stroke },
                fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                ..default.widgets.open
            },
        },
        selection: Selection {
            bg_fill: theme.selection,
            stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
        },
        hyperlink_color: theme.cyan,
        faint_bg_color: theme.background_darker,
        extreme_bg_color: theme.background_darker,
        code_bg_color: theme.background_dark,
        error_fg_color: theme.red,
        warn_fg_color: theme.orange,
        window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
        window_fill: theme.background,
        window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
        panel_fill: theme.background_dark,
        popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
        collapsing_header_frame: true,
        ..default
    });

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_ramp_buckets() {
        let theme = Theme::dracula();

        assert_eq!(theme.difficulty_color(1), theme.green);
        assert_eq!(theme.difficulty_color(2), theme.green);
        assert_eq!(theme.difficulty_color(3), theme.cyan);
        assert_eq!(theme.difficulty_color(6), theme.yellow);
        assert_eq!(theme.difficulty_color(8), theme.orange);
        assert_eq!(theme.difficulty_color(10), theme.red);
    }
}
