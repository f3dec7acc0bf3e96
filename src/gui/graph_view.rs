use std::collections::HashMap;

use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    Pos2,
    Sense,
    Stroke,
};

use super::theme::{
    blend_colors,
    Theme,
};
use crate::{
    core::ConceptGraph,
    graph::{
        GraphLayout,
        RingLayout,
    },
};

const NODE_RADIUS: f32 = 13.0;
const NODE_RADIUS_DONE: f32 = 16.0;
const NODE_RADIUS_HOVER: f32 = 20.0;

/// Paints the prerequisite graph. Positions come from the injected layout;
/// this view only maps node state to color/radius and lets the pointer drag
/// nodes around. Dragged positions stick until the next graph fetch throws
/// the whole arrangement away.
pub struct GraphView {
    graph: ConceptGraph,
    positions: HashMap<String, Pos2>,
    layout: Box<dyn GraphLayout>,
    needs_layout: bool,
}

impl GraphView {
    pub fn new() -> Self {
        Self {
            graph: ConceptGraph::default(),
            positions: HashMap::new(),
            layout: Box::new(RingLayout),
            needs_layout: false,
        }
    }

    /// Replaces the snapshot wholesale and discards every prior position,
    /// pinned or not.
    pub fn set_graph(&mut self, graph: ConceptGraph) {
        self.graph = graph;
        self.positions.clear();
        self.needs_layout = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        egui::TopBottomPanel::bottom("graph_panel").exact_height(280.0).show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(theme.heading("Concept Graph"));

            let (rect, _response) =
                ui.allocate_exact_size(ui.available_size(), Sense::hover());

            if self.needs_layout {
                self.positions = self.layout.layout(&self.graph, rect);
                self.needs_layout = false;
            }

            if self.graph.nodes.is_empty() {
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "No graph data",
                    FontId::proportional(14.0),
                    theme.comment,
                );
                return;
            }

            self.paint_links(ui, theme);
            self.paint_nodes(ui, rect, theme);
        });
    }

    fn paint_links(&self, ui: &egui::Ui, theme: &Theme) {
        let stroke = Stroke::new(2.0, blend_colors(theme.comment, theme.background_dark, 0.4));

        for link in &self.graph.links {
            let (Some(&source), Some(&target)) =
                (self.positions.get(&link.source), self.positions.get(&link.target))
            else {
                continue;
            };
            ui.painter().line_segment([source, target], stroke);
        }
    }

    fn paint_nodes(&mut self, ui: &egui::Ui, rect: egui::Rect, theme: &Theme) {
        for node in &self.graph.nodes {
            let Some(pos) = self.positions.get_mut(&node.id) else {
                continue;
            };

            let base_radius = if node.completed { NODE_RADIUS_DONE } else { NODE_RADIUS };
            let hit_rect = egui::Rect::from_center_size(
                *pos,
                egui::Vec2::splat(base_radius * 2.0),
            );

            let id = ui.id().with("graph_node").with(&node.id);
            let response = ui.interact(hit_rect, id, Sense::drag());

            if response.dragged() {
                *pos += response.drag_delta();
                pos.x = pos.x.clamp(rect.left(), rect.right());
                pos.y = pos.y.clamp(rect.top(), rect.bottom());
            }

            let radius = if response.hovered() { NODE_RADIUS_HOVER } else { base_radius };
            let fill = if node.completed {
                theme.green
            } else {
                theme.difficulty_color(node.difficulty)
            };

            ui.painter().circle(*pos, radius, fill, Stroke::new(2.0, Color32::WHITE));
            ui.painter().text(
                *pos + egui::Vec2::new(0.0, radius + 8.0),
                Align2::CENTER_CENTER,
                &node.id,
                FontId::proportional(10.0),
                theme.foreground,
            );

            response.on_hover_text(format!(
                "{} (level {}{})",
                node.id,
                node.difficulty,
                if node.completed { ", completed" } else { "" }
            ));
        }
    }
}

impl Default for GraphView {
    fn default() -> Self {
        Self::new()
    }
}
