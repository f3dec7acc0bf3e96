//! Concept-graph layout. The view treats layout as an injected capability so
//! the painting code never cares how positions are produced; the shipped
//! implementation places nodes on concentric rings by prerequisite depth and
//! involves no physics simulation.

use std::collections::HashMap;

use eframe::egui::{
    Pos2,
    Rect,
};

use crate::core::ConceptGraph;

pub trait GraphLayout {
    /// Produces a position for every node id in `graph`, inside `rect`.
    fn layout(&self, graph: &ConceptGraph, rect: Rect) -> HashMap<String, Pos2>;
}

/// Concentric rings: roots (no prerequisites) sit on the innermost ring,
/// each dependency level one ring further out. Nodes on a ring are spread
/// evenly, ordered by id, so the same graph always lays out the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingLayout;

impl RingLayout {
    fn depths(graph: &ConceptGraph) -> HashMap<&str, usize> {
        let mut prereqs: HashMap<&str, Vec<&str>> = HashMap::new();
        for node in &graph.nodes {
            prereqs.entry(node.id.as_str()).or_default();
        }
        for link in &graph.links {
            prereqs.entry(link.target.as_str()).or_default().push(link.source.as_str());
        }

        // Longest prerequisite chain below each node. The iteration cap keeps
        // a cyclic snapshot from hanging the UI; leftover nodes settle at
        // their current depth.
        let mut depths: HashMap<&str, usize> = prereqs.keys().map(|&id| (id, 0)).collect();
        for _ in 0..graph.nodes.len() {
            let mut changed = false;
            for (&id, sources) in &prereqs {
                let depth = sources
                    .iter()
                    .filter_map(|s| depths.get(s).copied())
                    .max()
                    .map_or(0, |d| d + 1);
                if depths.get(id) != Some(&depth) {
                    depths.insert(id, depth);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        depths
    }
}

impl GraphLayout for RingLayout {
    fn layout(&self, graph: &ConceptGraph, rect: Rect) -> HashMap<String, Pos2> {
        let mut positions = HashMap::new();
        if graph.nodes.is_empty() {
            return positions;
        }

        let depths = Self::depths(graph);
        let max_depth = depths.values().copied().max().unwrap_or(0);

        let mut rings: Vec<Vec<&str>> = vec![Vec::new(); max_depth + 1];
        for node in &graph.nodes {
            let depth = depths.get(node.id.as_str()).copied().unwrap_or(0);
            rings[depth].push(node.id.as_str());
        }
        for ring in &mut rings {
            ring.sort_unstable();
        }

        let center = rect.center();
        let max_radius = 0.5 * rect.width().min(rect.height()) - 30.0;
        let max_radius = max_radius.max(10.0);

        for (depth, ring) in rings.iter().enumerate() {
            let radius = if max_depth == 0 {
                max_radius * 0.5
            } else {
                max_radius * (depth as f32 + 0.5) / (max_depth as f32 + 0.5)
            };

            for (i, id) in ring.iter().enumerate() {
                let angle = std::f32::consts::TAU * i as f32 / ring.len() as f32
                    + depth as f32 * 0.5;
                let pos = Pos2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                );
                positions.insert(id.to_string(), pos);
            }
        }

        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        GraphLink,
        GraphNode,
    };

    fn node(id: &str, difficulty: u8) -> GraphNode {
        GraphNode { id: id.to_string(), difficulty, completed: false, proficiency: 0.0 }
    }

    fn link(source: &str, target: &str) -> GraphLink {
        GraphLink { source: source.to_string(), target: target.to_string() }
    }

    fn sample_graph() -> ConceptGraph {
        ConceptGraph {
            nodes: vec![node("Arrays", 2), node("Sorting", 4), node("Binary Search", 4)],
            links: vec![link("Arrays", "Sorting"), link("Sorting", "Binary Search")],
        }
    }

    #[test]
    fn every_node_gets_a_position() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(400.0, 400.0));
        let positions = RingLayout.layout(&sample_graph(), rect);

        assert_eq!(positions.len(), 3);
        for pos in positions.values() {
            assert!(rect.contains(*pos));
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(400.0, 400.0));
        let a = RingLayout.layout(&sample_graph(), rect);
        let b = RingLayout.layout(&sample_graph(), rect);
        assert_eq!(a, b);
    }

    #[test]
    fn prerequisites_sit_on_inner_rings() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(400.0, 400.0));
        let positions = RingLayout.layout(&sample_graph(), rect);

        let center = rect.center();
        let r = |id: &str| positions[id].distance(center);

        assert!(r("Arrays") < r("Sorting"));
        assert!(r("Sorting") < r("Binary Search"));
    }

    #[test]
    fn cyclic_links_do_not_hang() {
        let graph = ConceptGraph {
            nodes: vec![node("A", 1), node("B", 1)],
            links: vec![link("A", "B"), link("B", "A")],
        };
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(200.0, 200.0));
        assert_eq!(RingLayout.layout(&graph, rect).len(), 2);
    }
}
