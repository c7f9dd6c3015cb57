// src/graph/layout.rs

use std::collections::HashMap;
use std::f64::consts::PI;

use tracing::debug;

use crate::graph::style::{NodeClass, truncate_title};
use crate::graph::GraphSource;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const CENTER_X: f64 = CANVAS_WIDTH / 2.0;
pub const CENTER_Y: f64 = CANVAS_HEIGHT / 2.0;

/// Ring radius: the shorter canvas side divided by 2.6.
pub const RADIUS: f64 = CANVAS_HEIGHT / 2.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A task placed on the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    /// Display title, already truncated.
    pub label: String,
    /// Angle of this node's slot on the ring (index 0 is `-π/2`).
    pub angle: f64,
    pub position: Point,
    pub class: NodeClass,
}

/// Directed edge from a prerequisite to the task that depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub from_pos: Point,
    pub to_pos: Point,
}

/// Drawable description of a task list.
///
/// An empty layout is the "nothing to show" state, not a failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphLayout {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphLayout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// `(from, to)` id pairs in emission order.
    pub fn edge_pairs(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }
}

/// Angle of slot `index` on a ring of `n` slots, starting at the top and
/// proceeding clockwise in screen coordinates.
pub fn slot_angle(index: usize, n: usize) -> f64 {
    (2.0 * PI * index as f64) / n as f64 - PI / 2.0
}

pub fn slot_position(index: usize, n: usize) -> Point {
    let angle = slot_angle(index, n);
    Point {
        x: CENTER_X + RADIUS * angle.cos(),
        y: CENTER_Y + RADIUS * angle.sin(),
    }
}

/// Place `tasks` on a single ring and connect dependencies.
///
/// Placement depends only on index and count. Positions are keyed by id, so
/// when ids repeat the last occurrence wins and every node with that id is
/// drawn there. Dependencies on ids outside `tasks` are skipped.
pub fn layout<T: GraphSource>(tasks: &[T]) -> GraphLayout {
    let n = tasks.len();
    if n == 0 {
        return GraphLayout::default();
    }

    let mut positions: HashMap<&str, Point> = HashMap::with_capacity(n);
    for (index, task) in tasks.iter().enumerate() {
        positions.insert(task.node_id(), slot_position(index, n));
    }

    let mut edges = Vec::new();
    for task in tasks {
        let to_pos = positions[task.node_id()];
        for dep in task.node_dependencies() {
            let Some(&from_pos) = positions.get(dep.as_str()) else {
                continue;
            };
            edges.push(GraphEdge {
                from: dep.clone(),
                to: task.node_id().to_string(),
                from_pos,
                to_pos,
            });
        }
    }

    let nodes = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| GraphNode {
            id: task.node_id().to_string(),
            label: truncate_title(task.node_title()),
            angle: slot_angle(index, n),
            position: positions[task.node_id()],
            class: NodeClass::from_label(task.node_priority()),
        })
        .collect();

    debug!(nodes = n, edges = edges.len(), "computed ring layout");

    GraphLayout { nodes, edges }
}
