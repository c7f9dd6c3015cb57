// src/graph/mod.rs

//! Dependency graph rendering.
//!
//! - [`layout`] places an ordered task list on a ring and collects edges.
//! - [`style`] maps priority labels to colours and shortens titles.
//! - [`svg`] serializes a layout as an SVG document.
//!
//! Everything here is a pure function of its input; nothing is cached
//! between calls.

pub mod layout;
pub mod style;
pub mod svg;

pub use layout::{GraphEdge, GraphLayout, GraphNode, Point, layout};
pub use style::{NodeClass, truncate_title};
pub use svg::render_svg;

use crate::store::TaskRecord;
use crate::types::PriorityLabel;

/// Anything that can be drawn as a node: an id, a title, dependency ids and
/// optionally a priority label.
pub trait GraphSource {
    fn node_id(&self) -> &str;
    fn node_title(&self) -> &str;
    fn node_dependencies(&self) -> &[String];

    fn node_priority(&self) -> Option<PriorityLabel> {
        None
    }
}

impl GraphSource for TaskRecord {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn node_title(&self) -> &str {
        &self.title
    }

    fn node_dependencies(&self) -> &[String] {
        &self.dependencies
    }
}
