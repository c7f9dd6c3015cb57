// src/graph/style.rs

//! Node colour classes and label truncation.

use crate::types::PriorityLabel;

/// Titles longer than this many characters get truncated.
pub const TITLE_TRUNCATE_ABOVE: usize = 18;

/// Number of characters kept when a title is truncated.
pub const TITLE_KEEP_CHARS: usize = 16;

pub const ELLIPSIS: char = '…';

/// Visual class of a node, derived from its priority label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    High,
    Medium,
    Low,
}

impl NodeClass {
    /// Unlabelled nodes (local preview, or labels the service did not send)
    /// are drawn in the lowest-priority class.
    pub fn from_label(label: Option<PriorityLabel>) -> Self {
        match label {
            Some(PriorityLabel::High) => NodeClass::High,
            Some(PriorityLabel::Medium) => NodeClass::Medium,
            Some(PriorityLabel::Low) | None => NodeClass::Low,
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            NodeClass::High => "rgba(34,197,94,0.85)",
            NodeClass::Medium => "rgba(234,179,8,0.9)",
            NodeClass::Low => "rgba(249,115,22,0.9)",
        }
    }
}

/// Shorten a title for display under a node.
///
/// Note the asymmetry: a title is only cut once it exceeds 18 characters,
/// but then keeps just 16 plus the ellipsis.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_TRUNCATE_ABOVE {
        let mut short: String = title.chars().take(TITLE_KEEP_CHARS).collect();
        short.push(ELLIPSIS);
        short
    } else {
        title.to_string()
    }
}
