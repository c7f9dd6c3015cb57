// src/engine/mod.rs

//! Orchestration layer for taskviz.
//!
//! This module ties together:
//! - the task store
//! - the scoring backend
//! - the request gate that keeps at most one request in flight
//! - the status line every action reports to
//!
//! The [`Workbench`] owns all of it and is passed explicitly to whatever
//! shell drives it; there is no global state.

use crate::graph::{GraphLayout, layout};
use crate::scoring::{RankedTaskRecord, ScoredBatch};

pub mod gate;
pub mod workbench;

pub use gate::{InFlight, RequestGate};
pub use workbench::Workbench;

pub const READY_MESSAGE: &str = "Ready. Add tasks and choose a strategy to analyze.";

/// The single line of feedback shown after every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    pub fn ready() -> Self {
        Self::info(READY_MESSAGE)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Which request produced an [`AnalysisView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Analyze,
    Suggest,
}

impl AnalysisSource {
    pub fn subtitle(self) -> &'static str {
        match self {
            AnalysisSource::Analyze => "Sorted by priority score.",
            AnalysisSource::Suggest => "Top 3 tasks recommended for today.",
        }
    }
}

/// What the shell shows after a successful analyze or suggest: the ranked
/// table and the graph drawn from the same list.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub source: AnalysisSource,
    pub strategy: String,
    pub tasks: Vec<RankedTaskRecord>,
    pub graph: GraphLayout,
}

impl AnalysisView {
    pub fn new(batch: ScoredBatch, source: AnalysisSource) -> Self {
        let graph = layout(&batch.tasks);
        Self {
            source,
            strategy: batch.strategy,
            tasks: batch.tasks,
            graph,
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.tasks.is_empty() {
            "No analyzed tasks to display yet."
        } else {
            self.source.subtitle()
        }
    }
}
