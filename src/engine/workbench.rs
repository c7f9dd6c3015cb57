// src/engine/workbench.rs

use std::fmt;

use tracing::{error, info, warn};

use crate::engine::gate::RequestGate;
use crate::engine::{AnalysisSource, AnalysisView, Status};
use crate::errors::{Result, TaskvizError};
use crate::graph::{GraphLayout, layout};
use crate::scoring::{AnalyzeRequest, ScoredBatch, ScoringBackend};
use crate::store::{TaskDraft, TaskRecord, TaskStore};
use crate::types::Strategy;

/// Owns the task store and drives every user action.
///
/// Local actions (add, load, clear) are synchronous. Analyze and suggest go
/// through the scoring backend and hold the [`RequestGate`] for the duration
/// of the call. Every action, successful or not, leaves a [`Status`] behind
/// and keeps the workbench usable.
pub struct Workbench<B: ScoringBackend> {
    store: TaskStore,
    backend: B,
    gate: RequestGate,
    strategy: Strategy,
    status: Status,
    last_analysis: Option<AnalysisView>,
}

impl<B: ScoringBackend> fmt::Debug for Workbench<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench")
            .field("store", &self.store)
            .field("strategy", &self.strategy)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl<B: ScoringBackend> Workbench<B> {
    pub fn new(backend: B, strategy: Strategy) -> Self {
        Self::with_gate(backend, strategy, RequestGate::new())
    }

    /// Build a workbench around an existing gate, e.g. one shared with a
    /// shell that greys out its controls while the gate is busy.
    pub fn with_gate(backend: B, strategy: Strategy, gate: RequestGate) -> Self {
        Self {
            store: TaskStore::new(),
            backend,
            gate,
            strategy,
            status: Status::ready(),
            last_analysis: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Result of the most recent successful analyze/suggest, if still shown.
    pub fn last_analysis(&self) -> Option<&AnalysisView> {
        self.last_analysis.as_ref()
    }

    pub fn add_task(&mut self, draft: &TaskDraft) -> Result<TaskRecord> {
        match self.store.add(draft) {
            Ok(record) => {
                let record = record.clone();
                self.status = Status::info(format!("Task \"{}\" added to the list.", record.title));
                Ok(record)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn load_json(&mut self, raw: &str) -> Result<usize> {
        match self.store.bulk_load(raw) {
            Ok(count) => {
                self.status = Status::info(format!(
                    "Loaded {count} task(s) from JSON into the current list."
                ));
                Ok(count)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Empty the store and drop whatever analysis was on display.
    pub fn clear(&mut self) {
        self.store.clear();
        self.last_analysis = None;
        self.status = Status::info("All tasks cleared.");
    }

    /// Record a failure that happened around the workbench rather than in
    /// one of its actions, e.g. the shell could not read an input file.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.status = Status::error(message);
    }

    /// Unscored graph of the current store contents.
    pub fn preview_graph(&self) -> GraphLayout {
        layout(self.store.list())
    }

    /// Send the current tasks for ranking with the selected strategy.
    pub async fn analyze(&mut self) -> Result<AnalysisView> {
        if self.store.is_empty() {
            return Err(self.fail(TaskvizError::Validation(
                "Add at least one task before analyzing.".to_string(),
            )));
        }

        let Some(_in_flight) = self.gate.try_acquire() else {
            return Err(self.fail(TaskvizError::Busy));
        };

        self.status = Status::info("Analyzing tasks with current strategy…");
        let request = AnalyzeRequest {
            strategy: self.strategy,
            tasks: self.store.snapshot(),
        };
        info!(tasks = request.tasks.len(), strategy = %request.strategy, "requesting analysis");

        let result = self.backend.analyze(request).await;
        match result {
            Ok(batch) => Ok(self.show(
                batch,
                AnalysisSource::Analyze,
                "Analysis complete. Tasks are sorted by priority.",
            )),
            Err(err) => {
                error!(error = %err, "analysis request failed");
                Err(self.fail_with(err, "Failed to analyze tasks. Check logs for details."))
            }
        }
    }

    /// Fetch the service's top recommendations. Does not read the store.
    pub async fn suggest(&mut self) -> Result<AnalysisView> {
        let Some(_in_flight) = self.gate.try_acquire() else {
            return Err(self.fail(TaskvizError::Busy));
        };

        self.status = Status::info("Requesting top 3 suggestions from backend…");
        info!(strategy = %self.strategy, "requesting suggestions");

        let result = self.backend.suggest(self.strategy).await;
        match result {
            Ok(batch) => Ok(self.show(
                batch,
                AnalysisSource::Suggest,
                "Suggestions loaded successfully.",
            )),
            Err(err) => {
                error!(error = %err, "suggestion request failed");
                Err(self.fail_with(err, "Failed to load suggestions. Check logs for details."))
            }
        }
    }

    fn show(&mut self, batch: ScoredBatch, source: AnalysisSource, message: &str) -> AnalysisView {
        let view = AnalysisView::new(batch, source);
        self.last_analysis = Some(view.clone());
        self.status = Status::info(message);
        view
    }

    fn fail(&mut self, err: TaskvizError) -> TaskvizError {
        warn!(error = %err, "action rejected");
        self.status = Status::error(err.status_message());
        err
    }

    fn fail_with(&mut self, err: TaskvizError, message: &str) -> TaskvizError {
        self.status = Status::error(message);
        err
    }
}
