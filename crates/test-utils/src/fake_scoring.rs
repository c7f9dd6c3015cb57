use std::sync::{Arc, Mutex};

use taskviz::engine::RequestGate;
use taskviz::errors::TaskvizError;
use taskviz::scoring::{AnalyzeRequest, RankedTaskRecord, ScoredBatch, ScoringBackend, ScoringFuture};
use taskviz::types::Strategy;

/// What the fake was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    Analyze(AnalyzeRequest),
    Suggest(Strategy),
}

/// Shared record of calls, plus whether the gate was held during each call.
#[derive(Debug, Default)]
pub struct CallLog {
    pub calls: Vec<FakeCall>,
    pub gate_busy_during_call: Vec<bool>,
}

/// A fake scoring backend that:
/// - records every request
/// - answers from memory (echoing the submitted tasks for analyze)
/// - can be switched to fail every call with a network error.
pub struct FakeScoringBackend {
    log: Arc<Mutex<CallLog>>,
    suggestions: Vec<RankedTaskRecord>,
    fail: bool,
    gate: Option<RequestGate>,
}

impl FakeScoringBackend {
    pub fn new(log: Arc<Mutex<CallLog>>) -> Self {
        Self {
            log,
            suggestions: Vec::new(),
            fail: false,
            gate: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<RankedTaskRecord>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Record `gate.is_busy()` at the moment each request arrives.
    pub fn observing(mut self, gate: RequestGate) -> Self {
        self.gate = Some(gate);
        self
    }

    fn record(&self, call: FakeCall) {
        let busy = self.gate.as_ref().is_some_and(RequestGate::is_busy);
        let mut guard = self.log.lock().unwrap();
        guard.calls.push(call);
        guard.gate_busy_during_call.push(busy);
    }

    fn outcome(&self, batch: ScoredBatch) -> taskviz::errors::Result<ScoredBatch> {
        if self.fail {
            Err(TaskvizError::Network("Server returned 500 Internal Server Error".to_string()))
        } else {
            Ok(batch)
        }
    }
}

impl ScoringBackend for FakeScoringBackend {
    fn analyze(&self, request: AnalyzeRequest) -> ScoringFuture<'_> {
        self.record(FakeCall::Analyze(request.clone()));

        // Echo the tasks back unscored, in reverse to make ordering visible.
        let tasks = request
            .tasks
            .iter()
            .rev()
            .map(|t| RankedTaskRecord {
                id: t.id.clone(),
                title: t.title.clone(),
                due_date: t.due_date.clone(),
                estimated_hours: t.estimated_hours,
                importance: t.importance,
                dependencies: t.dependencies.clone(),
                ..RankedTaskRecord::default()
            })
            .collect();
        let result = self.outcome(ScoredBatch {
            strategy: request.strategy.to_string(),
            tasks,
        });

        Box::pin(async move { result })
    }

    fn suggest(&self, strategy: Strategy) -> ScoringFuture<'_> {
        self.record(FakeCall::Suggest(strategy));

        let result = self.outcome(ScoredBatch {
            strategy: strategy.to_string(),
            tasks: self.suggestions.clone(),
        });

        Box::pin(async move { result })
    }
}
