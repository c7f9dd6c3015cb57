// src/scoring/backend.rs

//! Pluggable scoring backend abstraction.
//!
//! The workbench talks to a `ScoringBackend` instead of an HTTP client
//! directly, so tests can swap in a fake that answers from memory while
//! production uses [`HttpScoringBackend`](super::http::HttpScoringBackend).

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::errors::Result;
use crate::scoring::ranked::ScoredBatch;
use crate::store::TaskRecord;
use crate::types::Strategy;

pub type ScoringFuture<'a> = Pin<Box<dyn Future<Output = Result<ScoredBatch>> + Send + 'a>>;

/// Body of an analyze request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub strategy: Strategy,
    pub tasks: Vec<TaskRecord>,
}

/// Trait abstracting the remote scoring service.
pub trait ScoringBackend: Send + Sync {
    /// Rank the given tasks with the given strategy.
    fn analyze(&self, request: AnalyzeRequest) -> ScoringFuture<'_>;

    /// Fetch the service's current top recommendations. Independent of the
    /// local task list.
    fn suggest(&self, strategy: Strategy) -> ScoringFuture<'_>;
}
