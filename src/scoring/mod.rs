// src/scoring/mod.rs

//! Boundary with the remote scoring service.
//!
//! - [`ranked`] holds the response types and the envelope parser.
//! - [`backend`] defines the `ScoringBackend` trait the workbench calls.
//! - [`http`] is the production backend built on `reqwest`.

pub mod backend;
pub mod http;
pub mod ranked;

pub use backend::{AnalyzeRequest, ScoringBackend, ScoringFuture};
pub use http::HttpScoringBackend;
pub use ranked::{RankedTaskRecord, ScoredBatch, parse_scoring_response};
