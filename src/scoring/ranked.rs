// src/scoring/ranked.rs

//! Records and envelopes returned by the scoring service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::{Result, TaskvizError};
use crate::graph::GraphSource;
use crate::types::{PriorityLabel, deserialize_label, null_as_default};

/// A task as annotated by the scoring service.
///
/// Only ever deserialized from a response. Every field is optional on the
/// wire, and `null` counts as absent, so a partially filled record still
/// renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankedTaskRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub importance: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub priority_label: Option<PriorityLabel>,
    /// Short explanations of the score, most relevant first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasons: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_score: Option<f64>,
}

impl RankedTaskRecord {
    /// Name shown in the analysis table: title, else id, else a placeholder.
    pub fn display_name(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.id.is_empty() {
            &self.id
        } else {
            "Untitled task"
        }
    }
}

impl GraphSource for RankedTaskRecord {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn node_title(&self) -> &str {
        &self.title
    }

    fn node_dependencies(&self) -> &[String] {
        &self.dependencies
    }

    fn node_priority(&self) -> Option<PriorityLabel> {
        self.priority_label
    }
}

/// A ranked list plus the strategy name the service says it used.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBatch {
    pub strategy: String,
    pub tasks: Vec<RankedTaskRecord>,
}

/// Interpret a response body.
///
/// The ranked list is normally under `tasks`; a bare top-level array is
/// accepted too. An object without a usable `tasks` array yields an empty
/// batch. `fallback_strategy` is used when the body does not echo one.
pub fn parse_scoring_response(body: Value, fallback_strategy: &str) -> Result<ScoredBatch> {
    let strategy = body
        .get("strategy")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_strategy)
        .to_string();

    let tasks = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(items)) => items,
            Some(other) if !other.is_null() => {
                warn!("scoring response has a non-array `tasks` field; showing nothing");
                Vec::new()
            }
            _ => Vec::new(),
        },
        other => {
            return Err(TaskvizError::Network(format!(
                "unexpected scoring response: {other}"
            )));
        }
    };

    let tasks = tasks
        .into_iter()
        .map(serde_json::from_value::<RankedTaskRecord>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| TaskvizError::Network(format!("malformed ranked task: {e}")))?;

    Ok(ScoredBatch { strategy, tasks })
}
