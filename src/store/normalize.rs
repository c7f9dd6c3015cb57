// src/store/normalize.rs

//! Lenient normalization of bulk-loaded task payloads.
//!
//! The payload must be a JSON array; that is the only hard check. Each
//! element is then coerced field by field into a [`TaskRecord`]. A malformed
//! element never fails the load, it just loses the fields that could not be
//! understood.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::errors::{Result, TaskvizError};
use crate::store::record::TaskRecord;

/// Parse a raw bulk payload and normalize every element.
pub fn parse_bulk_payload(raw: &str) -> Result<Vec<TaskRecord>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TaskvizError::Validation(
            "Please paste a JSON array of tasks first.".to_string(),
        ));
    }

    let parsed: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = parsed else {
        return Err(TaskvizError::Shape(format!(
            "expected a JSON array of task objects, got {}",
            kind_of(&parsed)
        )));
    };

    Ok(items
        .iter()
        .enumerate()
        .map(|(idx, item)| normalize_task(idx, item))
        .collect())
}

/// Coerce a single loosely-typed element at position `idx` into a record.
pub fn normalize_task(idx: usize, item: &Value) -> TaskRecord {
    let empty = Map::new();
    let fields = match item {
        Value::Object(map) => map,
        other => {
            debug!(idx, kind = kind_of(other), "bulk element is not an object; using fallbacks");
            &empty
        }
    };

    let id = fields
        .get("id")
        .filter(|v| is_truthy(v))
        .map(value_text)
        .unwrap_or_else(|| format!("T{}", idx + 1));

    let title = fields
        .get("title")
        .filter(|v| is_truthy(v))
        .map(value_text)
        .unwrap_or_else(|| format!("Task {id}"));

    let due_date = fields
        .get("due_date")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let estimated_hours = fields.get("estimated_hours").and_then(coerce_number);

    let importance = fields
        .get("importance")
        .and_then(coerce_number)
        .filter(|n| n.fract() == 0.0)
        .map(|n| n as i64);

    let dependencies = match fields.get("dependencies") {
        Some(Value::Array(deps)) => deps.iter().map(value_text).collect(),
        _ => Vec::new(),
    };

    TaskRecord {
        id,
        title,
        due_date,
        estimated_hours,
        importance,
        dependencies,
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` count as "not provided".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Textual form of a JSON value, used for ids, titles and dependency refs.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Integral floats print without a fractional part, so `1.0` and `1` both
/// become `"1"`.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
