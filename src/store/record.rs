// src/store/record.rs

use serde::{Deserialize, Serialize};

/// Canonical representation of one unit of work.
///
/// Serialized field-for-field as the scoring service expects it; absent
/// optional fields are written as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub importance: Option<i64>,
    /// Ids of prerequisite tasks, in the order they were given.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskRecord {
    /// A record with only an id and title set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            estimated_hours: None,
            importance: None,
            dependencies: Vec::new(),
        }
    }
}

/// Split a comma-separated dependency field into ids.
///
/// Segments are trimmed and empty segments dropped; order and duplicates are
/// kept as typed.
pub fn parse_dependencies(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
