// src/store/draft.rs

//! Manual-entry drafts and their validation.

use crate::errors::{Result, TaskvizError};
use crate::store::record::parse_dependencies;

/// Raw form fields for a task entered by hand.
///
/// Every field is the untrimmed text the user typed; an empty string means
/// "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub id: String,
    pub title: String,
    pub due_date: String,
    pub estimated_hours: String,
    pub importance: String,
    pub dependencies: String,
}

/// A draft whose fields have all been checked and converted.
///
/// `id` is `None` when the user left it blank and one must be generated.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedDraft {
    pub id: Option<String>,
    pub title: String,
    pub due_date: Option<String>,
    pub estimated_hours: Option<f64>,
    pub importance: Option<i64>,
    pub dependencies: Vec<String>,
}

impl TaskDraft {
    pub(crate) fn validate(&self) -> Result<ValidatedDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskvizError::Validation(
                "Please provide at least a task title.".to_string(),
            ));
        }

        let id = non_empty(&self.id);
        let due_date = non_empty(&self.due_date);

        let estimated_hours = match non_empty(&self.estimated_hours) {
            None => None,
            Some(raw) => Some(parse_hours(&raw)?),
        };

        let importance = match non_empty(&self.importance) {
            None => None,
            Some(raw) => Some(parse_importance(&raw)?),
        };

        Ok(ValidatedDraft {
            id,
            title: title.to_string(),
            due_date,
            estimated_hours,
            importance,
            dependencies: parse_dependencies(&self.dependencies),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_hours(raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours >= 0.0 => Ok(hours),
        _ => Err(TaskvizError::Validation(
            "Estimated hours must be a non-negative number.".to_string(),
        )),
    }
}

fn parse_importance(raw: &str) -> Result<i64> {
    match raw.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && (1.0..=10.0).contains(&value) => Ok(value as i64),
        _ => Err(TaskvizError::Validation(
            "Importance must be an integer between 1 and 10.".to_string(),
        )),
    }
}
