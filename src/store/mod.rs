// src/store/mod.rs

//! The canonical in-memory task list.
//!
//! - [`record`] defines [`TaskRecord`] and the dependency field parser.
//! - [`draft`] validates hand-entered form fields.
//! - [`normalize`] coerces bulk JSON payloads into records.
//!
//! [`TaskStore`] is the only owner of the list. Reads hand out shared
//! borrows or owned snapshots, so callers can never edit stored records.

pub mod draft;
pub mod normalize;
pub mod record;

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::errors::{Result, TaskvizError};

pub use draft::TaskDraft;
pub use normalize::parse_bulk_payload;
pub use record::{TaskRecord, parse_dependencies};

#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<TaskRecord>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Validate a hand-entered draft and append it.
    ///
    /// Nothing is mutated unless every field validates, so a failed add
    /// leaves the list exactly as it was.
    pub fn add(&mut self, draft: &TaskDraft) -> Result<&TaskRecord> {
        let validated = draft.validate()?;

        let id = match validated.id {
            Some(id) => {
                if self.contains_id(&id) {
                    warn!(%id, "rejecting manual task with duplicate id");
                    return Err(TaskvizError::Validation(format!(
                        "A task with id \"{id}\" already exists."
                    )));
                }
                id
            }
            None => self.next_free_id(),
        };

        let record = TaskRecord {
            id,
            title: validated.title,
            due_date: validated.due_date,
            estimated_hours: validated.estimated_hours,
            importance: validated.importance,
            dependencies: validated.dependencies,
        };

        debug!(id = %record.id, title = %record.title, "task added");
        self.tasks.push(record);

        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    /// Replace the whole list with the normalized contents of `raw`.
    ///
    /// Returns the number of records loaded. On error the current list is
    /// left untouched.
    pub fn bulk_load(&mut self, raw: &str) -> Result<usize> {
        let records = parse_bulk_payload(raw)?;

        let distinct: HashSet<&str> = records.iter().map(|t| t.id.as_str()).collect();
        if distinct.len() != records.len() {
            warn!(
                total = records.len(),
                distinct = distinct.len(),
                "bulk payload contains duplicate task ids"
            );
        }

        self.tasks = records;
        info!(count = self.tasks.len(), "bulk-loaded tasks");
        Ok(self.tasks.len())
    }

    pub fn clear(&mut self) {
        debug!(count = self.tasks.len(), "clearing task store");
        self.tasks.clear();
    }

    /// Read-only view of the current list, in insertion order.
    pub fn list(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Owned copy of the current list.
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// First `"T" + N` (N >= 1) not already used by a stored record.
    fn next_free_id(&self) -> String {
        let used: HashSet<&str> = self.tasks.iter().map(|t| t.id.as_str()).collect();
        (1..)
            .map(|n| format!("T{n}"))
            .find(|candidate| !used.contains(candidate.as_str()))
            .unwrap_or_default()
    }
}
