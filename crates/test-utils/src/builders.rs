#![allow(dead_code)]

use serde_json::{Value, json};
use taskviz::scoring::RankedTaskRecord;
use taskviz::store::TaskDraft;
use taskviz::types::PriorityLabel;

/// Builder for `TaskDraft` (the raw form fields) to simplify test setup.
pub struct TaskDraftBuilder {
    draft: TaskDraft,
}

impl TaskDraftBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            draft: TaskDraft {
                title: title.to_string(),
                ..TaskDraft::default()
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.draft.id = id.to_string();
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.draft.due_date = date.to_string();
        self
    }

    pub fn hours(mut self, hours: &str) -> Self {
        self.draft.estimated_hours = hours.to_string();
        self
    }

    pub fn importance(mut self, importance: &str) -> Self {
        self.draft.importance = importance.to_string();
        self
    }

    /// Raw comma-separated dependency field, as typed.
    pub fn deps(mut self, deps: &str) -> Self {
        self.draft.dependencies = deps.to_string();
        self
    }

    pub fn build(self) -> TaskDraft {
        self.draft
    }
}

/// Builder for `RankedTaskRecord`, the shape the scoring service returns.
pub struct RankedTaskBuilder {
    task: RankedTaskRecord,
}

impl RankedTaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: RankedTaskRecord {
                id: id.to_string(),
                title: format!("Task {id}"),
                ..RankedTaskRecord::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.task.score = Some(score);
        self
    }

    pub fn label(mut self, label: PriorityLabel) -> Self {
        self.task.priority_label = Some(label);
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.task.reasons.push(reason.to_string());
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> RankedTaskRecord {
        self.task
    }
}

/// Response envelope as the scoring service sends it.
pub fn scoring_response(strategy: &str, tasks: &[RankedTaskRecord]) -> Value {
    json!({
        "strategy": strategy,
        "tasks": tasks,
    })
}
