// src/view.rs

//! Text tables for the task list and analysis results.

use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::engine::AnalysisView;
use crate::scoring::RankedTaskRecord;
use crate::store::TaskRecord;
use crate::types::PriorityLabel;

/// Placeholder for an absent value.
pub const DASH: &str = "–";

pub const NO_TASKS_MESSAGE: &str = "No tasks yet. Add tasks or load a JSON array.";

const REASON_SEPARATOR: &str = " • ";

/// Table of the tasks currently in the store.
pub fn task_table(tasks: &[TaskRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header(&["ID", "Title", "Due", "Hours", "Importance", "Dependencies"]));

    if tasks.is_empty() {
        table.add_row(vec![Cell::new(NO_TASKS_MESSAGE).fg(Color::DarkGrey)]);
        return table;
    }

    for task in tasks {
        table.add_row(vec![
            Cell::new(or_dash(&task.id)),
            Cell::new(or_dash(&task.title)),
            Cell::new(task.due_date.as_deref().map_or(DASH, or_dash)),
            Cell::new(opt_text(task.estimated_hours)),
            Cell::new(opt_text(task.importance)),
            Cell::new(or_dash(&task.dependencies.join(", "))),
        ]);
    }

    table
}

/// Ranked table for an analyze/suggest result, in the order received.
pub fn analysis_table(tasks: &[RankedTaskRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header(&[
        "#", "Task", "Score", "Priority", "Due", "Hours", "Importance", "Why",
    ]));

    for (index, task) in tasks.iter().enumerate() {
        let label = task.priority_label.unwrap_or(PriorityLabel::Low);
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(task.display_name()),
            Cell::new(format_score(task.score)),
            Cell::new(label.as_str()).fg(priority_color(label)),
            Cell::new(task.due_date.as_deref().map_or(DASH, or_dash)),
            Cell::new(opt_text(task.estimated_hours)),
            Cell::new(opt_text(task.importance)),
            Cell::new(reasons_text(&task.reasons)),
        ]);
    }

    table
}

/// `"Strategy: <name>"`, or a dash when nothing has been analyzed.
pub fn strategy_pill(view: Option<&AnalysisView>) -> String {
    match view {
        Some(view) if !view.tasks.is_empty() => format!("Strategy: {}", view.strategy),
        _ => format!("Strategy: {DASH}"),
    }
}

pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{s:.3}"),
        _ => DASH.to_string(),
    }
}

pub fn reasons_text(reasons: &[String]) -> String {
    if reasons.is_empty() {
        "No explanation available.".to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    }
}

fn priority_color(label: PriorityLabel) -> Color {
    match label {
        PriorityLabel::High => Color::Green,
        PriorityLabel::Medium => Color::Yellow,
        PriorityLabel::Low => Color::Red,
    }
}

fn header(names: &[&str]) -> Vec<Cell> {
    names.iter().map(|n| Cell::new(n).fg(Color::Cyan)).collect()
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { DASH } else { text }
}

fn opt_text<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| DASH.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_has_three_decimals() {
        assert_eq!(format_score(Some(0.8)), "0.800");
        assert_eq!(format_score(Some(0.12345)), "0.123");
        assert_eq!(format_score(None), DASH);
    }

    #[test]
    fn reasons_are_joined_with_bullets() {
        let reasons = vec!["Due soon.".to_string(), "Blocks 2 tasks.".to_string()];
        assert_eq!(reasons_text(&reasons), "Due soon. • Blocks 2 tasks.");
        assert_eq!(reasons_text(&[]), "No explanation available.");
    }

    #[test]
    fn empty_task_table_shows_hint() {
        let rendered = task_table(&[]).to_string();
        assert!(rendered.contains("No tasks yet"));
    }

    #[test]
    fn task_table_uses_dashes_for_absent_fields() {
        let mut task = TaskRecord::new("T1", "Write report");
        task.importance = Some(8);
        let rendered = task_table(&[task]).to_string();
        assert!(rendered.contains("Write report"));
        assert!(rendered.contains('8'));
        assert!(rendered.contains(DASH));
    }

    #[test]
    fn missing_label_is_shown_as_low() {
        let task = RankedTaskRecord {
            id: "A".to_string(),
            score: Some(0.2),
            ..RankedTaskRecord::default()
        };
        let rendered = analysis_table(&[task]).to_string();
        assert!(rendered.contains("Low"));
        assert!(rendered.contains("0.200"));
    }

    #[test]
    fn pill_shows_dash_without_results() {
        assert_eq!(strategy_pill(None), "Strategy: –");
    }
}
