// tests/integration/command_dispatch.rs

use std::io::Write;
use tempfile::NamedTempFile;

use taskviz::cli::{Command, TaskSource, parse_task_fields};
use taskviz::engine::{READY_MESSAGE, Workbench};
use taskviz::dispatch;
use taskviz::types::Strategy;

use crate::common::{FakeCall, FakeScoringBackend, call_log, init_tracing};

fn list_from(source: TaskSource) -> Command {
    Command::List { source }
}

#[tokio::test]
async fn missing_input_file_replaces_ready_status_with_the_failure() {
    init_tracing();
    let mut wb = Workbench::new(FakeScoringBackend::new(call_log()), Strategy::default());
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("tasks.json");

    let result = dispatch(
        &mut wb,
        list_from(TaskSource {
            input: Some(missing.clone()),
            drafts: Vec::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    let status = wb.status();
    assert!(status.is_error);
    assert_ne!(status.message, READY_MESSAGE);
    assert!(status.message.contains("reading task payload"));
    assert!(status.message.contains("tasks.json"));
}

#[tokio::test]
async fn workbench_failure_keeps_its_own_status_message() {
    init_tracing();
    let mut wb = Workbench::new(FakeScoringBackend::new(call_log()), Strategy::default());
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{oops").unwrap();

    let result = dispatch(
        &mut wb,
        list_from(TaskSource {
            input: Some(file.path().to_path_buf()),
            drafts: Vec::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    assert!(wb.status().is_error);
    assert_eq!(wb.status().message, "Invalid JSON. Please check your syntax.");
}

#[tokio::test]
async fn manual_tasks_are_appended_after_the_bulk_payload() {
    init_tracing();
    let log = call_log();
    let mut wb = Workbench::new(FakeScoringBackend::new(log.clone()), Strategy::HighImpact);
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"title": "Loaded"}}]"#).unwrap();

    let command = Command::Analyze {
        source: TaskSource {
            input: Some(file.path().to_path_buf()),
            drafts: vec![parse_task_fields("title=Review;importance=8;deps=T1").unwrap()],
        },
        strategy: None,
        output: None,
    };
    dispatch(&mut wb, command).await.unwrap();

    let titles: Vec<_> = wb.store().list().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Loaded", "Review"]);
    assert_eq!(wb.store().list()[1].id, "T2");
    assert_eq!(wb.store().list()[1].dependencies, vec!["T1"]);

    let log = log.lock().unwrap();
    assert!(matches!(&log.calls[..], [FakeCall::Analyze(req)] if req.tasks.len() == 2));
    assert!(!wb.status().is_error);
}

#[tokio::test]
async fn invalid_manual_task_reports_validation_message() {
    init_tracing();
    let mut wb = Workbench::new(FakeScoringBackend::new(call_log()), Strategy::default());

    let result = dispatch(
        &mut wb,
        list_from(TaskSource {
            input: None,
            drafts: vec![parse_task_fields("title=x;importance=11").unwrap()],
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        wb.status().message,
        "Importance must be an integer between 1 and 10."
    );
    assert!(wb.store().is_empty());
}
