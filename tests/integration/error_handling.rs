// tests/integration/error_handling.rs

use taskviz::errors::TaskvizError;
use taskviz::store::{TaskStore, parse_bulk_payload};

use crate::common::builders::TaskDraftBuilder;

#[test]
fn malformed_json_returns_parse_error_with_generic_message() {
    let err = parse_bulk_payload("[{\"title\": \"A\",]").unwrap_err();

    match &err {
        TaskvizError::Parse(_) => {}
        e => panic!("Expected Parse error, got: {e:?}"),
    }
    assert_eq!(err.status_message(), "Invalid JSON. Please check your syntax.");
}

#[test]
fn non_array_returns_shape_error() {
    for raw in [r#"{"tasks": []}"#, "42", r#""text""#, "null"] {
        let err = parse_bulk_payload(raw).unwrap_err();
        assert!(matches!(err, TaskvizError::Shape(_)), "{raw}: {err:?}");
        assert_eq!(err.status_message(), "JSON must be an array of task objects.");
    }
}

#[test]
fn blank_payload_returns_validation_error() {
    let err = parse_bulk_payload("   \n").unwrap_err();
    assert_eq!(err.status_message(), "Please paste a JSON array of tasks first.");
}

#[test]
fn validation_errors_surface_verbatim() {
    let mut store = TaskStore::new();
    let err = store
        .add(&TaskDraftBuilder::new("x").importance("11").build())
        .unwrap_err();

    assert_eq!(
        err.status_message(),
        "Importance must be an integer between 1 and 10."
    );
}

#[test]
fn failed_bulk_load_keeps_previous_tasks() {
    let mut store = TaskStore::new();
    store.bulk_load(r#"[{"title": "keep me"}]"#).unwrap();

    assert!(store.bulk_load("not json").is_err());
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].title, "keep me");
}
