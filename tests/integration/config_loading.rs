// tests/integration/config_loading.rs

use std::io::Write;
use tempfile::NamedTempFile;
use taskviz::config::{DEFAULT_API_BASE, load_and_validate, resolve_config};
use taskviz::errors::TaskvizError;
use taskviz::types::Strategy;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn empty_file_yields_defaults() {
    let file = config_file("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.api.base_url, DEFAULT_API_BASE);
    assert_eq!(cfg.api.timeout_secs, None);
    assert_eq!(cfg.analysis.strategy, Strategy::SmartBalance);
}

#[test]
fn full_file_is_read() {
    let file = config_file(
        r#"
[api]
base_url = "https://scoring.example.com/api"
timeout_secs = 10

[analysis]
strategy = "deadline_driven"
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.api.base_url, "https://scoring.example.com/api");
    assert_eq!(cfg.api.timeout_secs, Some(10));
    assert_eq!(cfg.analysis.strategy, Strategy::DeadlineDriven);
}

#[test]
fn unknown_strategy_is_a_toml_error() {
    let file = config_file(
        r#"
[analysis]
strategy = "random"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskvizError::Toml(_)) => {}
        other => panic!("expected TOML error, got {other:?}"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file(
        r#"
[api]
base_url = "http://localhost:8000/api"
retries = 3
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskvizError::Toml(_))
    ));
}

#[test]
fn invalid_base_url_is_a_config_error() {
    let file = config_file(
        r#"
[api]
base_url = "not a url"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskvizError::Config(msg)) => assert!(msg.contains("not a url")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn explicit_missing_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        resolve_config(Some(&missing)),
        Err(TaskvizError::Io(_))
    ));
}
