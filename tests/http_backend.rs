// tests/http_backend.rs

mod common;
use crate::common::builders::{RankedTaskBuilder, scoring_response};
use crate::common::init_tracing;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskviz::config::ApiSection;
use taskviz::errors::TaskvizError;
use taskviz::scoring::{AnalyzeRequest, HttpScoringBackend, ScoringBackend};
use taskviz::store::TaskRecord;
use taskviz::types::{PriorityLabel, Strategy};

fn backend_for(server: &MockServer) -> HttpScoringBackend {
    let api = ApiSection {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: Some(5),
    };
    HttpScoringBackend::new(&api).unwrap()
}

#[tokio::test]
async fn analyze_posts_strategy_and_tasks() {
    init_tracing();
    let server = MockServer::start().await;

    let mut task = TaskRecord::new("T1", "Write report");
    task.importance = Some(8);

    let ranked = vec![
        RankedTaskBuilder::new("T1")
            .title("Write report")
            .score(0.8123)
            .label(PriorityLabel::High)
            .reason("Marked as very important.")
            .build(),
    ];

    Mock::given(method("POST"))
        .and(path("/api/tasks/analyze/"))
        .and(body_json(json!({
            "strategy": "deadline_driven",
            "tasks": [{
                "id": "T1",
                "title": "Write report",
                "due_date": null,
                "estimated_hours": null,
                "importance": 8,
                "dependencies": []
            }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(scoring_response("deadline_driven", &ranked)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let batch = backend_for(&server)
        .analyze(AnalyzeRequest {
            strategy: Strategy::DeadlineDriven,
            tasks: vec![task],
        })
        .await
        .unwrap();

    assert_eq!(batch.strategy, "deadline_driven");
    assert_eq!(batch.tasks, ranked);
}

#[tokio::test]
async fn suggest_passes_strategy_as_query() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/suggest/"))
        .and(query_param("strategy", "fastest_wins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "demo_1", "title": "Fix login bug", "score": 0.9, "priority_label": "High"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let batch = backend_for(&server)
        .suggest(Strategy::FastestWins)
        .await
        .unwrap();

    // Bare array: strategy falls back to the one requested.
    assert_eq!(batch.strategy, "fastest_wins");
    assert_eq!(batch.tasks.len(), 1);
    assert_eq!(batch.tasks[0].priority_label, Some(PriorityLabel::High));
}

#[tokio::test]
async fn non_success_status_is_a_network_error() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/analyze/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"tasks": ["bad"]})))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .analyze(AnalyzeRequest {
            strategy: Strategy::SmartBalance,
            tasks: vec![TaskRecord::new("T1", "x")],
        })
        .await
        .unwrap_err();

    match err {
        TaskvizError::Network(msg) => assert!(msg.contains("400")),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    init_tracing();
    let api = ApiSection {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        base_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: Some(2),
    };
    let backend = HttpScoringBackend::new(&api).unwrap();

    let err = backend.suggest(Strategy::SmartBalance).await.unwrap_err();
    assert!(matches!(err, TaskvizError::Network(_)));
}

#[tokio::test]
async fn non_json_body_is_a_network_error() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/suggest/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .suggest(Strategy::SmartBalance)
        .await
        .unwrap_err();
    assert!(matches!(err, TaskvizError::Network(_)));
}
