// src/scoring/http.rs

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiSection;
use crate::errors::{Result, TaskvizError};
use crate::scoring::backend::{AnalyzeRequest, ScoringBackend, ScoringFuture};
use crate::scoring::ranked::{ScoredBatch, parse_scoring_response};
use crate::types::Strategy;

/// Scoring backend that talks JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScoringBackend {
    client: Client,
    base_url: String,
}

impl HttpScoringBackend {
    pub fn new(api: &ApiSection) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/tasks/analyze/", self.base_url)
    }

    pub fn suggest_url(&self) -> String {
        format!("{}/tasks/suggest/", self.base_url)
    }

    async fn post_analyze(&self, request: AnalyzeRequest) -> Result<ScoredBatch> {
        let url = self.analyze_url();
        debug!(%url, tasks = request.tasks.len(), strategy = %request.strategy, "POST analyze");

        let response = self.client.post(&url).json(&request).send().await?;
        let body = read_json(response).await?;
        parse_scoring_response(body, request.strategy.as_str())
    }

    async fn get_suggest(&self, strategy: Strategy) -> Result<ScoredBatch> {
        let url = self.suggest_url();
        debug!(%url, %strategy, "GET suggest");

        let response = self
            .client
            .get(&url)
            .query(&[("strategy", strategy.as_str())])
            .send()
            .await?;
        let body = read_json(response).await?;
        parse_scoring_response(body, strategy.as_str())
    }
}

impl ScoringBackend for HttpScoringBackend {
    fn analyze(&self, request: AnalyzeRequest) -> ScoringFuture<'_> {
        Box::pin(self.post_analyze(request))
    }

    fn suggest(&self, strategy: Strategy) -> ScoringFuture<'_> {
        Box::pin(self.get_suggest(strategy))
    }
}

/// Fail on non-2xx, otherwise decode the body as JSON.
async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        warn!(%status, body = %text, "scoring service returned an error status");
        return Err(TaskvizError::Network(format!("Server returned {status}")));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| TaskvizError::Network(format!("failed to decode scoring response: {e}")))
}
