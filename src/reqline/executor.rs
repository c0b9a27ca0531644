//! Timed dispatch of a resolved request.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::http::client::HttpClient;
use crate::observability::metrics;
use crate::reqline::error::{ReqlineError, ReqlineResult};
use crate::reqline::keyword::HttpMethod;
use crate::reqline::parser::ResolvedRequest;

/// Outcome of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub status: u16,
    /// Milliseconds between start and stop.
    pub duration_ms: u64,
    /// Unix epoch milliseconds taken right before dispatch.
    pub started_at_ms: u64,
    /// Unix epoch milliseconds taken right after the call returned.
    pub stopped_at_ms: u64,
    pub data: Value,
}

/// Dispatches exactly one call per resolved request.
#[derive(Clone)]
pub struct Executor {
    client: Arc<dyn HttpClient>,
}

impl Executor {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Send the request and time it. Any collaborator failure becomes
    /// `ReqlineError::HttpRequest`.
    pub async fn execute(&self, request: &ResolvedRequest) -> ReqlineResult<ExecutionResult> {
        tracing::info!(
            method = %request.method,
            url = %request.full_url,
            "Dispatching request"
        );

        let started_at_ms = now_ms();
        let outcome = match request.method {
            HttpMethod::Get => self.client.get(&request.full_url, &request.headers).await,
            HttpMethod::Post => {
                self.client
                    .post(&request.full_url, &request.body, &request.headers)
                    .await
            }
        };
        let stopped_at_ms = now_ms();
        let duration_ms = stopped_at_ms.saturating_sub(started_at_ms);

        metrics::record_upstream(request.method.as_str(), duration_ms);

        match outcome {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    duration_ms,
                    "Upstream responded"
                );
                Ok(ExecutionResult {
                    status: response.status,
                    duration_ms,
                    started_at_ms,
                    stopped_at_ms,
                    data: response.data,
                })
            }
            Err(e) => {
                tracing::warn!(url = %request.full_url, error = %e, "Upstream request failed");
                Err(ReqlineError::HttpRequest(e.to_string()))
            }
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
