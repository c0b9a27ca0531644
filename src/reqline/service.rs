//! End-to-end reqline pipeline.

use std::sync::Arc;

use crate::http::client::HttpClient;
use crate::observability::metrics;
use crate::reqline::error::{ErrorKind, ReqlineResult};
use crate::reqline::executor::Executor;
use crate::reqline::parser::{parse, ResolvedRequest};
use crate::reqline::result::ReqlineReport;

/// Stateless service: validate, resolve, execute, assemble.
#[derive(Clone)]
pub struct ReqlineService {
    executor: Executor,
}

impl ReqlineService {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            executor: Executor::new(client),
        }
    }

    /// Validate and resolve without touching the network.
    pub fn resolve(&self, raw: &str) -> ReqlineResult<ResolvedRequest> {
        resolve(raw)
    }

    /// Run one reqline through the whole pipeline.
    pub async fn run(&self, raw: &str) -> ReqlineResult<ReqlineReport> {
        let outcome = self.run_inner(raw).await;
        match &outcome {
            Ok(_) => metrics::record_outcome("ok"),
            Err(e) => {
                tracing::debug!(error = %e, "Reqline rejected");
                metrics::record_outcome(match e.kind() {
                    ErrorKind::Validation => "validation_error",
                    ErrorKind::Execution => "execution_error",
                });
            }
        }
        outcome
    }

    async fn run_inner(&self, raw: &str) -> ReqlineResult<ReqlineReport> {
        let request = resolve(raw)?;
        let execution = self.executor.execute(&request).await?;
        Ok(ReqlineReport::assemble(request, execution))
    }
}

/// Parse a reqline and merge its query into the URL.
pub fn resolve(raw: &str) -> ReqlineResult<ResolvedRequest> {
    Ok(parse(raw)?.resolve())
}
