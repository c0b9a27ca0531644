//! Final result returned to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::reqline::executor::ExecutionResult;
use crate::reqline::parser::{JsonMap, ResolvedRequest};

/// Echo of the request that was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub query: JsonMap,
    pub body: JsonMap,
    pub headers: JsonMap,
    pub full_url: String,
}

/// Timing and payload of the upstream response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub http_status: u16,
    pub duration: u64,
    pub request_start_timestamp: u64,
    pub request_stop_timestamp: u64,
    pub response_data: Value,
}

/// Body of a successful reqline call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReqlineReport {
    pub request: RequestSummary,
    pub response: ResponseSummary,
}

impl ReqlineReport {
    pub fn assemble(request: ResolvedRequest, execution: ExecutionResult) -> Self {
        Self {
            request: RequestSummary {
                query: request.query,
                body: request.body,
                headers: request.headers,
                full_url: request.full_url,
            },
            response: ResponseSummary {
                http_status: execution.status,
                duration: execution.duration_ms,
                request_start_timestamp: execution.started_at_ms,
                request_stop_timestamp: execution.stopped_at_ms,
                response_data: execution.data,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reqline::parser::parse;
    use serde_json::json;

    #[test]
    fn test_report_wire_shape() {
        let request = parse(r#"HTTP GET | URL https://a.io | QUERY {"id": "7"}"#)
            .unwrap()
            .resolve();
        let execution = ExecutionResult {
            status: 200,
            duration_ms: 12,
            started_at_ms: 1_000,
            stopped_at_ms: 1_012,
            data: json!({"id": 7}),
        };

        let report = ReqlineReport::assemble(request, execution);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "request": {
                    "query": {"id": "7"},
                    "body": {},
                    "headers": {},
                    "full_url": "https://a.io?id=7"
                },
                "response": {
                    "http_status": 200,
                    "duration": 12,
                    "request_start_timestamp": 1000,
                    "request_stop_timestamp": 1012,
                    "response_data": {"id": 7}
                }
            })
        );
    }
}
