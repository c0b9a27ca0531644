//! Endpoint handlers.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::http::server::AppState;
use crate::reqline::{ReqlineError, ReqlineReport};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /` with `{"reqline": "..."}`.
pub async fn execute_reqline(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReqlineReport>, ReqlineError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let reqline = extract_reqline(&payload)?;

    tracing::debug!(reqline = %reqline, "Executing reqline");
    let report = state.service.run(reqline).await?;
    Ok(Json(report))
}

/// Pull the reqline text out of a request payload.
pub fn extract_reqline(payload: &Value) -> Result<&str, ReqlineError> {
    match payload.get("reqline") {
        None | Some(Value::Null) => Err(ReqlineError::MissingReqline),
        Some(Value::String(s)) if s.is_empty() => Err(ReqlineError::MissingReqline),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ReqlineError::NotAString),
    }
}
