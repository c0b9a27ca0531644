//! Error responses.
//!
//! Every reqline failure, validation or execution, is answered with
//! 400 Bad Request and `{"error": true, "message": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::reqline::ReqlineError;

/// Body of a failed reqline call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl From<&ReqlineError> for ErrorBody {
    fn from(err: &ReqlineError) -> Self {
        Self {
            error: true,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ReqlineError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorBody::from(&self))).into_response()
    }
}
