//! Uniform JSON error bodies.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Failure body: a generic message plus the specific error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

/// Any chat failure surfaces as a 500 with this body; nothing is retried
/// and no partial output is returned.
pub fn internal_error(error: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            message: "Error processing request".to_string(),
            error: error.into(),
        }),
    )
}
