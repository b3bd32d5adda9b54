//! API error mapping
//!
//! Splits request failures into two classes: validation errors attributable
//! to the caller (400) and internal failures during scaling or prediction
//! (500). Both carry a `detail` field in the response body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use model::ModelError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API callers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request body or parameters
    #[error("{0}")]
    Validation(String),

    /// Failure inside the loaded model or scaler
    #[error("{0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        // A loaded artifact that cannot predict is a server problem, not a
        // caller problem.
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(detail) => {
                tracing::error!("prediction failed: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
