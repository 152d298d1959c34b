use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fault raised inside the scoring engine. Never reaches HTTP callers:
/// sub-matchers degrade to a neutral value and `rank` falls back to a neutral report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Non-finite score in {0}")]
    NonFinite(&'static str),

    #[error("Missing reference table: {0}")]
    MissingReference(&'static str),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
