use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned when either form input is absent.
pub const MISSING_INPUT: &str = "Missing resume or job description";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Failures carry their cause for the log only; clients see a fixed message
/// per endpoint inside the `{"success": false, "error": ...}` envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resume tailoring failed: {0}")]
    Tailoring(anyhow::Error),

    #[error("Job application failed: {0}")]
    Application(anyhow::Error),

    /// Response for `InputRejection`. Handlers take `Result<_, InputRejection>`
    /// and report body failures through their own variant instead.
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Tailoring(e) => {
                tracing::error!("Error editing resume: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TAILORING_ERROR",
                    "Failed to edit resume".to_string(),
                )
            }
            AppError::Application(e) => {
                tracing::error!("Error applying to job: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "APPLICATION_ERROR",
                    "Failed to submit application".to_string(),
                )
            }
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
            "success": false,
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}
