use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use types::errors::ReconcileError;

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Requested names that did not resolve; echoed back verbatim
    #[error("Items not available: {}", .0.join(", "))]
    ItemsUnavailable(Vec<String>),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ReconcileError> for AppError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::RejectedUnavailable { names } => AppError::ItemsUnavailable(names),
            ReconcileError::Unavailable { .. } => AppError::InternalError(anyhow::Error::new(err)),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match &self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), "UNAUTHORIZED"),
            AppError::RateLimitExceeded(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, msg.clone(), "RATE_LIMIT_EXCEEDED")
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), "BAD_REQUEST"),
            AppError::ItemsUnavailable(names) => (
                StatusCode::BAD_REQUEST,
                format!("these items are not available: {}", names.join(", ")),
                "ITEMS_UNAVAILABLE",
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), "NOT_FOUND"),
            // Store detail stays in the engine's log
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = match self {
            AppError::ItemsUnavailable(names) => json!({
                "error": code,
                "message": error_message,
                "notavailable": names,
            }),
            _ => json!({
                "error": code,
                "message": error_message,
            }),
        };

        (status, Json(body)).into_response()
    }
}
