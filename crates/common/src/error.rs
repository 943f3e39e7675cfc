use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Body returned for lookups that matched nothing.
pub const NOT_FOUND_MESSAGE: &str = "Staking data not found";
/// Body returned when a read fails in the store.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch staking data";
/// Body returned when the refresh endpoint fails.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update staking data";

/// Common error types used across the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The aggregate refresh could not complete.
    #[error("Refresh failed: {0}")]
    Refresh(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Store detail stays in the logs; clients only see the static message.
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::Refresh(_) => (StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED_MESSAGE),
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE)
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
