//! Error types for the result aggregation service.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use votes_repository::VotesRepositoryError;

/// Startup errors for the results service; anything surfacing here
/// terminates the process with a non-zero exit.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Repository error: {0}")]
    Repository(#[from] VotesRepositoryError),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Per-request error type for API handlers.
///
/// Every request path maps its own failure to a response here; nothing
/// propagates far enough to take the server down.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] VotesRepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Database error",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
