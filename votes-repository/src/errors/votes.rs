//! Error types for the votes repository.
use thiserror::Error;

/// Represents errors that can occur while talking to the vote store.
#[derive(Debug, Error)]
pub enum VotesRepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
