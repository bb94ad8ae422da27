//! Error types for the orchestrator of the vote ingestion pipeline.
use thiserror::Error;

use crate::errors::{ConsumerError, ProcessorError};
use votes_repository::VotesRepositoryError;

/// Consolidates the failure modes of one loop iteration.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Consumer error: {0}")]
    Consumer(#[from] ConsumerError),
    #[error("Processor error: {0}")]
    Processor(#[from] ProcessorError),
    #[error("Repository error: {0}")]
    Repository(#[from] VotesRepositoryError),
}
