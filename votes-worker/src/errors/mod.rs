//! Error types for the vote ingestion worker binary.
//! Consolidates startup and runtime failures from the pipeline and the
//! repository; anything surfacing here terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("Consumer error: {0}")]
    Consumer(#[from] votes_pipeline::errors::ConsumerError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Repository error: {0}")]
    Repository(#[from] votes_repository::VotesRepositoryError),
    #[error("Orchestrator error: {0}")]
    Orchestrator(#[from] votes_pipeline::errors::OrchestratorError),
}
