use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

use crate::config::WorkerConfig;
use crate::errors::WorkerError;
use votes_pipeline::consumer::{DEFAULT_QUEUE_KEY, RedisVoteConsumer};
use votes_pipeline::orchestrator::WorkerOrchestrator;
use votes_pipeline::processor::VoteProcessor;
use votes_repository::{PostgresVotesRepository, VotesRepository};

/// `Dependencies` holds the wired-up components for the ingestion worker.
pub struct Dependencies {
    pub orchestrator: WorkerOrchestrator,
}

impl Dependencies {
    /// Connects to the queue and the store, ensures the schema exists,
    /// and wires the pipeline together.
    ///
    /// Every failure in here is a startup failure: it propagates out and
    /// the process exits non-zero, leaving restarts to the supervisor.
    pub async fn new(config: &WorkerConfig) -> Result<Self, WorkerError> {
        let consumer = RedisVoteConsumer::connect(&config.redis_url(), DEFAULT_QUEUE_KEY).await?;

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .connect(&config.database_url())
            .await?;
        let repository = Arc::new(PostgresVotesRepository::new(pool).await?);

        repository.ensure_schema().await?;
        info!("Database table initialized");

        let orchestrator =
            WorkerOrchestrator::new(Box::new(consumer), VoteProcessor::new(), repository);

        Ok(Self { orchestrator })
    }
}
