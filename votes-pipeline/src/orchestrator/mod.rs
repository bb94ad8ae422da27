//! This module defines the `WorkerOrchestrator` responsible for the vote
//! ingestion loop.
//! It integrates the consumer, processor, and repository components to
//! move ballots from the queue into the store, surviving per-event
//! failures without dying.
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{error, info};

use crate::consumer::ConsumeVotes;
use crate::errors::OrchestratorError;
use crate::processor::VoteProcessor;
use votes_repository::VotesRepository;

/// Fixed delay before re-entering the loop after a failed iteration.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// `WorkerOrchestrator` runs the sequential consume-process-persist loop.
///
/// One message is processed at a time; there is no internal parallelism.
/// Any error during a pop, parse, or insert is logged and followed by a
/// fixed backoff. The message involved has already left the queue and is
/// dropped, not retried — at-most-once per pop, by design.
pub struct WorkerOrchestrator {
    consumer: Box<dyn ConsumeVotes>,
    processor: VoteProcessor,
    repository: Arc<dyn VotesRepository>,
    backoff: Duration,
}

impl WorkerOrchestrator {
    /// Creates a new `WorkerOrchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `consumer` - A boxed `ConsumeVotes` implementation
    /// * `processor` - The ballot processor
    /// * `repository` - The shared vote store
    pub fn new(
        consumer: Box<dyn ConsumeVotes>,
        processor: VoteProcessor,
        repository: Arc<dyn VotesRepository>,
    ) -> Self {
        Self {
            consumer,
            processor,
            repository,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Overrides the failure backoff. Tests drive this to zero.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Runs the consumption loop until a shutdown signal arrives.
    ///
    /// Blocks on the queue pop with no timeout; the only ways out of the
    /// loop are the `shutdown` channel firing or the future being
    /// dropped. A message popped but not yet inserted when shutdown
    /// arrives is lost — a known limitation of the drain path.
    pub async fn run(
        self,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), OrchestratorError> {
        let Self {
            mut consumer,
            processor,
            repository,
            backoff,
        } = self;

        info!("Worker started. Waiting for votes");
        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("Shutdown signal received, draining connections");
                    break;
                }
                popped = consumer.next_payload() => {
                    let outcome = match popped {
                        Ok(payload) => {
                            Self::ingest(&processor, repository.as_ref(), &payload).await
                        }
                        Err(e) => Err(OrchestratorError::Consumer(e)),
                    };
                    if let Err(e) = outcome {
                        // The message already left the queue; it is
                        // dropped, not re-queued.
                        error!(error = %e, "Error processing vote");
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }
        Ok(())
    }

    async fn ingest(
        processor: &VoteProcessor,
        repository: &dyn VotesRepository,
        payload: &str,
    ) -> Result<(), OrchestratorError> {
        let category = processor.process(payload)?;
        info!(category = %category, "Processing vote");
        let record = repository.insert_vote(category).await?;
        info!(id = record.id, category = %category, "Vote saved to database");
        Ok(())
    }
}
