//! Consumer module for the vote ingestion pipeline.
//!
//! Provides the `ConsumeVotes` trait for draining serialized ballots from
//! the shared queue. Acts as the entry point for the pipeline, feeding raw
//! payloads to the processor and the repository.

use crate::errors::ConsumerError;
use async_trait::async_trait;

mod redis_consumer;

pub use redis_consumer::{DEFAULT_QUEUE_KEY, RedisVoteConsumer};

/// Trait for consuming serialized vote ballots from a queue.
///
/// Implementations block until a message is available; an idle queue is a
/// normal state, so there is no client-side timeout. Tests drive the
/// pipeline with scripted implementations of this trait.
#[async_trait]
pub trait ConsumeVotes: Send {
    /// Blocks until the next raw ballot payload is available.
    ///
    /// Returns the serialized payload exactly as the producer pushed it,
    /// or a `ConsumerError` if the queue connection fails.
    async fn next_payload(&mut self) -> Result<String, ConsumerError>;
}
