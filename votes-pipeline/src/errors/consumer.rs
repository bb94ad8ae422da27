//! Error types for the consumer module of the vote ingestion pipeline.
//! Defines specific errors that can occur while connecting to the queue
//! and popping ballots from it.
use thiserror::Error;

/// Represents errors that can occur within the vote consumer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsumerError {
    #[error("Error connecting to queue: {0}")]
    Connection(String),
    #[error("Error popping from queue: {0}")]
    Pop(String),
    #[error("Queue returned an empty reply for a blocking pop")]
    EmptyReply,
}
