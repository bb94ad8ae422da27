//! Error types for the processor module of the vote ingestion pipeline.
use thiserror::Error;

/// Represents errors that can occur while turning a raw queue payload
/// into a validated vote.
///
/// Both variants are recovered at the loop level: the message has
/// already been popped, so it is logged and dropped, never re-queued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("Malformed ballot payload: {0}")]
    MalformedPayload(String),
    #[error("Unknown vote category: {0:?}")]
    UnknownCategory(String),
}
