//! This module defines the `VotesRepository` trait, which provides an
//! interface for interacting with the underlying vote store.
//! It abstracts the database operations for persistence and aggregation,
//! so the worker loop and the results service can be tested against fakes.
use votes_shared::types::{CategoryCount, VoteCategory, VoteRecord};

use crate::errors::VotesRepositoryError;

/// A trait that defines the interface for the vote store.
///
/// The worker is the only writer; the results service only reads. The
/// store's own transactional isolation is the sole coordination between
/// the two.
#[async_trait::async_trait]
pub trait VotesRepository: Send + Sync {
    /// Ensures the `votes` table exists.
    ///
    /// Idempotent; calling it against an already-initialized store is a
    /// no-op. A failure here indicates a persistent infrastructure
    /// problem and is treated as fatal by callers.
    async fn ensure_schema(&self) -> Result<(), VotesRepositoryError>;

    /// Appends one vote row for the given category.
    ///
    /// # Returns
    ///
    /// The stored row with its store-assigned identifier and timestamp,
    /// or a `VotesRepositoryError` if the insert does not complete.
    async fn insert_vote(&self, category: VoteCategory) -> Result<VoteRecord, VotesRepositoryError>;

    /// Runs the group-by-count aggregate over the full vote table.
    ///
    /// Returns one raw row per distinct label present in the store,
    /// including labels that do not name a known category.
    async fn fetch_vote_counts(&self) -> Result<Vec<CategoryCount>, VotesRepositoryError>;

    /// Issues a trivial connectivity probe against the store.
    async fn ping(&self) -> Result<(), VotesRepositoryError>;
}
