//! PostgreSQL implementation of the votes repository.
//!
//! Provides the production backend for the `VotesRepository` trait with
//! connection pooling via `sqlx::PgPool` and a transaction around each
//! insert. The table is append-only from this crate's perspective: rows
//! are never updated or deleted.
use async_trait::async_trait;
use votes_shared::types::{CategoryCount, VoteCategory, VoteRecord};

use crate::{VotesRepository, VotesRepositoryError};

/// PostgreSQL implementation of the votes repository.
///
/// Holds a `sqlx::PgPool`; concurrent callers share the pool and each
/// operation checks out its own connection.
pub struct PostgresVotesRepository {
    pool: sqlx::PgPool,
}

impl PostgresVotesRepository {
    /// Creates a new PostgreSQL repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, VotesRepositoryError> {
        Ok(Self { pool })
    }
}

#[async_trait]
impl VotesRepository for PostgresVotesRepository {
    async fn ensure_schema(&self) -> Result<(), VotesRepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS votes (
                id SERIAL PRIMARY KEY,
                vote VARCHAR(10) NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_vote(&self, category: VoteCategory) -> Result<VoteRecord, VotesRepositoryError> {
        let mut tx = self.pool.begin().await?;
        let record = sqlx::query_as::<_, VoteRecord>(
            "INSERT INTO votes (vote) VALUES ($1) RETURNING id, vote, created_at",
        )
        .bind(category.as_str())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(record)
    }

    async fn fetch_vote_counts(&self) -> Result<Vec<CategoryCount>, VotesRepositoryError> {
        let counts = sqlx::query_as::<_, CategoryCount>(
            "SELECT vote, COUNT(*) AS count FROM votes GROUP BY vote ORDER BY vote",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    async fn ping(&self) -> Result<(), VotesRepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
