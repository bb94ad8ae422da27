//! Integration tests for the PostgreSQL votes repository.
//!
//! These tests require a real PostgreSQL database and use the SQLx test
//! macro for per-test database isolation.
//!
//! Run with: `cargo test --test postgres_integration`

use votes_repository::{PostgresVotesRepository, VotesRepository};
use votes_shared::types::{Tally, VoteCategory};

async fn make_repository(pool: sqlx::PgPool) -> PostgresVotesRepository {
    let repository = PostgresVotesRepository::new(pool).await.unwrap();
    repository.ensure_schema().await.unwrap();
    repository
}

#[sqlx::test]
async fn ensure_schema_is_idempotent(pool: sqlx::PgPool) {
    let repository = PostgresVotesRepository::new(pool.clone()).await.unwrap();

    repository.ensure_schema().await.unwrap();
    repository.ensure_schema().await.unwrap();

    let table_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'votes'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(table_count, 1);
}

#[sqlx::test]
async fn insert_returns_the_stored_record(pool: sqlx::PgPool) {
    let repository = make_repository(pool).await;

    let first = repository.insert_vote(VoteCategory::Cats).await.unwrap();
    let second = repository.insert_vote(VoteCategory::Dogs).await.unwrap();

    assert_eq!(first.vote, "cats");
    assert_eq!(second.vote, "dogs");
    // Identifiers are store-assigned and strictly increasing.
    assert!(second.id > first.id);
}

#[sqlx::test]
async fn counts_aggregate_per_category(pool: sqlx::PgPool) {
    let repository = make_repository(pool).await;

    repository.insert_vote(VoteCategory::Cats).await.unwrap();
    repository.insert_vote(VoteCategory::Dogs).await.unwrap();
    repository.insert_vote(VoteCategory::Cats).await.unwrap();

    let counts = repository.fetch_vote_counts().await.unwrap();
    let tally = Tally::from_counts(&counts);

    assert_eq!(tally.count(VoteCategory::Cats), 2);
    assert_eq!(tally.count(VoteCategory::Dogs), 1);
}

#[sqlx::test]
async fn empty_store_yields_no_aggregate_rows(pool: sqlx::PgPool) {
    let repository = make_repository(pool).await;

    let counts = repository.fetch_vote_counts().await.unwrap();
    assert!(counts.is_empty());

    // The derived tally still reports every known category.
    let tally = Tally::from_counts(&counts);
    assert_eq!(tally.count(VoteCategory::Cats), 0);
    assert_eq!(tally.count(VoteCategory::Dogs), 0);
}

#[sqlx::test]
async fn drifted_labels_survive_the_query_path(pool: sqlx::PgPool) {
    let repository = make_repository(pool.clone()).await;

    repository.insert_vote(VoteCategory::Cats).await.unwrap();
    sqlx::query("INSERT INTO votes (vote) VALUES ('fish')")
        .execute(&pool)
        .await
        .unwrap();

    let counts = repository.fetch_vote_counts().await.unwrap();
    assert_eq!(counts.len(), 2);

    // The tally drops the drifted label.
    let tally = Tally::from_counts(&counts);
    assert_eq!(tally.count(VoteCategory::Cats), 1);
    assert_eq!(tally.count(VoteCategory::Dogs), 0);
}

#[sqlx::test]
async fn ping_succeeds_against_a_live_store(pool: sqlx::PgPool) {
    let repository = make_repository(pool).await;
    repository.ping().await.unwrap();
}
