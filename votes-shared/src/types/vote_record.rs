use chrono::NaiveDateTime;
use serde::Serialize;

/// A persisted vote row as stored in the `votes` table.
///
/// `id` and `created_at` are assigned by the store on insert; rows are
/// never updated or deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct VoteRecord {
    pub id: i32,
    pub vote: String,
    pub created_at: NaiveDateTime,
}
