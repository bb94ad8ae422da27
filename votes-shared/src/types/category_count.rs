use serde::Serialize;

/// One row of the group-by-count aggregate over the `votes` table.
///
/// The label stays a free string: the table can drift (rows written by
/// other tools), and deciding what to do with unknown labels belongs to
/// `Tally`, not to the query path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub vote: String,
    pub count: i64,
}
