mod ballot;
mod category;
mod category_count;
mod tally;
mod vote_record;

pub use ballot::VoteBallot;
pub use category::{UnknownCategoryError, VoteCategory};
pub use category_count::CategoryCount;
pub use tally::Tally;
pub use vote_record::VoteRecord;
