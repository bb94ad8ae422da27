mod votes;

pub use votes::VotesRepositoryError;
