mod votes_repository;

pub use votes_repository::PostgresVotesRepository;
