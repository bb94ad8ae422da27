pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::VotesRepositoryError;
pub use interfaces::VotesRepository;
pub use postgres::PostgresVotesRepository;
