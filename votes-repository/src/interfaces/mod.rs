mod votes;

pub use votes::VotesRepository;
