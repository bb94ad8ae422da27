use std::sync::Arc;

use votes_repository::VotesRepository;

/// Shared state handed to every request handler.
///
/// Holds only the repository; requests share nothing else, so handlers
/// stay stateless and concurrency is left to the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn VotesRepository>,
}
