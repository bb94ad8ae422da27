pub mod config;
pub mod errors;
pub mod server;

pub use config::ResultsConfig;
pub use errors::{ApiError, ResultsError};
