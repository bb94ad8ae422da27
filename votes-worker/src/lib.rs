pub mod config;
pub mod errors;

pub use config::{Dependencies, WorkerConfig};
pub use errors::WorkerError;
