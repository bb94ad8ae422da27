pub mod consumer;
pub mod errors;
pub mod orchestrator;
pub mod processor;
