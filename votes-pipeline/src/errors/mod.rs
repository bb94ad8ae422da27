mod consumer;
mod orchestrator;
mod processor;

pub use consumer::ConsumerError;
pub use orchestrator::OrchestratorError;
pub use processor::ProcessorError;
