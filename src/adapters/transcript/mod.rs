//! Transcript observer implementations.

mod in_memory;
mod tracing_observer;

pub use in_memory::InMemoryTranscriptObserver;
pub use tracing_observer::TracingTranscriptObserver;
