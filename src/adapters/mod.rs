//! Adapters - Implementations of port interfaces.
//!
//! - `transcript` - Transcript observers (in-memory recorder, tracing logger)

pub mod transcript;

pub use transcript::{InMemoryTranscriptObserver, TracingTranscriptObserver};
