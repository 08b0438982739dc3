//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the chat core and the presentation layer that renders it. Adapters
//! implement these ports.
//!
//! - `TranscriptObserver` - Notified of every message appended to a transcript

mod transcript_observer;

pub use transcript_observer::TranscriptObserver;
