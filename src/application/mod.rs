//! Application layer - the Conversation Orchestrator.
//!
//! Coordinates the pure classifiers in the domain layer with the
//! conversation state machine and the simulated typing latency.

mod chat_session;

pub use chat_session::{ChatSession, ReplyKind, ResolveOutcome, SubmitOutcome, SubmitReceipt};
