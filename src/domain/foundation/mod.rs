//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, the state machine trait,
//! and the ordered keyword rule tables that drive every classifier.

mod errors;
mod ids;
mod percentage;
mod rules;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use percentage::Percentage;
pub use rules::{contains_any, KeywordRule, RuleTable};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
