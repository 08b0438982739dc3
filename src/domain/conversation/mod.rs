//! Conversation domain module.
//!
//! Manages the refine-then-answer chat flow: the transcript, the phase state
//! machine, and the single pending refinement.

mod errors;
mod message;
mod phase;
mod state;

pub use errors::ConversationError;
pub use message::{Message, Sender, CLARIFICATION_REQUEST};
pub use phase::ConversationPhase;
pub use state::ConversationState;
