//! Errors raised when a caller misuses the conversation state machine.

use thiserror::Error;

use super::ConversationPhase;
use crate::domain::foundation::ErrorCode;

/// Precondition violations on a chat session.
///
/// Classification never fails; these only arise from calling session
/// operations at the wrong time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("An assistant reply is still pending; wait for it before sending more input")]
    ReplyPending,

    #[error("A refinement is awaiting confirmation; accept or reject it before asking something new")]
    RefinementPending,

    #[error("No refinement is awaiting confirmation in phase {phase:?}")]
    NoPendingRefinement { phase: ConversationPhase },

    #[error("Message must be reviewed for confidential information before sending")]
    ConfidentialityNotAcknowledged,

    #[error("Session has been closed")]
    SessionClosed,

    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: ConversationPhase,
        to: ConversationPhase,
    },
}

impl ConversationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ReplyPending => ErrorCode::ReplyPending,
            Self::RefinementPending => ErrorCode::RefinementPending,
            Self::NoPendingRefinement { .. } => ErrorCode::NoPendingRefinement,
            Self::ConfidentialityNotAcknowledged => ErrorCode::ConfidentialityNotAcknowledged,
            Self::SessionClosed => ErrorCode::SessionClosed,
            Self::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}
