//! Conversation state aggregate.
//!
//! Owns the transcript, the phase, and the pending refinement for one chat
//! session. All mutation goes through the methods below, which enforce the
//! phase transitions.
//!
//! # Aggregate Boundary
//!
//! - The transcript is append-only; appended messages never change
//! - `pending_refinement` is set exactly while the phase is
//!   `AwaitingRefinementConfirmation`
//! - At most one refinement is pending at a time

use serde::{Deserialize, Serialize};

use super::{ConversationError, ConversationPhase, Message};
use crate::domain::foundation::StateMachine;

/// Session-scoped conversation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    phase: ConversationPhase,
    /// Number of user messages accepted so far.
    turn_count: u32,
    /// The original question while a refinement awaits confirmation.
    pending_refinement: Option<String>,
    transcript: Vec<Message>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn pending_refinement(&self) -> Option<&str> {
        self.pending_refinement.as_deref()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.transcript.last()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a user message.
    ///
    /// # Errors
    ///
    /// - `RefinementPending` while a refinement awaits confirmation
    pub fn record_user_message(&mut self, message: Message) -> Result<&Message, ConversationError> {
        if !self.phase.accepts_user_input() {
            return Err(ConversationError::RefinementPending);
        }
        self.turn_count += 1;
        Ok(self.append(message))
    }

    /// Appends a refinement prompt and starts awaiting confirmation of `original`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless awaiting first input
    pub fn offer_refinement(
        &mut self,
        original: impl Into<String>,
        prompt: Message,
    ) -> Result<&Message, ConversationError> {
        self.transition(ConversationPhase::AwaitingRefinementConfirmation)?;
        self.pending_refinement = Some(original.into());
        Ok(self.append(prompt))
    }

    /// Appends the reply that resolves the pending refinement and clears it.
    ///
    /// Used for both the accepted answer and the rejected clarification.
    ///
    /// # Errors
    ///
    /// - `NoPendingRefinement` unless a refinement awaits confirmation
    pub fn resolve_refinement(&mut self, reply: Message) -> Result<&Message, ConversationError> {
        if self.phase != ConversationPhase::AwaitingRefinementConfirmation {
            return Err(ConversationError::NoPendingRefinement { phase: self.phase });
        }
        self.transition(ConversationPhase::AwaitingFollowupInput)?;
        self.pending_refinement = None;
        Ok(self.append(reply))
    }

    /// Appends an answer to a follow-up question.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless awaiting follow-up input
    pub fn record_followup_answer(&mut self, reply: Message) -> Result<&Message, ConversationError> {
        self.transition(ConversationPhase::AwaitingFollowupInput)?;
        Ok(self.append(reply))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn transition(&mut self, target: ConversationPhase) -> Result<(), ConversationError> {
        let from = self.phase;
        self.phase = from
            .transition_to(target)
            .map_err(|_| ConversationError::InvalidTransition { from, to: target })?;
        Ok(())
    }

    fn append(&mut self, message: Message) -> &Message {
        self.transcript.push(message);
        &self.transcript[self.transcript.len() - 1]
    }
}
