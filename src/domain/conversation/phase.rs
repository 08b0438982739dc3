//! Conversation phase state machine.
//!
//! Defines where a chat session stands in the refine-then-answer flow and
//! which transitions are legal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The phase of a chat session.
///
/// - `AwaitingFirstInput`: nothing answered yet; the first question gets a
///   clarifying refinement instead of an answer
/// - `AwaitingRefinementConfirmation`: a refinement was offered and the user
///   must accept or reject it
/// - `AwaitingFollowupInput`: the refinement turn is over; every new question
///   is answered directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationPhase {
    #[default]
    AwaitingFirstInput,
    AwaitingRefinementConfirmation,
    AwaitingFollowupInput,
}

impl ConversationPhase {
    /// Returns true if `submit` is allowed in this phase.
    pub fn accepts_user_input(&self) -> bool {
        !matches!(self, Self::AwaitingRefinementConfirmation)
    }

    /// Returns true if a submitted question gets a refinement instead of an answer.
    pub fn refines_next_input(&self) -> bool {
        matches!(self, Self::AwaitingFirstInput)
    }
}

impl StateMachine for ConversationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationPhase::*;
        matches!(
            (self, target),
            // Refinement offered for the first question
            (AwaitingFirstInput, AwaitingRefinementConfirmation) |
            // Refinement accepted or rejected
            (AwaitingRefinementConfirmation, AwaitingFollowupInput) |
            // Follow-up answered
            (AwaitingFollowupInput, AwaitingFollowupInput)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationPhase::*;
        match self {
            AwaitingFirstInput => vec![AwaitingRefinementConfirmation],
            AwaitingRefinementConfirmation => vec![AwaitingFollowupInput],
            AwaitingFollowupInput => vec![AwaitingFollowupInput],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ConversationPhase; 3] = [
        ConversationPhase::AwaitingFirstInput,
        ConversationPhase::AwaitingRefinementConfirmation,
        ConversationPhase::AwaitingFollowupInput,
    ];

    mod definition {
        use super::*;

        #[test]
        fn default_phase_awaits_first_input() {
            assert_eq!(ConversationPhase::default(), ConversationPhase::AwaitingFirstInput);
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&ConversationPhase::AwaitingFollowupInput).unwrap();
            assert_eq!(json, "\"awaiting_followup_input\"");
        }
    }

    mod input {
        use super::*;

        #[test]
        fn refinement_confirmation_blocks_input() {
            assert!(!ConversationPhase::AwaitingRefinementConfirmation.accepts_user_input());
            assert!(ConversationPhase::AwaitingFirstInput.accepts_user_input());
            assert!(ConversationPhase::AwaitingFollowupInput.accepts_user_input());
        }

        #[test]
        fn only_first_input_is_refined() {
            assert!(ConversationPhase::AwaitingFirstInput.refines_next_input());
            assert!(!ConversationPhase::AwaitingFollowupInput.refines_next_input());
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn first_input_leads_to_confirmation() {
            let next = ConversationPhase::AwaitingFirstInput
                .transition_to(ConversationPhase::AwaitingRefinementConfirmation);
            assert_eq!(next, Ok(ConversationPhase::AwaitingRefinementConfirmation));
        }

        #[test]
        fn cannot_skip_refinement() {
            assert!(ConversationPhase::AwaitingFirstInput
                .transition_to(ConversationPhase::AwaitingFollowupInput)
                .is_err());
        }

        #[test]
        fn followup_never_reenters_refinement() {
            assert!(!ConversationPhase::AwaitingFollowupInput
                .can_transition_to(&ConversationPhase::AwaitingRefinementConfirmation));
            assert!(!ConversationPhase::AwaitingFollowupInput
                .can_transition_to(&ConversationPhase::AwaitingFirstInput));
        }

        #[test]
        fn no_phase_is_terminal() {
            for phase in ALL {
                assert!(!phase.is_terminal(), "{:?} should not be terminal", phase);
            }
        }

        #[test]
        fn can_transition_to_is_consistent_with_valid_transitions() {
            for phase in ALL {
                for target in ALL {
                    assert_eq!(
                        phase.can_transition_to(&target),
                        phase.valid_transitions().contains(&target),
                        "{:?} -> {:?}",
                        phase,
                        target
                    );
                }
            }
        }
    }
}
