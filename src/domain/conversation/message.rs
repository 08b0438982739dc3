//! Message entity for chat transcripts.
//!
//! Messages are immutable records of user/assistant exchanges. User messages
//! carry the analysis artifacts computed from their text; assistant messages
//! carry the refinement or the disclaimer-bearing answer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};
use crate::domain::guidance::EducationalTip;
use crate::domain::prompt_quality::PromptAnalysis;
use crate::domain::response::{GeneratedResponse, Topic};
use crate::domain::risk::RiskAssessment;
use crate::domain::screening::Warning;

/// Fixed reply used when the user rejects a refinement.
pub const CLARIFICATION_REQUEST: &str = "I understand the refinement wasn't quite right. Please \
rephrase your question with more specific details so I can provide better assistance.";

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// An immutable message within a transcript.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `created_at` is set at construction and never changes
/// - only user messages carry warnings, analysis, or a tip
/// - only assistant messages carry a risk assessment or refinement flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    created_at: Timestamp,
    warnings: Vec<Warning>,
    analysis: Option<PromptAnalysis>,
    risk_assessment: Option<RiskAssessment>,
    educational_tip: Option<EducationalTip>,
    is_refinement_prompt: bool,
    is_disclaimer: bool,
    /// For refinement prompts: the question being refined.
    original_prompt: Option<String>,
    /// For answers: the topic the reply was routed to.
    topic: Option<Topic>,
    /// For answers: true when answering a confirmed refinement.
    is_refined: bool,
}

impl Message {
    fn base(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            created_at: Timestamp::now(),
            warnings: Vec::new(),
            analysis: None,
            risk_assessment: None,
            educational_tip: None,
            is_refinement_prompt: false,
            is_disclaimer: false,
            original_prompt: None,
            topic: None,
            is_refined: false,
        }
    }

    /// Creates a user message with the artifacts derived from its text.
    pub fn user(
        text: impl Into<String>,
        warnings: Vec<Warning>,
        analysis: PromptAnalysis,
        educational_tip: Option<EducationalTip>,
    ) -> Self {
        Self {
            warnings,
            analysis: Some(analysis),
            educational_tip,
            ..Self::base(Sender::User, text)
        }
    }

    /// Creates the clarifying question offered for a first-turn prompt.
    pub fn refinement_prompt(question: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            is_refinement_prompt: true,
            original_prompt: Some(original.into()),
            ..Self::base(Sender::Assistant, question)
        }
    }

    /// Creates a disclaimer-bearing answer with its risk assessment.
    pub fn answer(response: GeneratedResponse, risk: RiskAssessment, is_refined: bool) -> Self {
        Self {
            risk_assessment: Some(risk),
            is_disclaimer: true,
            topic: Some(response.topic),
            is_refined,
            ..Self::base(Sender::Assistant, response.response_text)
        }
    }

    /// Creates the fixed reply sent when a refinement is rejected.
    pub fn clarification_request() -> Self {
        Self {
            is_disclaimer: true,
            ..Self::base(Sender::Assistant, CLARIFICATION_REQUEST)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn analysis(&self) -> Option<&PromptAnalysis> {
        self.analysis.as_ref()
    }

    pub fn risk_assessment(&self) -> Option<&RiskAssessment> {
        self.risk_assessment.as_ref()
    }

    pub fn educational_tip(&self) -> Option<&EducationalTip> {
        self.educational_tip.as_ref()
    }

    pub fn is_refinement_prompt(&self) -> bool {
        self.is_refinement_prompt
    }

    pub fn is_disclaimer(&self) -> bool {
        self.is_disclaimer
    }

    pub fn original_prompt(&self) -> Option<&str> {
        self.original_prompt.as_deref()
    }

    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    pub fn is_refined(&self) -> bool {
        self.is_refined
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}
