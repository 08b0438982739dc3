//! ChatSession - refine-then-answer conversation flow.
//!
//! A session owns one `ConversationState` and is its only mutator. User
//! input is screened and graded synchronously; the assistant's reply is a
//! scheduled task that lands after a configured "typing" delay.
//!
//! ## Flow
//!
//! 1. First question: screened, graded, then answered with a clarifying
//!    refinement after `refinement_delay`
//! 2. `resolve_refinement(true)`: the original question is answered with a
//!    risk assessment after `confirmed_reply_delay`
//! 3. `resolve_refinement(false)`: a fixed clarification request is appended
//!    immediately
//! 4. Every later question is answered after `reply_delay`
//!
//! ## Pending replies
//!
//! At most one reply is in flight. `submit` and `resolve_refinement` return
//! `ReplyPending` until it lands. Closing or dropping the session aborts the
//! in-flight reply, so nothing is appended to a discarded transcript.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::domain::conversation::{ConversationError, ConversationPhase, ConversationState, Message};
use crate::domain::foundation::{MessageId, SessionId};
use crate::domain::guidance::{educational_tip, EducationalTip};
use crate::domain::prompt_quality::{analyze_prompt, should_surface, PromptAnalysis};
use crate::domain::refinement::refine_prompt;
use crate::domain::response::generate_response;
use crate::domain::risk::assess_risk;
use crate::domain::screening::{detect_signals, Warning};
use crate::ports::TranscriptObserver;

/// What the assistant will reply with once the typing delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Refinement,
    Answer,
}

/// Everything the caller must surface as soon as a question is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message_id: MessageId,
    pub warnings: Vec<Warning>,
    /// Present when the prompt analysis must be shown to the user.
    pub analysis: Option<PromptAnalysis>,
    pub educational_tip: Option<EducationalTip>,
    pub reply: ReplyKind,
}

/// Result of `ChatSession::submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmitReceipt),
    /// Empty or whitespace-only input; nothing happened.
    Ignored,
}

/// Result of `ChatSession::resolve_refinement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The answer to the original question is on its way.
    AnswerScheduled,
    /// The clarification request was appended immediately.
    ClarificationRequested(MessageId),
}

enum ScheduledReply {
    Refinement { original: String },
    ConfirmedAnswer { original: String },
    FollowupAnswer { question: String },
}

impl ScheduledReply {
    fn label(&self) -> &'static str {
        match self {
            Self::Refinement { .. } => "refinement",
            Self::ConfirmedAnswer { .. } => "confirmed_answer",
            Self::FollowupAnswer { .. } => "followup_answer",
        }
    }

    fn apply(self, state: &mut ConversationState) -> Result<&Message, ConversationError> {
        match self {
            Self::Refinement { original } => {
                let question = refine_prompt(&original);
                let prompt = Message::refinement_prompt(question, original.clone());
                state.offer_refinement(original, prompt)
            }
            Self::ConfirmedAnswer { original } => {
                state.resolve_refinement(compose_answer(&original, true))
            }
            Self::FollowupAnswer { question } => {
                state.record_followup_answer(compose_answer(&question, false))
            }
        }
    }
}

fn compose_answer(text: &str, is_refined: bool) -> Message {
    let response = generate_response(text);
    let risk = assess_risk(text);
    debug!(topic = ?response.topic, risk = ?risk.level, is_refined, "answer composed");
    Message::answer(response, risk, is_refined)
}

/// One chat session and its conversation state.
pub struct ChatSession {
    id: SessionId,
    config: SessionConfig,
    state: Arc<Mutex<ConversationState>>,
    observer: Arc<dyn TranscriptObserver>,
    pending_reply: Option<JoinHandle<()>>,
    draft: Option<String>,
    surfaced_analysis: Option<PromptAnalysis>,
    confidentiality_acknowledged: bool,
    closed: bool,
}

impl ChatSession {
    /// Starts a new session with an empty transcript.
    pub fn new(config: SessionConfig, observer: Arc<dyn TranscriptObserver>) -> Self {
        let id = SessionId::new();
        info!(session_id = %id, "chat session started");
        Self {
            id,
            config,
            state: Arc::new(Mutex::new(ConversationState::new())),
            observer,
            pending_reply: None,
            draft: None,
            surfaced_analysis: None,
            confidentiality_acknowledged: true,
            closed: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub async fn phase(&self) -> ConversationPhase {
        self.state.lock().await.phase()
    }

    /// Snapshot of the transcript in append order.
    pub async fn transcript(&self) -> Vec<Message> {
        self.state.lock().await.transcript().to_vec()
    }

    /// Snapshot of the whole conversation state.
    pub async fn snapshot(&self) -> ConversationState {
        self.state.lock().await.clone()
    }

    pub async fn pending_refinement(&self) -> Option<String> {
        self.state
            .lock()
            .await
            .pending_refinement()
            .map(str::to_string)
    }

    /// Returns true while an assistant reply is scheduled but not yet appended.
    pub fn is_reply_pending(&self) -> bool {
        self.pending_reply
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The pending input box contents, if the caller has set any.
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// The prompt analysis currently shown to the user, if any.
    pub fn surfaced_analysis(&self) -> Option<&PromptAnalysis> {
        self.surfaced_analysis.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input box
    // ─────────────────────────────────────────────────────────────────────────

    /// Records whether the user confirmed the message holds no confidential data.
    pub fn set_confidentiality_acknowledged(&mut self, acknowledged: bool) {
        self.confidentiality_acknowledged = acknowledged;
    }

    /// Replaces the pending input with an improved prompt and dismisses the
    /// surfaced analysis. Does not affect the conversation phase.
    pub fn apply_improved_prompt(&mut self, text: impl Into<String>) {
        self.draft = Some(text.into());
        self.surfaced_analysis = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits a user question.
    ///
    /// Warnings, the surfacing-worthy analysis, and any educational tip are
    /// returned immediately; the assistant reply is scheduled.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` after `close`
    /// - `ConfidentialityNotAcknowledged` if acknowledgement is required and missing
    /// - `ReplyPending` while the previous reply has not landed
    /// - `RefinementPending` while a refinement awaits confirmation
    pub async fn submit(&mut self, text: &str) -> Result<SubmitOutcome, ConversationError> {
        self.ensure_open()?;
        if text.trim().is_empty() {
            debug!(session_id = %self.id, "ignoring empty submission");
            return Ok(SubmitOutcome::Ignored);
        }
        if self.config.require_confidentiality_ack && !self.confidentiality_acknowledged {
            warn!(session_id = %self.id, "submission without confidentiality acknowledgement");
            return Err(ConversationError::ConfidentialityNotAcknowledged);
        }
        self.ensure_reply_settled()?;

        let warnings = detect_signals(text);
        let analysis = analyze_prompt(text);
        let tip = educational_tip(text);
        let surfaced = should_surface(&analysis).then(|| analysis.clone());

        let (message_id, reply) = {
            let mut state = self.state.lock().await;
            let reply = if state.phase().refines_next_input() {
                ReplyKind::Refinement
            } else {
                ReplyKind::Answer
            };
            let message = state.record_user_message(Message::user(
                text,
                warnings.clone(),
                analysis,
                tip.clone(),
            ))?;
            self.observer.message_appended(self.id, message);
            (*message.id(), reply)
        };

        info!(
            session_id = %self.id,
            message_id = %message_id,
            text_len = text.len(),
            warnings = warnings.len(),
            analysis_surfaced = surfaced.is_some(),
            reply = ?reply,
            "user message accepted"
        );

        let scheduled = match reply {
            ReplyKind::Refinement => ScheduledReply::Refinement {
                original: text.to_string(),
            },
            ReplyKind::Answer => ScheduledReply::FollowupAnswer {
                question: text.to_string(),
            },
        };
        let delay = match reply {
            ReplyKind::Refinement => self.config.refinement_delay(),
            ReplyKind::Answer => self.config.reply_delay(),
        };
        self.schedule(delay, scheduled);

        self.draft = None;
        self.surfaced_analysis = surfaced.clone();

        Ok(SubmitOutcome::Accepted(SubmitReceipt {
            message_id,
            warnings,
            analysis: surfaced,
            educational_tip: tip,
            reply,
        }))
    }

    /// Accepts or rejects the pending refinement.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` after `close`
    /// - `ReplyPending` while the refinement itself (or its answer) has not landed
    /// - `NoPendingRefinement` if no refinement awaits confirmation
    pub async fn resolve_refinement(
        &mut self,
        accepted: bool,
    ) -> Result<ResolveOutcome, ConversationError> {
        self.ensure_open()?;
        self.ensure_reply_settled()?;

        let mut state = self.state.lock().await;
        let Some(original) = state.pending_refinement().map(str::to_string) else {
            let phase = state.phase();
            warn!(session_id = %self.id, phase = ?phase, "resolve_refinement without pending refinement");
            return Err(ConversationError::NoPendingRefinement { phase });
        };

        if accepted {
            drop(state);
            info!(session_id = %self.id, "refinement accepted");
            let delay = self.config.confirmed_reply_delay();
            self.schedule(delay, ScheduledReply::ConfirmedAnswer { original });
            Ok(ResolveOutcome::AnswerScheduled)
        } else {
            let message = state.resolve_refinement(Message::clarification_request())?;
            self.observer.message_appended(self.id, message);
            let message_id = *message.id();
            info!(session_id = %self.id, "refinement rejected");
            Ok(ResolveOutcome::ClarificationRequested(message_id))
        }
    }

    /// Waits for the in-flight reply, if any, to land.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending_reply.take() {
            if let Err(err) = handle.await {
                warn!(session_id = %self.id, error = %err, "scheduled reply did not complete");
            }
        }
    }

    /// Ends the session, cancelling any in-flight reply.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let cancelled = self.abort_pending();
        info!(session_id = %self.id, cancelled_reply = cancelled, "chat session closed");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_open(&self) -> Result<(), ConversationError> {
        if self.closed {
            return Err(ConversationError::SessionClosed);
        }
        Ok(())
    }

    fn ensure_reply_settled(&mut self) -> Result<(), ConversationError> {
        if self.is_reply_pending() {
            warn!(session_id = %self.id, "input rejected while a reply is pending");
            return Err(ConversationError::ReplyPending);
        }
        self.pending_reply = None;
        Ok(())
    }

    fn schedule(&mut self, delay: Duration, reply: ScheduledReply) {
        let session_id = self.id;
        let state = Arc::clone(&self.state);
        let observer = Arc::clone(&self.observer);
        debug!(
            session_id = %session_id,
            delay_ms = delay.as_millis() as u64,
            kind = reply.label(),
            "reply scheduled"
        );

        self.pending_reply = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut guard = state.lock().await;
            match reply.apply(&mut guard) {
                Ok(message) => observer.message_appended(session_id, message),
                Err(err) => {
                    warn!(session_id = %session_id, error = %err, "scheduled reply discarded")
                }
            }
        }));
    }

    fn abort_pending(&mut self) -> bool {
        match self.pending_reply.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
