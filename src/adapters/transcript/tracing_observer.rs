//! Transcript observer that emits structured log events.

use tracing::info;

use crate::domain::conversation::Message;
use crate::domain::foundation::SessionId;
use crate::ports::TranscriptObserver;

/// Logs message metadata through `tracing`.
///
/// Message text is never logged; user text may hold the very data the
/// screening step warns about.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTranscriptObserver;

impl TracingTranscriptObserver {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptObserver for TracingTranscriptObserver {
    fn message_appended(&self, session_id: SessionId, message: &Message) {
        info!(
            session_id = %session_id,
            message_id = %message.id(),
            sent_at = %message.created_at().time_of_day(),
            sender = ?message.sender(),
            text_len = message.text().len(),
            warnings = message.warnings().len(),
            refinement = message.is_refinement_prompt(),
            risk = ?message.risk_assessment().map(|r| r.level),
            "message appended"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_does_not_panic_without_subscriber() {
        let observer = TracingTranscriptObserver::new();
        observer.message_appended(SessionId::new(), &Message::clarification_request());
    }
}
