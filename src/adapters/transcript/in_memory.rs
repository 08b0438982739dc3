//! In-memory transcript recorder.
//!
//! Captures every appended message for polling renderers and test
//! assertions.

use std::sync::{PoisonError, RwLock};

use crate::domain::conversation::Message;
use crate::domain::foundation::SessionId;
use crate::ports::TranscriptObserver;

/// Records appended messages in arrival order.
///
/// # Example
///
/// ```ignore
/// let observer = Arc::new(InMemoryTranscriptObserver::new());
/// // ... drive a session ...
/// assert!(observer.messages().last().unwrap().is_refinement_prompt());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTranscriptObserver {
    recorded: RwLock<Vec<(SessionId, Message)>>,
}

impl InMemoryTranscriptObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, across sessions, in arrival order.
    pub fn messages(&self) -> Vec<Message> {
        self.recorded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Messages recorded for one session.
    pub fn messages_for(&self, session_id: SessionId) -> Vec<Message> {
        self.recorded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(id, _)| *id == session_id)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.recorded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn clear(&self) {
        self.recorded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TranscriptObserver for InMemoryTranscriptObserver {
    fn message_appended(&self, session_id: SessionId, message: &Message) {
        self.recorded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((session_id, message.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let observer = InMemoryTranscriptObserver::new();
        let session = SessionId::new();
        let first = Message::refinement_prompt("Clarify?", "original");
        let second = Message::clarification_request();

        observer.message_appended(session, &first);
        observer.message_appended(session, &second);

        assert_eq!(observer.messages(), vec![first, second]);
    }

    #[test]
    fn filters_by_session() {
        let observer = InMemoryTranscriptObserver::new();
        let a = SessionId::new();
        let b = SessionId::new();

        observer.message_appended(a, &Message::clarification_request());
        observer.message_appended(b, &Message::clarification_request());
        observer.message_appended(a, &Message::clarification_request());

        assert_eq!(observer.messages_for(a).len(), 2);
        assert_eq!(observer.messages_for(b).len(), 1);
        assert_eq!(observer.message_count(), 3);
    }

    #[test]
    fn clear_forgets_everything() {
        let observer = InMemoryTranscriptObserver::new();
        observer.message_appended(SessionId::new(), &Message::clarification_request());
        observer.clear();
        assert_eq!(observer.message_count(), 0);
    }
}
