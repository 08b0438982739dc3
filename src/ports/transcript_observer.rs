//! TranscriptObserver port - outbound notification of transcript changes.
//!
//! The presentation layer renders the transcript; this port lets it learn
//! about messages that land later, after the simulated typing delay.

use crate::domain::conversation::Message;
use crate::domain::foundation::SessionId;

/// Port for observing appended messages.
///
/// Implementations must ensure:
/// - Notification is cheap and non-blocking (it runs under the session lock)
/// - Messages are observed in transcript order per session
///
/// # Example
///
/// ```ignore
/// let observer = Arc::new(InMemoryTranscriptObserver::new());
/// let mut session = ChatSession::new(SessionConfig::default(), observer.clone());
/// session.submit("What is contract law").await?;
/// session.settle().await;
/// assert_eq!(observer.message_count(), 2);
/// ```
pub trait TranscriptObserver: Send + Sync {
    /// Called once for each message appended to a session transcript.
    fn message_appended(&self, session_id: SessionId, message: &Message);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn TranscriptObserver) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}

    #[test]
    fn trait_objects_are_send_sync() {
        assert_send_sync::<dyn TranscriptObserver>();
    }
}
