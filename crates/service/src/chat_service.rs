use std::sync::Arc;

use ozchat_core::constants::SEND_ACK;
use ozchat_core::{Message, SenderRole};
use ozchat_storage::ChatStore;

use crate::SimulatedResponder;
use crate::error::ServiceError;

/// What the visitor gets back immediately after a send: the id of their
/// own just-appended message plus a fixed acknowledgement. The actual
/// reply arrives later through polling.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub message_id: i64,
    pub ack: &'static str,
}

/// Visitor-facing chat operations.
pub struct ChatService {
    store: Arc<dyn ChatStore>,
    responder: SimulatedResponder,
}

impl ChatService {
    pub fn new(store: Arc<dyn ChatStore>, responder: SimulatedResponder) -> Self {
        Self { store, responder }
    }

    /// Accept a visitor message.
    ///
    /// Ensures the session row exists (lazy creation on first send),
    /// appends the message, bumps `last_active`, and schedules exactly one
    /// simulated reply. Returns without waiting for that reply. No
    /// transaction spans the ensure and the append: a crash in between
    /// leaves an empty session, never an orphaned message.
    pub async fn send_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<SendOutcome, ServiceError> {
        validate_session_id(session_id)?;
        if text.trim().is_empty() {
            return Err(ServiceError::invalid("message text is required"));
        }

        self.store.ensure_session(session_id).await?;
        let message_id = self.store.append_message(session_id, SenderRole::User, text).await?;
        self.store.touch_session(session_id).await?;
        self.responder.schedule_reply(session_id);

        Ok(SendOutcome { message_id, ack: SEND_ACK })
    }

    /// Full ordered history for a session, oldest first.
    pub async fn history(&self, session_id: &str) -> Result<Vec<Message>, ServiceError> {
        validate_session_id(session_id)?;
        Ok(self.store.history(session_id).await?)
    }

    /// Messages newer than the client's cursor (all of them when the
    /// client has none).
    pub async fn messages_since(
        &self,
        session_id: &str,
        after_id: Option<i64>,
    ) -> Result<Vec<Message>, ServiceError> {
        validate_session_id(session_id)?;
        Ok(self.store.messages_since(session_id, after_id).await?)
    }
}

fn validate_session_id(session_id: &str) -> Result<(), ServiceError> {
    if session_id.trim().is_empty() {
        return Err(ServiceError::invalid("session id is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_util::test_store;
    use ozchat_core::ResponderConfig;

    fn chat_with_delay(
        store: Arc<dyn ChatStore>,
        delay: Duration,
    ) -> ChatService {
        let config = ResponderConfig {
            replies: vec!["canned answer".to_owned()],
            min_delay: delay,
            max_delay: delay,
        };
        let responder = SimulatedResponder::new(Arc::clone(&store), config);
        ChatService::new(store, responder)
    }

    #[tokio::test]
    async fn send_creates_session_and_returns_id_and_ack() {
        let (store, _temp_dir) = test_store();
        let chat = chat_with_delay(Arc::clone(&store), Duration::from_secs(60));

        let outcome = chat.send_message("s1", "hello").await.unwrap();
        assert!(outcome.message_id > 0);
        assert_eq!(outcome.ack, SEND_ACK);

        let session = store.get_session("s1").await.unwrap().unwrap();
        assert!(session.is_active);

        let history = chat.history("s1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sender, SenderRole::User);
        assert_eq!(history[0].text, "hello");
    }

    #[tokio::test]
    async fn simulated_reply_follows_the_send() {
        let (store, _temp_dir) = test_store();
        let chat = chat_with_delay(store, Duration::ZERO);

        chat.send_message("s1", "hello").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let history = chat.history("s1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, SenderRole::User);
        assert_eq!(history[1].sender, SenderRole::Ai);
        assert_eq!(history[1].text, "canned answer");
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_side_effects() {
        let (store, _temp_dir) = test_store();
        let chat = chat_with_delay(Arc::clone(&store), Duration::ZERO);

        assert!(matches!(
            chat.send_message("", "hello").await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            chat.send_message("s1", "   ").await,
            Err(ServiceError::InvalidInput(_))
        ));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(store.get_session("s1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cursor_poll_sees_only_new_messages() {
        let (store, _temp_dir) = test_store();
        let chat = chat_with_delay(store, Duration::from_secs(60));

        let first = chat.send_message("s1", "one").await.unwrap();
        let second = chat.send_message("s1", "two").await.unwrap();

        let all = chat.messages_since("s1", None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all, chat.history("s1").await.unwrap());

        let newer = chat.messages_since("s1", Some(first.message_id)).await.unwrap();
        assert_eq!(newer.len(), 1);
        assert_eq!(newer[0].id, second.message_id);

        assert!(chat.messages_since("s1", Some(second.message_id)).await.unwrap().is_empty());
    }
}
