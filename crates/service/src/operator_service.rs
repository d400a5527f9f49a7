use std::sync::Arc;

use ozchat_core::{
    DashboardStats, Message, PendingConversation, SenderRole, SessionOverview,
};
use ozchat_storage::ChatStore;

use crate::error::ServiceError;

/// The concealed operator's override channel.
///
/// Callers are assumed to be authenticated already; gating is the
/// transport layer's job. `respond_as_agent` appends with the `ai` role,
/// so on the wire the operator's reply is indistinguishable from the
/// simulated responder's; `respond_as_admin` is the open, non-impersonating
/// variant.
pub struct OperatorService {
    store: Arc<dyn ChatStore>,
}

impl OperatorService {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// Active sessions, most recently active first, with the dashboard
    /// aggregates.
    pub async fn list_active_sessions(
        &self,
    ) -> Result<(Vec<SessionOverview>, DashboardStats), ServiceError> {
        let sessions = self.store.list_active_sessions().await?;
        let stats = self.store.dashboard_stats().await?;
        Ok((sessions, stats))
    }

    /// Inbox of latest visitor messages with `needs_response` flags.
    pub async fn pending_conversations(&self) -> Result<Vec<PendingConversation>, ServiceError> {
        Ok(self.store.pending_for_operator().await?)
    }

    /// Full history of one conversation, for the operator view.
    pub async fn chat_history(&self, session_id: &str) -> Result<Vec<Message>, ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::invalid("session id is required"));
        }
        Ok(self.store.history(session_id).await?)
    }

    /// Reply while impersonating the automated agent.
    pub async fn respond_as_agent(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<i64, ServiceError> {
        self.respond(session_id, SenderRole::Ai, text).await
    }

    /// Reply openly as the administrator.
    pub async fn respond_as_admin(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<i64, ServiceError> {
        self.respond(session_id, SenderRole::Admin, text).await
    }

    /// Soft-end a conversation.
    pub async fn end_session(&self, session_id: &str) -> Result<(), ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::invalid("session id is required"));
        }
        if self.store.end_session(session_id).await? {
            Ok(())
        } else {
            Err(ServiceError::session_not_found(session_id))
        }
    }

    async fn respond(
        &self,
        session_id: &str,
        sender: SenderRole,
        text: &str,
    ) -> Result<i64, ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::invalid("session id is required"));
        }
        if text.trim().is_empty() {
            return Err(ServiceError::invalid("message text is required"));
        }
        // Operator replies never auto-create a conversation.
        if self.store.get_session(session_id).await?.is_none() {
            return Err(ServiceError::session_not_found(session_id));
        }
        let message_id = self.store.append_message(session_id, sender, text).await?;
        self.store.touch_session(session_id).await?;
        Ok(message_id)
    }
}
