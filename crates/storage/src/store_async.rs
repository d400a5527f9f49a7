//! Async trait implementations for [`Store`] via `spawn_blocking`.

use async_trait::async_trait;
use ozchat_core::{DashboardStats, Message, PendingConversation, SenderRole, Session, SessionOverview};

use crate::traits::{MessageStore, SessionStore};
use crate::{StorageError, Store};

/// Run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| StorageError::Join(e.to_string()))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture val $arg:ident) => { };
    (@pass str $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl SessionStore for Store {
    async fn ensure_session(&self, id: &str) -> Result<(), StorageError> {
        delegate!(self, ensure_session, @str id)
    }
    async fn get_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        delegate!(self, get_session, @str id)
    }
    async fn touch_session(&self, id: &str) -> Result<(), StorageError> {
        delegate!(self, touch_session, @str id)
    }
    async fn end_session(&self, id: &str) -> Result<bool, StorageError> {
        delegate!(self, end_session, @str id)
    }
    async fn list_active_sessions(&self) -> Result<Vec<SessionOverview>, StorageError> {
        delegate!(self, list_active_sessions)
    }
    async fn dashboard_stats(&self) -> Result<DashboardStats, StorageError> {
        delegate!(self, dashboard_stats)
    }
}

#[async_trait]
impl MessageStore for Store {
    async fn append_message(
        &self,
        session_id: &str,
        sender: SenderRole,
        text: &str,
    ) -> Result<i64, StorageError> {
        delegate!(self, append_message, @str session_id, @val sender, @str text)
    }
    async fn history(&self, session_id: &str) -> Result<Vec<Message>, StorageError> {
        delegate!(self, history, @str session_id)
    }
    async fn messages_since(
        &self,
        session_id: &str,
        after_id: Option<i64>,
    ) -> Result<Vec<Message>, StorageError> {
        delegate!(self, messages_since, @str session_id, @val after_id)
    }
    async fn pending_for_operator(&self) -> Result<Vec<PendingConversation>, StorageError> {
        delegate!(self, pending_for_operator)
    }
}
