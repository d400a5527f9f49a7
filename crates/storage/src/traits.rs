//! Narrow async store capabilities.
//!
//! Components depend on these traits, not on the SQLite driver's calling
//! convention; the concrete [`crate::Store`] implements them by hopping
//! onto the blocking pool.

use async_trait::async_trait;
use ozchat_core::{DashboardStats, Message, PendingConversation, SenderRole, Session, SessionOverview};

use crate::StorageError;

/// Session registry operations. The only writer of `is_active` and
/// `last_active`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create the session row if absent; concurrent duplicates are
    /// absorbed, not surfaced.
    async fn ensure_session(&self, id: &str) -> Result<(), StorageError>;

    /// Get session by id.
    async fn get_session(&self, id: &str) -> Result<Option<Session>, StorageError>;

    /// Set `last_active` to now; no-op for unknown ids.
    async fn touch_session(&self, id: &str) -> Result<(), StorageError>;

    /// Soft-end a session. Returns `true` if a row was flipped.
    async fn end_session(&self, id: &str) -> Result<bool, StorageError>;

    /// Active sessions with message counts, most recently active first.
    async fn list_active_sessions(&self) -> Result<Vec<SessionOverview>, StorageError>;

    /// Dashboard aggregates (total sessions, messages today).
    async fn dashboard_stats(&self) -> Result<DashboardStats, StorageError>;
}

/// Append-only message log operations.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message; returns the store-assigned ascending id.
    async fn append_message(
        &self,
        session_id: &str,
        sender: SenderRole,
        text: &str,
    ) -> Result<i64, StorageError>;

    /// Full ordered history, oldest first.
    async fn history(&self, session_id: &str) -> Result<Vec<Message>, StorageError>;

    /// Messages with `id > after_id` (full history when `None`), in
    /// history order.
    async fn messages_since(
        &self,
        session_id: &str,
        after_id: Option<i64>,
    ) -> Result<Vec<Message>, StorageError>;

    /// Most recent visitor message per active session with per-role
    /// counts, for the operator inbox.
    async fn pending_for_operator(&self) -> Result<Vec<PendingConversation>, StorageError>;
}

/// Combined capability the services hold a handle to.
pub trait ChatStore: SessionStore + MessageStore {}

impl<T: SessionStore + MessageStore> ChatStore for T {}
