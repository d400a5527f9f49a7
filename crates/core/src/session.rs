use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One visitor's conversation thread.
///
/// Sessions are created lazily on first send (or explicitly) and are never
/// physically deleted; "ended" is the soft `is_active = false` flag. Only
/// the session registry writes `is_active` and `last_active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

/// Admin dashboard row: one active session with its message count and the
/// most recent message text, ordered by recency in the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOverview {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub message_count: u32,
    pub last_message: Option<String>,
}

/// Operator inbox entry: the most recent visitor message in an active
/// session, with running per-role counts.
///
/// `needs_response` is derived, never stored: true iff the visitor has
/// sent more messages than the session has `ai`/`admin` replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingConversation {
    pub session_id: String,
    pub message_id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_messages: u32,
    pub responses: u32,
    pub needs_response: bool,
}

/// Aggregate counters shown alongside the active-session listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_sessions: u32,
    pub messages_today: u32,
}
