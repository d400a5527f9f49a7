//! Wire types. JSON field names are camelCase to match the browser
//! client's contract (`sessionId`, `lastMessageId`, `messageId`).

use ozchat_core::{
    DashboardStats, Message, PendingConversation, SenderRole, SessionOverview,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub success: bool,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub success: bool,
    /// Fixed acknowledgement text; the real reply arrives via polling.
    pub response: String,
    pub message_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessagesQuery {
    pub session_id: String,
    #[serde(default)]
    pub last_message_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub messages: Vec<MessageDto>,
}

/// Wire shape of a message: integer id, text, lowercase sender role,
/// ISO-8601 timestamp.
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub id: i64,
    pub text: String,
    pub sender: SenderRole,
    pub timestamp: String,
}

impl From<Message> for MessageDto {
    fn from(m: Message) -> Self {
        Self { id: m.id, text: m.text, sender: m.sender, timestamp: m.timestamp.to_rfc3339() }
    }
}

pub fn messages_response(messages: Vec<Message>) -> MessagesResponse {
    MessagesResponse {
        success: true,
        messages: messages.into_iter().map(MessageDto::from).collect(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionsResponse {
    pub success: bool,
    pub sessions: Vec<SessionOverviewDto>,
    pub stats: StatsDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverviewDto {
    pub id: String,
    pub created_at: String,
    pub last_active: String,
    pub message_count: u32,
    pub last_message: Option<String>,
}

impl From<SessionOverview> for SessionOverviewDto {
    fn from(s: SessionOverview) -> Self {
        Self {
            id: s.id,
            created_at: s.created_at.to_rfc3339(),
            last_active: s.last_active.to_rfc3339(),
            message_count: s.message_count,
            last_message: s.last_message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_sessions: u32,
    pub messages_today: u32,
}

impl From<DashboardStats> for StatsDto {
    fn from(s: DashboardStats) -> Self {
        Self { total_sessions: s.total_sessions, messages_today: s.messages_today }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingResponse {
    pub success: bool,
    pub pending: Vec<PendingDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDto {
    pub session_id: String,
    pub message_id: i64,
    pub text: String,
    pub timestamp: String,
    pub user_messages: u32,
    pub responses: u32,
    pub needs_response: bool,
}

impl From<PendingConversation> for PendingDto {
    fn from(p: PendingConversation) -> Self {
        Self {
            session_id: p.session_id,
            message_id: p.message_id,
            text: p.text,
            timestamp: p.timestamp.to_rfc3339(),
            user_messages: p.user_messages,
            responses: p.responses,
            needs_response: p.needs_response,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorReplyRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorReplyResponse {
    pub success: bool,
    pub message_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: &'static str,
}
