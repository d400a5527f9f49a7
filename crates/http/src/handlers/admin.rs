//! Operator endpoints. Every handler takes [`OperatorAuth`] first, so the
//! bearer check runs before anything else.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{
    AckResponse, AdminSessionsResponse, EndSessionRequest, HistoryQuery, MessagesResponse,
    OperatorReplyRequest, OperatorReplyResponse, PendingDto, PendingResponse, messages_response,
};
use crate::auth::OperatorAuth;

pub async fn list_sessions(
    _auth: OperatorAuth,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AdminSessionsResponse>, ApiError> {
    let (sessions, stats) = state.operator.list_active_sessions().await?;
    Ok(Json(AdminSessionsResponse {
        success: true,
        sessions: sessions.into_iter().map(Into::into).collect(),
        stats: stats.into(),
    }))
}

/// Inbox of conversations whose latest visitor message may still be
/// unanswered.
pub async fn pending(
    _auth: OperatorAuth,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PendingResponse>, ApiError> {
    let pending = state.operator.pending_conversations().await?;
    Ok(Json(PendingResponse {
        success: true,
        pending: pending.into_iter().map(PendingDto::from).collect(),
    }))
}

pub async fn chat_history(
    _auth: OperatorAuth,
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = state.operator.chat_history(&query.session_id).await?;
    Ok(Json(messages_response(messages)))
}

/// Reply while impersonating the automated agent. On the visitor's side
/// this is indistinguishable from a simulated reply.
pub async fn respond_as_agent(
    _auth: OperatorAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<OperatorReplyRequest>,
) -> Result<Json<OperatorReplyResponse>, ApiError> {
    let message_id = state.operator.respond_as_agent(&req.session_id, &req.message).await?;
    Ok(Json(OperatorReplyResponse { success: true, message_id }))
}

/// Reply openly as the administrator.
pub async fn respond_as_admin(
    _auth: OperatorAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<OperatorReplyRequest>,
) -> Result<Json<OperatorReplyResponse>, ApiError> {
    let message_id = state.operator.respond_as_admin(&req.session_id, &req.message).await?;
    Ok(Json(OperatorReplyResponse { success: true, message_id }))
}

pub async fn end_session(
    _auth: OperatorAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<EndSessionRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state.operator.end_session(&req.session_id).await?;
    Ok(Json(AckResponse { success: true, message: "Session ended successfully" }))
}
