use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{
    HistoryQuery, MessagesResponse, NewMessagesQuery, SendMessageRequest, SendMessageResponse,
    messages_response,
};

/// Visitor send. Responds as soon as the visitor's own message is stored;
/// the (simulated or operator) reply arrives through polling.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let outcome = state.chat.send_message(&req.session_id, &req.message).await?;
    Ok(Json(SendMessageResponse {
        success: true,
        response: outcome.ack.to_owned(),
        message_id: outcome.message_id,
    }))
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = state.chat.history(&query.session_id).await?;
    Ok(Json(messages_response(messages)))
}

/// Incremental poll: everything newer than the client's `lastMessageId`
/// cursor, or the full history when the client has none.
pub async fn new_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewMessagesQuery>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages =
        state.chat.messages_since(&query.session_id, query.last_message_id).await?;
    Ok(Json(messages_response(messages)))
}
