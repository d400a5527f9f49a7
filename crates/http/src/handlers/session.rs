use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateSessionRequest, CreateSessionResponse};

/// Explicit session creation, used by the visitor page before the first
/// send. Returns the effective id (the caller's, or a generated token).
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let session_id = state.sessions.create_session(req.session_id).await?;
    Ok(Json(CreateSessionResponse { success: true, session_id }))
}
