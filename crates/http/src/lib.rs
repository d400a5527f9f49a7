//! HTTP API server for ozchat.
//!
//! Two surfaces share one router: the visitor endpoints under `/api/chat`
//! and `/api/session`, and the operator endpoints under `/api/admin`,
//! gated by a bearer token. CORS is permissive because the visitor page
//! polls from the browser.

pub mod api_error;
mod api_types;
mod auth;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use ozchat_service::{ChatService, OperatorService, SessionService};

pub use api_error::ApiError;
pub use auth::OperatorAuth;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub chat: ChatService,
    pub sessions: SessionService,
    pub operator: OperatorService,
    /// Bearer token expected on operator routes. `None` means operator
    /// access is disabled entirely (every admin call gets 401).
    pub operator_token: Option<String>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/session/create", post(handlers::session::create_session))
        .route("/api/chat/send", post(handlers::chat::send_message))
        .route("/api/chat/history", get(handlers::chat::history))
        .route("/api/chat/new-messages", get(handlers::chat::new_messages))
        .route("/api/admin/sessions", get(handlers::admin::list_sessions))
        .route("/api/admin/pending", get(handlers::admin::pending))
        .route("/api/admin/chat-history", get(handlers::admin::chat_history))
        .route("/api/admin/respond", post(handlers::admin::respond_as_agent))
        .route("/api/admin/send-message", post(handlers::admin::respond_as_admin))
        .route("/api/admin/end-session", post(handlers::admin::end_session))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
