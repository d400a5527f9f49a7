//! Typed API error for HTTP handlers.
//!
//! Every failure renders as `{"success": false, "message": ...}` with a
//! matching status code, so the browser client's `success` check keeps
//! working. Internal errors are logged server-side and never leak detail
//! to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ozchat_service::ServiceError;

/// API error with HTTP status code and human-readable message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing/empty required field.
    BadRequest(String),
    /// 401 Unauthorized: operator operation without a valid actor.
    Unauthorized(String),
    /// 404 Not Found: referenced session does not exist.
    NotFound(String),
    /// 500 Internal Server Error: store failure etc. Details logged,
    /// not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"success": false, "message": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}
