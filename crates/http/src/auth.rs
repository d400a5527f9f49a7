//! Operator authentication seam.
//!
//! The relay only needs an authenticated-actor contract on the admin
//! routes; the full credential/login surface lives outside this service.
//! A static bearer token, configured at startup, stands in for it.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::api_error::ApiError;
use crate::AppState;

/// Extractor proving the caller presented the operator token.
///
/// Listed before the body extractor in admin handlers, so unauthenticated
/// requests are rejected before any work happens.
pub struct OperatorAuth;

impl FromRequestParts<Arc<AppState>> for OperatorAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.operator_token.as_deref() else {
            return Err(ApiError::Unauthorized("operator access is not configured".to_owned()));
        };
        let presented = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match presented {
            Some(token) if token == expected => Ok(Self),
            _ => Err(ApiError::Unauthorized("authentication required".to_owned())),
        }
    }
}
