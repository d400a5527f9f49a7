//! Typed error enum for the service layer.

use ozchat_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage failures with input policing.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (empty session id or text).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Operation referenced a session that does not exist and does not
    /// auto-create it.
    #[error("not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },
}

impl ServiceError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::NotFound { entity: "session", id: id.into() }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
