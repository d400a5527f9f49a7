use std::sync::Arc;

use ozchat_core::constants::{SESSION_TOKEN_LEN, SESSION_TOKEN_PREFIX};
use ozchat_storage::ChatStore;
use rand::Rng;

use crate::error::ServiceError;

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Explicit session lifecycle, used by the visitor page before the first
/// message exists.
pub struct SessionService {
    store: Arc<dyn ChatStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// Create a session, generating a short opaque token when the caller
    /// supplied no id. A duplicate caller-supplied id is accepted as
    /// already-existing, never duplicated. Returns the effective id.
    pub async fn create_session(
        &self,
        requested_id: Option<String>,
    ) -> Result<String, ServiceError> {
        let id = requested_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_session_token);
        self.store.ensure_session(&id).await?;
        Ok(id)
    }

    /// Soft-end a session; its history stays readable.
    pub async fn end_session(&self, session_id: &str) -> Result<(), ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::invalid("session id is required"));
        }
        if self.store.end_session(session_id).await? {
            Ok(())
        } else {
            Err(ServiceError::session_not_found(session_id))
        }
    }
}

/// `session_` plus nine random lowercase alphanumerics, matching the token
/// shape the browser client generates for itself.
fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_TOKEN_LEN)
        .map(|_| char::from(TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())]))
        .collect();
    format!("{SESSION_TOKEN_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_store;

    #[tokio::test]
    async fn create_with_explicit_id_uses_it() {
        let (store, _temp_dir) = test_store();
        let sessions = SessionService::new(Arc::clone(&store));

        let id = sessions.create_session(Some("chosen".to_owned())).await.unwrap();
        assert_eq!(id, "chosen");
        assert!(store.get_session("chosen").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn create_without_id_generates_token() {
        let (store, _temp_dir) = test_store();
        let sessions = SessionService::new(Arc::clone(&store));

        let id = sessions.create_session(None).await.unwrap();
        assert!(id.starts_with(SESSION_TOKEN_PREFIX));
        assert_eq!(id.len(), SESSION_TOKEN_PREFIX.len() + SESSION_TOKEN_LEN);
        assert!(store.get_session(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_create_is_accepted_as_existing() {
        let (store, _temp_dir) = test_store();
        let sessions = SessionService::new(Arc::clone(&store));

        let first = sessions.create_session(Some("dup".to_owned())).await.unwrap();
        let created = store.get_session("dup").await.unwrap().unwrap().created_at;

        let second = sessions.create_session(Some("dup".to_owned())).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.get_session("dup").await.unwrap().unwrap().created_at, created);
    }

    #[tokio::test]
    async fn end_unknown_session_is_not_found() {
        let (store, _temp_dir) = test_store();
        let sessions = SessionService::new(store);

        let err = sessions.end_session("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
