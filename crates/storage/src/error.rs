//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (pool exhaustion, SQL errors)
//! instead of downcasting opaque boxes. Absence is not an error here:
//! lookups return `Option`, and not-found policy lives above storage.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / constraint / driver failure. Row-mapping failures (bad
    /// timestamp or sender text) surface here as conversion errors.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Could not check a connection out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A `spawn_blocking` task was cancelled or panicked.
    #[error("blocking task join error: {0}")]
    Join(String),
}
