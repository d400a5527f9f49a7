//! Storage layer for ozchat.
//!
//! SQLite behind an r2d2 connection pool. The synchronous query methods
//! live on [`Store`]; async callers go through the narrow [`SessionStore`]
//! and [`MessageStore`] traits, which delegate to the blocking pool.

mod error;
mod migrations;
mod store;
mod store_async;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use store::Store;
pub use traits::{ChatStore, MessageStore, SessionStore};
