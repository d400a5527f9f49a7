//! SQLite store implementation.
//!
//! All methods here are synchronous; async callers go through the traits
//! in [`crate::traits`], which hop onto the blocking pool.

mod messages;
mod sessions;
mod stats;

use chrono::{DateTime, Utc};
use ozchat_core::env_config::env_parse_with_default;
use ozchat_core::{Message, SenderRole};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::StorageError;
use crate::migrations;

pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Handle to the shared relational store.
///
/// Cheap to clone; every component receives one at construction instead of
/// reaching for ambient global state.
#[derive(Clone, Debug)]
pub struct Store {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Parse an RFC3339 timestamp column.
pub(crate) fn parse_ts(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s).map(|d| d.with_timezone(&Utc)).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a sender column into the closed role set.
pub(crate) fn parse_sender(s: &str) -> rusqlite::Result<SenderRole> {
    s.parse().map_err(|e: ozchat_core::UnknownSenderRole| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Map a `(id, session_id, sender, text, timestamp)` row to a [`Message`].
pub(crate) fn row_to_message(row: &rusqlite::Row<'_>) -> rusqlite::Result<Message> {
    Ok(Message {
        id: row.get(0)?,
        session_id: row.get(1)?,
        sender: parse_sender(&row.get::<_, String>(2)?)?,
        text: row.get(3)?,
        timestamp: parse_ts(&row.get::<_, String>(4)?)?,
    })
}

fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("OZCHAT_DB_POOL_SIZE", 8)
}

impl Store {
    /// Open (or create) the database at `db_path` and run migrations.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(pool_size, "store initialized with connection pool");

        Ok(Self { pool })
    }
}
