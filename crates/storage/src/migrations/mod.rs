//! Versioned schema migrations, gated on SQLite's `user_version` pragma.

mod v1;
mod v2;

use rusqlite::Connection;

pub(crate) const SCHEMA_VERSION: i32 = 2;

/// Bring the schema up to [`SCHEMA_VERSION`]. Connection pragmas (WAL,
/// busy timeout) are the pool initializer's job, not ours.
pub(crate) fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: sessions and messages tables");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: cursor and dashboard indexes");
        conn.execute_batch(v2::SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
