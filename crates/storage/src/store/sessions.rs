use chrono::Utc;
use ozchat_core::{Session, SessionOverview};
use rusqlite::params;

use super::{Store, get_conn, parse_ts};
use crate::StorageError;

impl Store {
    /// Insert the session row if it does not already exist.
    ///
    /// Idempotent: a losing concurrent writer's insert is a no-op, never a
    /// visible error. `created_at` and `last_active` both start at now.
    pub fn ensure_session(&self, id: &str) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT OR IGNORE INTO sessions (id, is_active, created_at, last_active)
             VALUES (?1, 1, ?2, ?2)",
            params![id, now],
        )?;
        Ok(())
    }

    pub fn get_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, is_active, created_at, last_active FROM sessions WHERE id = ?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Session {
                id: row.get(0)?,
                is_active: row.get(1)?,
                created_at: parse_ts(&row.get::<_, String>(2)?)?,
                last_active: parse_ts(&row.get::<_, String>(3)?)?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Bump `last_active` to now. No-op for unknown ids: touch never
    /// creates a session as a side effect.
    pub fn touch_session(&self, id: &str) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "UPDATE sessions SET last_active = ?1 WHERE id = ?2",
            params![Utc::now().to_rfc3339(), id],
        )?;
        Ok(())
    }

    /// Soft-end a session. Returns `true` if a row was flipped; message
    /// visibility is unaffected.
    pub fn end_session(&self, id: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let affected =
            conn.execute("UPDATE sessions SET is_active = 0 WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// All active sessions with message count and most recent message,
    /// most recently active first.
    pub fn list_active_sessions(&self) -> Result<Vec<SessionOverview>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT
                 s.id,
                 s.created_at,
                 s.last_active,
                 COUNT(m.id) AS message_count,
                 (SELECT text FROM messages
                  WHERE session_id = s.id
                  ORDER BY timestamp DESC, id DESC LIMIT 1) AS last_message
             FROM sessions s
             LEFT JOIN messages m ON m.session_id = s.id
             WHERE s.is_active = 1
             GROUP BY s.id
             ORDER BY s.last_active DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SessionOverview {
                id: row.get(0)?,
                created_at: parse_ts(&row.get::<_, String>(1)?)?,
                last_active: parse_ts(&row.get::<_, String>(2)?)?,
                message_count: row.get(3)?,
                last_message: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
