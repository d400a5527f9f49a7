use chrono::Utc;
use ozchat_core::{PendingConversation, SenderRole};
use rusqlite::params;

use super::{Store, get_conn, parse_ts, row_to_message};
use crate::StorageError;

impl Store {
    /// Append a message and return the store-assigned ascending id.
    ///
    /// Does not touch the session: callers orchestrating a visitor send
    /// bump `last_active` themselves.
    pub fn append_message(
        &self,
        session_id: &str,
        sender: SenderRole,
        text: &str,
    ) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO messages (session_id, sender, text, timestamp) VALUES (?1, ?2, ?3, ?4)",
            params![session_id, sender.as_str(), text, Utc::now().to_rfc3339()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Full ordered history of a session, oldest first. Always a fresh
    /// read of current state.
    pub fn history(&self, session_id: &str) -> Result<Vec<ozchat_core::Message>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, session_id, sender, text, timestamp FROM messages
             WHERE session_id = ?1
             ORDER BY timestamp ASC, id ASC",
        )?;
        let rows = stmt.query_map(params![session_id], row_to_message)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Cursor query: messages with `id > after_id`, or the full history
    /// when no cursor is given. Same ordering as [`Store::history`].
    pub fn messages_since(
        &self,
        session_id: &str,
        after_id: Option<i64>,
    ) -> Result<Vec<ozchat_core::Message>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let rows = if let Some(after_id) = after_id {
            let mut stmt = conn.prepare(
                "SELECT id, session_id, sender, text, timestamp FROM messages
                 WHERE session_id = ?1 AND id > ?2
                 ORDER BY timestamp ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![session_id, after_id], row_to_message)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = conn.prepare(
                "SELECT id, session_id, sender, text, timestamp FROM messages
                 WHERE session_id = ?1
                 ORDER BY timestamp ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![session_id], row_to_message)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
    }

    /// Operator inbox: for every active session, its most recent visitor
    /// message plus running per-role counts. Newest first.
    pub fn pending_for_operator(&self) -> Result<Vec<PendingConversation>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT
                 m.session_id,
                 m.id,
                 m.text,
                 m.timestamp,
                 (SELECT COUNT(*) FROM messages
                  WHERE session_id = s.id AND sender = 'user') AS user_messages,
                 (SELECT COUNT(*) FROM messages
                  WHERE session_id = s.id AND sender IN ('ai', 'admin')) AS responses
             FROM sessions s
             JOIN messages m ON m.id = (
                 SELECT id FROM messages
                 WHERE session_id = s.id AND sender = 'user'
                 ORDER BY timestamp DESC, id DESC LIMIT 1)
             WHERE s.is_active = 1
             ORDER BY m.timestamp DESC, m.id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let user_messages: u32 = row.get(4)?;
            let responses: u32 = row.get(5)?;
            Ok(PendingConversation {
                session_id: row.get(0)?,
                message_id: row.get(1)?,
                text: row.get(2)?,
                timestamp: parse_ts(&row.get::<_, String>(3)?)?,
                user_messages,
                responses,
                needs_response: responses < user_messages,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
