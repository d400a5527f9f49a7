//! Migration v2: covering indexes for the cursor query and the admin
//! dashboard listing.

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_messages_session_cursor ON messages(session_id, id);
CREATE INDEX IF NOT EXISTS idx_sessions_active ON sessions(is_active, last_active);
";
