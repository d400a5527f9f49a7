use chrono::{NaiveTime, Utc};
use ozchat_core::DashboardStats;
use rusqlite::params;

use super::{Store, get_conn};
use crate::StorageError;

impl Store {
    /// Aggregate counters for the admin dashboard: total session count
    /// (active and ended) and messages appended since UTC midnight.
    pub fn dashboard_stats(&self) -> Result<DashboardStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        let total_sessions: u32 =
            conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;

        // RFC3339 strings with a fixed UTC offset compare lexicographically.
        let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc().to_rfc3339();
        let messages_today: u32 = conn.query_row(
            "SELECT COUNT(*) FROM messages WHERE timestamp >= ?1",
            params![midnight],
            |row| row.get(0),
        )?;

        Ok(DashboardStats { total_sessions, messages_today })
    }
}
