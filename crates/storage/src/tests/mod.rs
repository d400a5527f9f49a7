//! Test utilities and module declarations for storage tests.

use tempfile::TempDir;

use crate::Store;


pub fn create_test_store() -> (Store, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = Store::new(&db_path).unwrap();
    (store, temp_dir)
}

#[test]
fn connection_pragmas_survive_initialization() {
    let (store, _temp_dir) = create_test_store();
    let conn = store.pool.get().unwrap();

    // The pool initializer is the single writer of these; migrations must
    // not override them.
    let timeout: i32 = conn.query_row("PRAGMA busy_timeout", [], |row| row.get(0)).unwrap();
    assert_eq!(timeout, 30_000);

    let journal: String = conn.query_row("PRAGMA journal_mode", [], |row| row.get(0)).unwrap();
    assert_eq!(journal.to_lowercase(), "wal");
}
