use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a freshly opened connection for the record store.
///
/// A second `rcheckin` process holding the file briefly (e.g. a `list` while
/// a student checks in) waits instead of failing with SQLITE_BUSY. Tables
/// come from the migration engine only.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(2))?;
    run_pending_migrations(conn)?;

    let kv_ready: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv'",
        [],
        |row| row.get(0),
    )?;
    if kv_ready == 0 {
        return Err(AppError::Other("kv table missing after migrations".into()));
    }

    Ok(())
}
