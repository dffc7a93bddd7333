use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring the schema up to date and make sure the cursor session row exists,
/// so a fresh database always starts in draft mode.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    conn.execute(
        "INSERT OR IGNORE INTO session (id, mode, history_key) VALUES (1, 'draft', NULL)",
        [],
    )?;
    Ok(())
}
