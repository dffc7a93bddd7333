//! Cursor state carried across CLI invocations.

use crate::errors::AppResult;
use crate::models::cursor_mode::CursorMode;
use rusqlite::{Connection, OptionalExtension, params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub mode: CursorMode,
    pub history_key: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: CursorMode::Draft,
            history_key: None,
        }
    }
}

pub fn load_session(conn: &Connection) -> AppResult<SessionState> {
    let row: Option<(String, Option<String>)> = conn
        .query_row(
            "SELECT mode, history_key FROM session WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    Ok(match row {
        Some((mode, key)) => SessionState {
            mode: CursorMode::from_db_str(&mode).unwrap_or(CursorMode::Draft),
            history_key: key,
        },
        None => SessionState::default(),
    })
}

pub fn save_session(conn: &Connection, state: &SessionState) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO session (id, mode, history_key) VALUES (1, ?1, ?2)",
        params![state.mode.to_db_str(), state.history_key],
    )?;
    Ok(())
}
