use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Schema steps, applied in order and recorded in `log` once done.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20251101_0001_create_draft",
        "Created draft table",
        r#"
        CREATE TABLE IF NOT EXISTS draft (
            id              INTEGER PRIMARY KEY CHECK (id = 1),
            report_date     TEXT NOT NULL,
            in_time         TEXT,
            out_time        TEXT,
            break_start     TEXT,
            break_end       TEXT,
            tasks_completed TEXT NOT NULL DEFAULT '[]',
            tasks_planned   TEXT NOT NULL DEFAULT '[]',
            updated_at      TEXT NOT NULL
        );
        "#,
    ),
    (
        "20251101_0002_create_session",
        "Created session table",
        r#"
        CREATE TABLE IF NOT EXISTS session (
            id          INTEGER PRIMARY KEY CHECK (id = 1),
            mode        TEXT NOT NULL DEFAULT 'draft' CHECK (mode IN ('draft','history')),
            history_key TEXT
        );
        "#,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch(sql)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![Local::now().to_rfc3339(), version, message],
        )?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
