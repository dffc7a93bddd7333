//! SQLite-backed autosave of the in-progress draft (single row).

use crate::errors::{AppError, AppResult};
use crate::models::record::WorkLogRecord;
use crate::store::DraftStore;
use crate::utils::time::{format_hhmm, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteDraftStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteDraftStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

type DraftRow = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    String,
    String,
);

fn column_time(value: Option<String>) -> AppResult<Option<NaiveTime>> {
    match value {
        Some(s) => parse_time(&s).map(Some).ok_or(AppError::InvalidTime(s)),
        None => Ok(None),
    }
}

impl DraftStore for SqliteDraftStore<'_> {
    fn load_draft(&self) -> AppResult<Option<WorkLogRecord>> {
        let row: Option<DraftRow> = self
            .conn
            .query_row(
                "SELECT report_date, in_time, out_time, break_start, break_end,
                        tasks_completed, tasks_planned
                 FROM draft WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                    ))
                },
            )
            .optional()?;

        let Some((date, in_t, out_t, b_start, b_end, done, planned)) = row else {
            return Ok(None);
        };

        let report_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date.clone()))?;

        Ok(Some(WorkLogRecord {
            report_date,
            in_time: column_time(in_t)?,
            out_time: column_time(out_t)?,
            break_start: column_time(b_start)?,
            break_end: column_time(b_end)?,
            tasks_completed: serde_json::from_str(&done)?,
            tasks_planned: serde_json::from_str(&planned)?,
        }))
    }

    fn save_draft(&self, record: &WorkLogRecord) -> AppResult<()> {
        let done = serde_json::to_string(&record.tasks_completed)?;
        let planned = serde_json::to_string(&record.tasks_planned)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO draft
                (id, report_date, in_time, out_time, break_start, break_end,
                 tasks_completed, tasks_planned, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.report_date.format("%Y-%m-%d").to_string(),
                record.in_time.map(format_hhmm),
                record.out_time.map(format_hhmm),
                record.break_start.map(format_hhmm),
                record.break_end.map(format_hhmm),
                done,
                planned,
                Local::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }
}
