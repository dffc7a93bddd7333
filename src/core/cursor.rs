//! The day cursor: which record the user is looking at, and what happens to
//! it on export.
//!
//! Two states only. In `Draft` every edit is autosaved through the
//! [`DraftStore`]; in `ViewingHistory` edits stay in memory so a past report
//! can be re-exported without ever landing in the live draft.

use crate::codec;
use crate::errors::{AppError, AppResult};
use crate::models::cursor_mode::{CursorMode, ExportAction, HistoryDatePolicy};
use crate::models::history_entry::HistoryEntry;
use crate::models::record::WorkLogRecord;
use crate::store::{DraftStore, WorklogStore};
use crate::utils::date::next_day;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Outcome of a successful history load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLoad {
    pub missing: Vec<&'static str>,
}

impl HistoryLoad {
    pub fn is_partial(&self) -> bool {
        !self.missing.is_empty()
    }
}

pub struct DayCursor<D: DraftStore> {
    drafts: D,
    active: WorkLogRecord,
    mode: CursorMode,
    viewing: Option<HistoryEntry>,
}

impl<D: DraftStore> DayCursor<D> {
    /// Start in `Draft` from the last autosaved draft, or from an empty
    /// record for `today` when there is none.
    pub fn open(drafts: D, today: NaiveDate) -> AppResult<Self> {
        let active = drafts
            .load_draft()?
            .unwrap_or_else(|| WorkLogRecord::empty(today));

        Ok(Self {
            drafts,
            active,
            mode: CursorMode::Draft,
            viewing: None,
        })
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    pub fn record(&self) -> &WorkLogRecord {
        &self.active
    }

    /// The history entry on display, if any.
    pub fn viewing(&self) -> Option<&HistoryEntry> {
        self.viewing.as_ref()
    }

    pub fn drafts(&self) -> &D {
        &self.drafts
    }

    /// Apply a field edit. Returns `true` when it was autosaved.
    pub fn edit<F>(&mut self, f: F) -> AppResult<bool>
    where
        F: FnOnce(&mut WorkLogRecord),
    {
        f(&mut self.active);

        match self.mode {
            CursorMode::Draft => {
                self.drafts.save_draft(&self.active)?;
                Ok(true)
            }
            CursorMode::ViewingHistory => Ok(false),
        }
    }

    /// Show a past report. On any failure (missing file, malformed
    /// document) the cursor is left exactly as it was.
    pub fn load_history<S: WorklogStore + ?Sized>(
        &mut self,
        store: &S,
        entry: &HistoryEntry,
        policy: HistoryDatePolicy,
    ) -> AppResult<HistoryLoad> {
        let text = store
            .read_content(&entry.storage_key)?
            .ok_or_else(|| AppError::EntryNotFound(entry.display_label.clone()))?;

        let decoded = codec::decode(&text)?;

        let report_date = match policy {
            HistoryDatePolicy::Keep => self.active.report_date,
            HistoryDatePolicy::Restore => decoded.header_date.unwrap_or(entry.identity),
        };
        let missing = decoded.missing_fields();

        self.active = decoded.into_record(report_date);
        self.mode = CursorMode::ViewingHistory;
        self.viewing = Some(entry.clone());

        Ok(HistoryLoad { missing })
    }

    /// Back to the live draft, dated `today`.
    pub fn go_to_today(&mut self, today: NaiveDate) -> AppResult<()> {
        let mut record = self
            .drafts
            .load_draft()?
            .unwrap_or_else(|| WorkLogRecord::empty(today));
        record.report_date = today;

        self.drafts.save_draft(&record)?;

        self.active = record;
        self.mode = CursorMode::Draft;
        self.viewing = None;
        Ok(())
    }

    /// Encode and persist the active record, then stay or roll over.
    ///
    /// Nothing about the cursor changes unless the write succeeded.
    pub fn export<S: WorklogStore + ?Sized>(
        &mut self,
        store: &S,
        action: ExportAction,
    ) -> AppResult<PathBuf> {
        let content = codec::encode(&self.active)?;
        let path = store.persist(self.active.report_date, &content)?;

        if action == ExportAction::Next {
            let next = WorkLogRecord::empty(next_day(self.active.report_date)?);
            self.drafts.save_draft(&next)?;

            self.active = next;
            self.mode = CursorMode::Draft;
            self.viewing = None;
        }

        Ok(path)
    }
}
