//! Persistence collaborators used by the day cursor and the history catalog.

pub mod fs;

use crate::errors::AppResult;
use crate::models::record::WorkLogRecord;
use chrono::NaiveDate;
use std::path::PathBuf;

pub use fs::FsWorklogStore;

/// Durable home of exported reports.
pub trait WorklogStore {
    /// Write every variant of the report for `date`, all or nothing.
    /// Returns the location of the primary (text) file.
    fn persist(&self, date: NaiveDate, content: &str) -> AppResult<PathBuf>;

    /// Raw entry names of the storage root, unparsed.
    fn list_entries(&self) -> AppResult<Vec<String>>;

    /// Content stored under `key`, `None` when there is nothing there.
    fn read_content(&self, key: &str) -> AppResult<Option<String>>;
}

/// Local autosave of the in-progress draft, independent from the history.
pub trait DraftStore {
    fn load_draft(&self) -> AppResult<Option<WorkLogRecord>>;
    fn save_draft(&self, record: &WorkLogRecord) -> AppResult<()>;
}
