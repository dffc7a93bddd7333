use chrono::NaiveDate;
use serde::Serialize;

/// A past report, as seen through its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub identity: NaiveDate,
    pub display_label: String,
    pub storage_key: String,
}
