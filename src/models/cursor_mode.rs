use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    Draft,
    ViewingHistory,
}

impl CursorMode {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CursorMode::Draft => "draft",
            CursorMode::ViewingHistory => "history",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(CursorMode::Draft),
            "history" => Some(CursorMode::ViewingHistory),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CursorMode::Draft => "Draft",
            CursorMode::ViewingHistory => "Viewing history",
        }
    }
}

/// What happens to the cursor once a report has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportAction {
    Stay,
    Next,
}

impl ExportAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportAction::Stay => "stay",
            ExportAction::Next => "next",
        }
    }
}

/// Which report date a record loaded from history carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryDatePolicy {
    /// Keep the live cursor's report date.
    Keep,
    /// Use the date written in the document header (or the file name).
    Restore,
}
