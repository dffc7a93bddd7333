use crate::errors::{AppError, AppResult};
use crate::history::naming::{Variant, parse_file_name};
use crate::models::history_entry::HistoryEntry;
use crate::store::WorklogStore;
use crate::utils::date::format_report_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Index of past reports, most recent first, one entry per date.
#[derive(Debug, Clone, Default)]
pub struct HistoryCatalog {
    entries: Vec<HistoryEntry>,
}

impl HistoryCatalog {
    /// List the storage root and index every file following the naming
    /// convention. Other files are skipped without error.
    pub fn scan<S: WorklogStore + ?Sized>(store: &S) -> AppResult<Self> {
        let names = store.list_entries()?;
        Ok(Self::from_names(names))
    }

    pub fn from_names<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        // date → (variante, nome file); vince la variante "minore" (txt)
        let mut by_date: BTreeMap<NaiveDate, (Variant, String)> = BTreeMap::new();

        for name in names {
            let name = name.as_ref();
            let Some((date, variant)) = parse_file_name(name) else {
                continue;
            };

            let replace = match by_date.get(&date) {
                Some((current, _)) => variant < *current,
                None => true,
            };
            if replace {
                by_date.insert(date, (variant, name.to_string()));
            }
        }

        let entries = by_date
            .into_iter()
            .rev()
            .map(|(date, (_, key))| HistoryEntry {
                identity: date,
                display_label: format_report_date(date),
                storage_key: key,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, identity: NaiveDate) -> AppResult<&HistoryEntry> {
        self.entries
            .iter()
            .find(|e| e.identity == identity)
            .ok_or_else(|| AppError::EntryNotFound(format_report_date(identity)))
    }

    /// Storage key of the report for `identity`.
    pub fn resolve(&self, identity: NaiveDate) -> AppResult<&str> {
        self.entry(identity).map(|e| e.storage_key.as_str())
    }
}
