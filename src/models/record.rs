use crate::errors::{AppError, AppResult};
use crate::utils::time::{self, WorkDuration};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One day of work status: times are kept in 24h form, unset while the
/// draft is still being filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogRecord {
    pub report_date: NaiveDate,
    pub in_time: Option<NaiveTime>,
    pub out_time: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub tasks_completed: Vec<String>,
    pub tasks_planned: Vec<String>,
}

/// The four time fields of a record that is ready to be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteTimes {
    pub in_time: NaiveTime,
    pub out_time: NaiveTime,
    pub break_start: NaiveTime,
    pub break_end: NaiveTime,
}

impl CompleteTimes {
    pub fn duration(&self) -> WorkDuration {
        time::duration(self.in_time, self.out_time, self.break_start, self.break_end)
    }
}

impl WorkLogRecord {
    pub fn empty(report_date: NaiveDate) -> Self {
        Self {
            report_date,
            in_time: None,
            out_time: None,
            break_start: None,
            break_end: None,
            tasks_completed: Vec::new(),
            tasks_planned: Vec::new(),
        }
    }

    /// True when no time or task field has been filled in.
    pub fn is_blank(&self) -> bool {
        self.missing_times().len() == 4
            && self.tasks_completed.is_empty()
            && self.tasks_planned.is_empty()
    }

    /// Names of the time fields still unset, in document order.
    pub fn missing_times(&self) -> Vec<&'static str> {
        [
            ("in", self.in_time),
            ("out", self.out_time),
            ("break start", self.break_start),
            ("break end", self.break_end),
        ]
        .into_iter()
        .filter(|(_, t)| t.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn complete_times(&self) -> AppResult<CompleteTimes> {
        Ok(CompleteTimes {
            in_time: self.in_time.ok_or(AppError::IncompleteRecord("in"))?,
            out_time: self.out_time.ok_or(AppError::IncompleteRecord("out"))?,
            break_start: self
                .break_start
                .ok_or(AppError::IncompleteRecord("break start"))?,
            break_end: self
                .break_end
                .ok_or(AppError::IncompleteRecord("break end"))?,
        })
    }

    /// Worked time, available only once every time field is set.
    pub fn total(&self) -> Option<WorkDuration> {
        self.complete_times().ok().map(|t| t.duration())
    }
}
