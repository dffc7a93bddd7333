use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Report dates are always rendered day first, zero-padded.
pub const REPORT_DATE_FMT: &str = "%d-%m-%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_report_date(d: NaiveDate) -> String {
    d.format(REPORT_DATE_FMT).to_string()
}

pub fn parse_report_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), REPORT_DATE_FMT).ok()
}

/// CLI input: accepts DD-MM-YYYY as well as ISO YYYY-MM-DD.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_report_date(s).or_else(|| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

pub fn next_day(d: NaiveDate) -> AppResult<NaiveDate> {
    d.succ_opt()
        .ok_or_else(|| AppError::InvalidDate(format!("no day after {}", d)))
}
