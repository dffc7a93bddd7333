//! File naming convention of exported reports: `Work_Status_DD-MM-YYYY.<ext>`.

use crate::utils::date::format_report_date;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const FILE_PREFIX: &str = "Work_Status_";

static FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Work_Status_(\d{2})-(\d{2})-(\d{4})\.(txt|md)$").expect("valid file name regex")
});

/// The two byte-identical variants written for every report.
/// Ordering is the tie-break preference: the text file wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Variant {
    Text,
    Markdown,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Text, Variant::Markdown];

    pub fn extension(&self) -> &'static str {
        match self {
            Variant::Text => "txt",
            Variant::Markdown => "md",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(Variant::Text),
            "md" => Some(Variant::Markdown),
            _ => None,
        }
    }
}

pub fn file_name(date: NaiveDate, variant: Variant) -> String {
    format!(
        "{}{}.{}",
        FILE_PREFIX,
        format_report_date(date),
        variant.extension()
    )
}

/// Parse a file name back into its date. Foreign names and impossible
/// dates (e.g. `31-02-2025`) give `None`.
pub fn parse_file_name(name: &str) -> Option<(NaiveDate, Variant)> {
    let caps = FILE_NAME.captures(name)?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let variant = Variant::from_extension(&caps[4])?;

    NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, variant))
}
