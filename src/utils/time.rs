//! Time utilities: parsing HH:MM, 12h/24h conversion, worked-time computation.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static TIME_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*([AaPp][Mm])\s*$").expect("valid 12h time regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AM" => Some(Self::Am),
            "PM" => Some(Self::Pm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Net worked time, as printed in the "Total Work Hours" line.
///
/// `hours` is the floored division of the total by 60 while `minutes` keeps
/// the sign of the total, so a negative total of 90 minutes renders as
/// `-2h -30m`. Negative values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDuration {
    pub total_minutes: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl WorkDuration {
    pub fn from_minutes(total: i64) -> Self {
        Self {
            total_minutes: total,
            hours: total.div_euclid(60),
            minutes: total % 60,
        }
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a break window written as `HH:MM-HH:MM`.
pub fn parse_break(s: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let start = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
    let end = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

    Ok((start, end))
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// `(out - in) - (break_end - break_start)`, time-of-day only.
pub fn duration(
    in_t: NaiveTime,
    out_t: NaiveTime,
    break_start: NaiveTime,
    break_end: NaiveTime,
) -> WorkDuration {
    let total_secs = (out_t - in_t).num_seconds() - (break_end - break_start).num_seconds();
    WorkDuration::from_minutes(total_secs.div_euclid(60))
}

/// 24h (`hour` in 0..=23) to `H:MM AM/PM`.
pub fn to_12_hour(hour: u32, minute: u32) -> String {
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, minute, meridiem.as_str())
}

pub fn format_12h(t: NaiveTime) -> String {
    to_12_hour(t.hour(), t.minute())
}

/// Inverse of [`to_12_hour`]. Returns `None` outside 1..=12 / 0..=59.
pub fn to_24_hour(h12: u32, minute: u32, meridiem: Meridiem) -> Option<(u32, u32)> {
    if !(1..=12).contains(&h12) || minute > 59 {
        return None;
    }

    let hour = match (h12, meridiem) {
        (12, Meridiem::Am) => 0,
        (12, Meridiem::Pm) => 12,
        (h, Meridiem::Am) => h,
        (h, Meridiem::Pm) => h + 12,
    };

    Some((hour, minute))
}

/// Parse `H:MM AM`, `HH:MM pm`, ... into a time of day.
pub fn parse_12_hour(s: &str) -> Option<NaiveTime> {
    let caps = TIME_12H.captures(s)?;
    let h12: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let meridiem = Meridiem::from_str_ci(&caps[3])?;

    let (hour, minute) = to_24_hour(h12, minute, meridiem)?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
