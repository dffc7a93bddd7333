use super::{HEADER_PREFIX, TASK_BULLET, TODAY, TOTAL, YESTERDAY};
use crate::errors::{AppError, AppResult};
use crate::models::record::WorkLogRecord;
use crate::utils::date::parse_report_date;
use crate::utils::time::parse_12_hour;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s*\[\s*(\d{{2}}-\d{{2}}-\d{{4}})\s*\]", HEADER_PREFIX))
        .expect("valid header regex")
});

/// Fields recovered from a report. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedRecord {
    pub header_date: Option<NaiveDate>,
    pub in_time: Option<NaiveTime>,
    pub out_time: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub tasks_completed: Vec<String>,
    pub tasks_planned: Vec<String>,
    pub has_yesterday: bool,
    pub has_today: bool,
}

impl DecodedRecord {
    /// Fields the document did not provide, in document order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_yesterday {
            missing.push("Yesterday section");
        }
        for (name, t) in [
            ("IN", self.in_time),
            ("OUT", self.out_time),
            ("BREAK start", self.break_start),
            ("BREAK end", self.break_end),
        ] {
            if t.is_none() {
                missing.push(name);
            }
        }
        if !self.has_today {
            missing.push("Today section");
        }
        missing
    }

    /// A degraded but usable decode: the caller renders the gaps as blanks.
    pub fn is_partial(&self) -> bool {
        !self.missing_fields().is_empty()
    }

    pub fn into_record(self, report_date: NaiveDate) -> WorkLogRecord {
        WorkLogRecord {
            report_date,
            in_time: self.in_time,
            out_time: self.out_time,
            break_start: self.break_start,
            break_end: self.break_end,
            tasks_completed: self.tasks_completed,
            tasks_planned: self.tasks_planned,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Yesterday,
    Today,
    Total,
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Header(Option<NaiveDate>),
    Marker(Marker),
    In(Option<NaiveTime>),
    Out(Option<NaiveTime>),
    Break(Option<NaiveTime>, Option<NaiveTime>),
    Task(&'a str),
    Noise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Completed,
    Planned,
    Closed,
}

/// Best-effort decode of a report.
///
/// Only a document with neither a `Yesterday` nor a `Today` section is
/// rejected (`MalformedDocument`); everything else yields whatever could be
/// recognised.
pub fn decode(text: &str) -> AppResult<DecodedRecord> {
    let tokens: Vec<Token<'_>> = text.lines().map(tokenize).collect();
    assemble(tokens)
}

// ---------------------------
// Pass 1: tokenizer
// ---------------------------

fn tokenize(line: &str) -> Token<'_> {
    let trimmed = line.trim();

    // bullet prima di tutto: un task può contenere "Today" o "IN:"
    if trimmed.starts_with(TASK_BULLET) {
        let start = line.trim_start();
        return Token::Task(&start[TASK_BULLET.len()..]);
    }

    if let Some(caps) = HEADER.captures(trimmed) {
        return Token::Header(parse_report_date(&caps[1]));
    }

    // marcatori cercati ovunque nella riga: "## Today", "**Today**", "=== Today ==="
    if trimmed.contains(TOTAL) {
        return Token::Marker(Marker::Total);
    }
    if trimmed.contains(YESTERDAY) {
        return Token::Marker(Marker::Yesterday);
    }
    if trimmed.contains(TODAY) {
        return Token::Marker(Marker::Today);
    }

    if let Some(rest) = trimmed.strip_prefix("IN:") {
        return Token::In(parse_12_hour(rest));
    }
    if let Some(rest) = trimmed.strip_prefix("OUT:") {
        return Token::Out(parse_12_hour(rest));
    }
    if let Some(rest) = trimmed.strip_prefix("BREAK:") {
        return match rest.split_once('-') {
            Some((start, end)) => Token::Break(parse_12_hour(start), parse_12_hour(end)),
            None => Token::Break(None, None),
        };
    }

    Token::Noise
}

// ---------------------------
// Pass 2: field assembler
// ---------------------------

fn assemble(tokens: Vec<Token<'_>>) -> AppResult<DecodedRecord> {
    let mut rec = DecodedRecord::default();
    let mut section = Section::Preamble;
    let mut seen_total = false;

    for token in tokens {
        match token {
            Token::Header(date) => {
                if rec.header_date.is_none() {
                    rec.header_date = date;
                }
            }
            Token::Marker(Marker::Yesterday) if !rec.has_yesterday => {
                rec.has_yesterday = true;
                section = Section::Completed;
            }
            Token::Marker(Marker::Today) if !rec.has_today => {
                rec.has_today = true;
                section = Section::Planned;
            }
            Token::Marker(Marker::Total) if !seen_total => {
                seen_total = true;
                section = Section::Closed;
            }
            Token::Marker(_) | Token::Noise => {}
            Token::In(t) => rec.in_time = rec.in_time.or(t),
            Token::Out(t) => rec.out_time = rec.out_time.or(t),
            Token::Break(start, end) => {
                rec.break_start = rec.break_start.or(start);
                rec.break_end = rec.break_end.or(end);
            }
            Token::Task(task) => match section {
                Section::Completed => rec.tasks_completed.push(task.to_string()),
                Section::Planned => rec.tasks_planned.push(task.to_string()),
                Section::Preamble | Section::Closed => {}
            },
        }
    }

    if !rec.has_yesterday && !rec.has_today {
        return Err(AppError::MalformedDocument);
    }

    Ok(rec)
}
