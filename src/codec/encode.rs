use super::{HEADER_PREFIX, HEADER_RULE, SECTION_RULE, TASK_BULLET, TODAY, TOTAL, YESTERDAY};
use crate::errors::AppResult;
use crate::models::record::WorkLogRecord;
use crate::utils::date::format_report_date;
use crate::utils::time::format_12h;
use std::fmt::Write;

/// Render a record in the canonical report layout.
///
/// Fails only with `IncompleteRecord` when a time field is unset. Task lines
/// are written as-is, blank ones included; an empty task list is written as
/// a single bare bullet, like an empty text box would be.
pub fn encode(record: &WorkLogRecord) -> AppResult<String> {
    let times = record.complete_times()?;
    let mut out = String::new();

    // header
    let _ = writeln!(
        out,
        "{} [{}]",
        HEADER_PREFIX,
        format_report_date(record.report_date)
    );
    let _ = writeln!(out, "{}", HEADER_RULE);

    // yesterday
    let _ = writeln!(out, "{}", YESTERDAY);
    let _ = writeln!(out, "IN: {}", format_12h(times.in_time));
    let _ = writeln!(out, "OUT: {}", format_12h(times.out_time));
    let _ = writeln!(
        out,
        "BREAK: {} - {}",
        format_12h(times.break_start),
        format_12h(times.break_end)
    );
    let _ = writeln!(out, "{}", SECTION_RULE);
    push_tasks(&mut out, &record.tasks_completed);
    out.push('\n');

    // today
    let _ = writeln!(out, "{}", TODAY);
    let _ = writeln!(out, "{}", SECTION_RULE);
    push_tasks(&mut out, &record.tasks_planned);
    out.push('\n');

    let _ = writeln!(out, "{}: {}", TOTAL, times.duration());

    Ok(out)
}

fn push_tasks(out: &mut String, tasks: &[String]) {
    if tasks.is_empty() {
        out.push_str(TASK_BULLET);
        out.push('\n');
        return;
    }

    for line in tasks.iter().flat_map(|t| t.split('\n')) {
        out.push_str(TASK_BULLET);
        out.push_str(line);
        out.push('\n');
    }
}
