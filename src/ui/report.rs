//! Human-readable rendering of the active record.

use crate::models::cursor_mode::CursorMode;
use crate::models::history_entry::HistoryEntry;
use crate::models::record::WorkLogRecord;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, UNSET, color_for_total, colorize_optional};
use crate::utils::date::format_report_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_12h, format_hhmm};
use chrono::NaiveTime;

const TASK_WIDTH: usize = 72;

fn time_row(label: &str, t: Option<NaiveTime>) -> Vec<String> {
    vec![
        label.to_string(),
        t.map(format_hhmm).unwrap_or_else(|| UNSET.to_string()),
        t.map(format_12h).unwrap_or_default(),
    ]
}

fn print_tasks(title: &str, tasks: &[String]) {
    println!("{}:", title);
    if tasks.is_empty() {
        println!("  (none)");
        return;
    }
    for task in tasks {
        let wrapped = textwrap::wrap(task, TASK_WIDTH - 4);
        for (i, line) in wrapped.iter().enumerate() {
            let bullet = if i == 0 { "*" } else { " " };
            println!("  {} {}", bullet, line);
        }
    }
}

pub fn print_record(record: &WorkLogRecord, mode: CursorMode, viewing: Option<&HistoryEntry>) {
    header(format!(
        "Work Status {} ({})",
        format_report_date(record.report_date),
        record.report_date.format("%A")
    ));

    match viewing {
        Some(entry) => println!("🧭 Mode: {} [{}]", mode.label(), entry.storage_key),
        None => println!("🧭 Mode: {}", mode.label()),
    }
    println!();

    let mut table = Table::new(vec![
        Column::new("Field", 12),
        Column::new("24h", 6),
        Column::new("12h", 9),
    ]);
    table.add_row(time_row("IN", record.in_time));
    table.add_row(time_row("OUT", record.out_time));
    table.add_row(time_row("BREAK start", record.break_start));
    table.add_row(time_row("BREAK end", record.break_end));
    print!("{}", table.render());

    match record.total() {
        Some(total) => println!(
            "\n⏱️  Total Work Hours: {}{}{}",
            color_for_total(total.total_minutes),
            total,
            RESET
        ),
        None => println!("\n⏱️  Total Work Hours: {}", colorize_optional(None)),
    }
    println!();

    print_tasks("Tasks worked on", &record.tasks_completed);
    print_tasks("Will work on", &record.tasks_planned);
}
