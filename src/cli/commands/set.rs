use crate::cli::commands::export::run_export;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::ui::report::print_record;
use crate::utils::date;
use crate::utils::time::{parse_break, parse_optional_time};

/// Edit the active record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date: raw_date,
        start,
        end,
        brk,
        done,
        plan,
        clear_done,
        clear_plan,
        export,
    } = cmd
    {
        //
        // 1. Parse everything before touching the record
        //
        let report_date = match raw_date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };
        let in_time = parse_optional_time(start.as_ref())?;
        let out_time = parse_optional_time(end.as_ref())?;
        let break_window = match brk {
            Some(s) => Some(parse_break(s)?),
            None => None,
        };

        //
        // 2. Apply the edit through the cursor
        //
        let ws = Workspace::open(cfg)?;
        let mut cursor = ws.cursor()?;

        let autosaved = cursor.edit(|r| {
            if let Some(d) = report_date {
                r.report_date = d;
            }
            if in_time.is_some() {
                r.in_time = in_time;
            }
            if out_time.is_some() {
                r.out_time = out_time;
            }
            if let Some((bs, be)) = break_window {
                r.break_start = Some(bs);
                r.break_end = Some(be);
            }
            if *clear_done {
                r.tasks_completed.clear();
            }
            if *clear_plan {
                r.tasks_planned.clear();
            }
            r.tasks_completed.extend(done.iter().cloned());
            r.tasks_planned.extend(plan.iter().cloned());
        })?;

        if !autosaved && export.is_none() {
            warning(
                "Viewing a history report: edits are not saved to the draft. \
                 Use --export to write them out in the same run.",
            );
        }

        //
        // 3. Optional export
        //
        if let Some(action) = export {
            run_export(&ws, &mut cursor, *action)?;
        }

        print_record(cursor.record(), cursor.mode(), cursor.viewing());
    }

    Ok(())
}
