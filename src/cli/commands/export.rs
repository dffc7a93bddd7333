use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace::{Cursor, Workspace};
use crate::errors::AppResult;
use crate::models::cursor_mode::ExportAction;
use crate::ui::messages::{info, success};
use crate::utils::date::format_report_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { next, stay } = cmd {
        let action = if *next {
            ExportAction::Next
        } else if *stay {
            ExportAction::Stay
        } else {
            cfg.default_action
        };

        let ws = Workspace::open(cfg)?;
        let mut cursor = ws.cursor()?;
        run_export(&ws, &mut cursor, action)?;
    }
    Ok(())
}

/// Export through the cursor, log it and remember the resulting state.
pub(crate) fn run_export(
    ws: &Workspace,
    cursor: &mut Cursor<'_>,
    action: ExportAction,
) -> AppResult<()> {
    let exported = format_report_date(cursor.record().report_date);

    let path = match cursor.export(&ws.store, action) {
        Ok(p) => p,
        Err(e) => {
            ws.log("export_failed", &exported, &e.to_string());
            return Err(e);
        }
    };

    ws.log(
        "export",
        &exported,
        &format!("Exported to {} ({})", path.display(), action.as_str()),
    );
    success(format!("Work log exported: {}", path.display()));

    if action == ExportAction::Next {
        info(format!(
            "Moved to the next day: {}",
            format_report_date(cursor.record().report_date)
        ));
    }

    ws.save_cursor(cursor)
}
