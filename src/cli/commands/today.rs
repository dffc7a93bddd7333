use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::report::print_record;
use crate::utils::date::{self, format_report_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Today) {
        let ws = Workspace::open(cfg)?;
        let mut cursor = ws.cursor()?;

        cursor.go_to_today(date::today())?;
        ws.save_cursor(&cursor)?;
        ws.log(
            "today",
            &format_report_date(cursor.record().report_date),
            "Back to the live draft",
        );

        print_record(cursor.record(), cursor.mode(), cursor.viewing());
    }
    Ok(())
}
