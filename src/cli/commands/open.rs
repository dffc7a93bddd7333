use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, warning};
use crate::ui::report::print_record;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { date: raw } = cmd {
        let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;

        let ws = Workspace::open(cfg)?;
        let mut cursor = ws.cursor()?;
        let catalog = ws.catalog()?;
        let entry = catalog.entry(d)?.clone();

        match cursor.load_history(&ws.store, &entry, ws.policy) {
            Ok(load) => {
                if load.is_partial() {
                    warning(format!(
                        "{} was only partially readable, missing: {}",
                        entry.storage_key,
                        load.missing.join(", ")
                    ));
                }
                ws.log("open", &entry.storage_key, "History report opened");
                ws.save_cursor(&cursor)?;
            }
            // un file illeggibile non è fatale: lo stato resta quello di prima
            Err(e @ AppError::MalformedDocument) => {
                error(format!("Cannot open {}: {}", entry.storage_key, e));
                ws.log("open_failed", &entry.storage_key, &e.to_string());
            }
            Err(e) => return Err(e),
        }

        print_record(cursor.record(), cursor.mode(), cursor.viewing());
    }
    Ok(())
}
