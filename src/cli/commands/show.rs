use crate::cli::parser::Commands;
use crate::codec;
use crate::config::Config;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::report::print_record;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { preview } = cmd {
        let ws = Workspace::open(cfg)?;
        let cursor = ws.cursor()?;

        print_record(cursor.record(), cursor.mode(), cursor.viewing());

        if *preview {
            println!();
            match codec::encode(cursor.record()) {
                Ok(text) => print!("{}", text),
                Err(e) => warning(format!("No preview available: {}", e)),
            }
        }
    }
    Ok(())
}
