use crate::cli::parser::{Commands, HistoryFormat};
use crate::config::Config;
use crate::errors::AppResult;
use crate::history::HistoryCatalog;
use crate::store::FsWorklogStore;
use crate::utils::table::{Column, Table};
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { format } = cmd {
        let store = FsWorklogStore::new(cfg.storage_path());
        let catalog = HistoryCatalog::scan(&store)?;

        match format {
            HistoryFormat::Table => print_table(&catalog, &store),
            HistoryFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(io::stdout());
                for entry in catalog.entries() {
                    wtr.serialize(entry)?;
                }
                wtr.flush()?;
            }
            HistoryFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog.entries())?);
            }
        }
    }
    Ok(())
}

fn print_table(catalog: &HistoryCatalog, store: &FsWorklogStore) {
    if catalog.is_empty() {
        println!("No reports found in {}", store.root().display());
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Day", 9),
        Column::new("File", 30),
    ]);

    for entry in catalog.entries() {
        table.add_row(vec![
            entry.display_label.clone(),
            entry.identity.format("%A").to_string(),
            entry.storage_key.clone(),
        ]);
    }

    println!("📚 History ({} reports):\n", catalog.len());
    print!("{}", table.render());
}
