//! rWorklog library root.
//! Exposes the report codec, the history catalog, the day cursor, the CLI
//! parser and the high-level run() function.

pub mod cli;
pub mod codec;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod history;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Open { .. } => cli::commands::open::handle(&cli.command, cfg),
        Commands::Today => cli::commands::today::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ override da riga di comando
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db);
    }
    if let Some(custom_dir) = &cli.dir {
        cfg.storage_dir = custom_dir.clone();
    }

    dispatch(&cli, &cfg)
}
