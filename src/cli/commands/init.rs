use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the report directory
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.dir.clone(), cli.test)?;

    println!("⚙️  Initializing rWorklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", cfg.database_path());

    let ws = Workspace::open(&cfg)?;
    ws.log(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database_path()),
    );

    println!("🎉 rWorklog initialization completed!");
    Ok(())
}
