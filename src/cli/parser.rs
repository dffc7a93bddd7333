use crate::models::cursor_mode::ExportAction;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rWorklog
/// CLI application to write daily work status reports
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write daily work status reports, export them as .txt/.md and browse their history",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory holding exported reports
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HistoryFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, report directory and database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Edit the fields of the active report
    Set {
        /// Report date (DD-MM-YYYY or YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "in", help = "Arrival time (HH:MM, 24h)")]
        start: Option<String>,

        #[arg(long = "out", help = "Departure time (HH:MM, 24h)")]
        end: Option<String>,

        #[arg(long = "break", help = "Break window (HH:MM-HH:MM, 24h)")]
        brk: Option<String>,

        #[arg(long = "done", help = "Append a task worked on (repeatable)")]
        done: Vec<String>,

        #[arg(long = "plan", help = "Append a task to work on next (repeatable)")]
        plan: Vec<String>,

        #[arg(long = "clear-done", help = "Remove all tasks worked on before appending")]
        clear_done: bool,

        #[arg(long = "clear-plan", help = "Remove all planned tasks before appending")]
        clear_plan: bool,

        #[arg(
            long = "export",
            value_enum,
            help = "Export right after editing, then stay or move to the next day"
        )]
        export: Option<ExportAction>,
    },

    /// Show the active report
    Show {
        #[arg(long = "preview", help = "Also print the exported text")]
        preview: bool,
    },

    /// Export the active report as Work_Status_DD-MM-YYYY.txt/.md
    Export {
        #[arg(long = "next", conflicts_with = "stay", help = "Move to the next day afterwards")]
        next: bool,

        #[arg(long = "stay", help = "Stay on the current day afterwards")]
        stay: bool,
    },

    /// List exported reports, most recent first
    History {
        #[arg(long, value_enum, default_value = "table")]
        format: HistoryFormat,
    },

    /// Open an exported report (DD-MM-YYYY)
    Open { date: String },

    /// Go back to today's draft
    Today,
}
