use crate::errors::{AppError, AppResult};
use crate::models::cursor_mode::{ExportAction, HistoryDatePolicy};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the exported `Work_Status_*` files.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    /// SQLite file with draft, session and internal log.
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_action")]
    pub default_action: ExportAction,
    #[serde(default = "default_history_date")]
    pub history_date: HistoryDatePolicy,
}

fn default_storage_dir() -> String {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join("Documents")
        .join("WorkLogs")
        .to_string_lossy()
        .to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_action() -> ExportAction {
    ExportAction::Stay
}
fn default_history_date() -> HistoryDatePolicy {
    HistoryDatePolicy::Restore
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            database: default_database(),
            default_action: default_action(),
            history_date: default_history_date(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// `--db` value as a database path: `~/` expanded, relative names placed
    /// in the config directory.
    pub fn resolve_database(name: &str) -> String {
        let p = expand_tilde(name);
        let db_path = if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        };
        db_path.to_string_lossy().to_string()
    }

    /// Storage root with `~/` expanded.
    pub fn storage_path(&self) -> PathBuf {
        expand_tilde(&self.storage_dir)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    /// Create config dir, config file (unless `is_test`) and storage dir.
    pub fn init_all(
        custom_db: Option<String>,
        custom_dir: Option<String>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load()?;

        // DB name: user provided or default
        if let Some(name) = custom_db {
            config.database = Self::resolve_database(&name);
        }
        if let Some(storage) = custom_dir {
            config.storage_dir = storage;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(config.storage_path())?;
        println!("✅ Storage dir: {:?}", config.storage_path());

        Ok(config)
    }
}
