//! Keeps an existing config file in step with the current `Config` fields.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry.
pub const CONFIG_KEYS: [&str; 4] = ["storage_dir", "database", "default_action", "history_date"];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

/// Keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(CONFIG_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Write defaults for the missing keys, keeping every existing value.
/// Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in CONFIG_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;

    // commento di documentazione subito dopo le opzioni enumerate
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("default_action:") {
            new_content.push_str(
                "# default_action options:\n\
                 #   stay → keep the exported day open\n\
                 #   next → start an empty draft for the following day\n",
            );
        } else if line.starts_with("history_date:") {
            new_content.push_str(
                "# history_date options:\n\
                 #   keep    → opened reports keep the live report date\n\
                 #   restore → opened reports use the date in their header\n",
            );
        }
    }

    fs::write(path, new_content)?;
    Ok(added)
}
