use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::{config_dir, data_dir};

/// Settings handed to commands when they execute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone used to stamp entries
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Database file, defaults to work.db in the data directory
    #[serde(default)]
    pub database: Option<PathBuf>,
}

fn default_timezone() -> String {
    "Europe/Berlin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            database: None,
        }
    }
}

impl Config {
    pub fn tz(&self) -> Result<Tz, Box<dyn Error>> {
        let tz = self
            .timezone
            .parse::<Tz>()
            .map_err(|e| format!("Invalid timezone '{}': {}", self.timezone, e))?;
        Ok(tz)
    }

    pub fn database_path(&self) -> Result<PathBuf, Box<dyn Error>> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("work.db")),
        }
    }
}

/// Returns the config file path (<config dir>/work/config.toml)
pub fn config_file() -> Result<PathBuf, Box<dyn Error>> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the config from `path`, or the default location when none is given.
/// A missing file gives the default config.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_file()?,
    };

    if !path.exists() {
        log::debug!("no config at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {:?}: {}", path, e))?;
    log::debug!("loaded config from {:?}", path);
    Ok(config)
}
