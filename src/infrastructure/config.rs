//! Application configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::application::services::DEFAULT_MINIMUM_INTERROGATION_LEVEL;

/// Which repository backend to run on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON collection files in the data directory
    Json,
    /// Transient tables, lost on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => anyhow::bail!("Unknown storage backend '{}', expected json or memory", other),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Repository backend
    pub storage: StorageBackend,
    /// Directory holding the JSON collection files
    pub data_dir: PathBuf,
    /// Lowest rank level allowed to lead an interrogation
    pub min_interrogation_level: u32,
    /// Empty every collection before opening the repositories
    pub reset_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Json,
            data_dir: PathBuf::from("data"),
            min_interrogation_level: DEFAULT_MINIMUM_INTERROGATION_LEVEL,
            reset_data: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source; missing keys use defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            storage: match lookup("PRECINCT_STORAGE") {
                Some(value) => value.parse().context("PRECINCT_STORAGE is invalid")?,
                None => defaults.storage,
            },
            data_dir: lookup("PRECINCT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            min_interrogation_level: match lookup("PRECINCT_MIN_INTERROGATION_LEVEL") {
                Some(value) => value
                    .trim()
                    .parse()
                    .context("PRECINCT_MIN_INTERROGATION_LEVEL must be a non-negative integer")?,
                None => defaults.min_interrogation_level,
            },
            reset_data: match lookup("PRECINCT_RESET_DATA") {
                Some(value) => parse_flag(&value).context("PRECINCT_RESET_DATA must be true or false")?,
                None => defaults.reset_data,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("'{}' is not a boolean", other),
    }
}
