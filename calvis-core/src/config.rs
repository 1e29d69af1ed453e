//! Global calvis configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_RANGE_DAYS};
use crate::error::{CalvisError, CalvisResult};

fn default_range_days() -> i64 {
    DEFAULT_RANGE_DAYS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Global configuration at ~/.config/calvis/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalvisConfig {
    /// How far past "now" a window reaches when no end is given
    #[serde(default = "default_range_days")]
    pub default_range_days: i64,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CalvisConfig {
    fn default() -> Self {
        CalvisConfig {
            default_range_days: default_range_days(),
            log_level: default_log_level(),
        }
    }
}

impl CalvisConfig {
    pub fn config_path() -> CalvisResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalvisError::Config("Could not determine config directory".into()))?
            .join("calvis");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means all defaults.
    pub fn load() -> CalvisResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalvisResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalvisError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalvisError::Config(e.to_string()))
    }
}
