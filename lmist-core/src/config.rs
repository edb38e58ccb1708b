use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "LMIST_CONFIG";

/// Target listed by `ls` when nothing else is configured
pub const DEFAULT_LIST_TARGET: &str = "fs";

const CONFIG_DIR: &str = "lmist";
const CONFIG_FILE: &str = "config.json";

/// Defaults read from the optional config file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output_dir: Option<PathBuf>,
    pub list_target: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from [`config_path`], falling back to defaults when
    /// there is no config file.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn list_target(&self) -> PathBuf {
        self.list_target
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIST_TARGET))
    }
}

/// Gets the config file location
/// Prefers LMIST_CONFIG, falls back to `<config dir>/lmist/config.json`
pub fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)))
}
