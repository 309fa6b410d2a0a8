//! User configuration, read from `~/.config/quickpick/config.toml`.
//!
//! ```toml
//! theme = "nord"
//! prompt = "> "
//! width_percent = 60
//! height_percent = 50
//! log_filter = "quickpick=debug"
//!
//! [keys]
//! "ctrl-j" = "down"
//! "ctrl-k" = "up"
//! ```

use crate::theme::PaletteType;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_PERCENT: u16 = 20;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub prompt: String,
    pub width_percent: u16,
    pub height_percent: u16,
    pub log_filter: Option<String>,
    /// Key spec (`"ctrl-j"`) to action name (`"down"`).
    pub keys: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: PaletteType::Mocha,
            prompt: "> ".to_string(),
            width_percent: 60,
            height_percent: 50,
            log_filter: None,
            keys: HashMap::new(),
        }
    }
}

impl Config {
    /// Palette size as percentages of the terminal, clamped to a usable range.
    pub fn modal_percent(&self) -> (u16, u16) {
        (
            self.width_percent.clamp(MIN_PERCENT, 100),
            self.height_percent.clamp(MIN_PERCENT, 100),
        )
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("quickpick");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `explicit` if given, else the default location. A missing default
/// file yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}
