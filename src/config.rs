//! User configuration (`~/.tcalc.toml`)
//!
//! Every field is optional:
//!
//! ```toml
//! [format]
//! max_fraction_digits = 3
//!
//! [messages]
//! error = "Ошибка"
//! out_of_range = "Число за пределами вычислений"
//! no_data = "NoData"
//!
//! [repl]
//! prompt = "tcalc> "
//! banner = false
//! ```

use crate::format::{NumberFormat, DEFAULT_MAX_FRACTION_DIGITS};
use crate::keypad::{Keypad, Messages};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".tcalc.toml";

/// Upper bound for `max_fraction_digits`; more digits than f64 carries
const MAX_FRACTION_DIGITS_LIMIT: usize = 17;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("max_fraction_digits must be at most 17, got {0}")]
    FractionDigits(usize),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub messages: MessagesConfig,
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    pub max_fraction_digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessagesConfig {
    pub error: String,
    pub out_of_range: String,
    pub no_data: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        let Messages {
            error,
            out_of_range,
            no_data,
        } = Messages::default();
        Self {
            error,
            out_of_range,
            no_data,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    /// Print a banner with usage hints on startup
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "tcalc> ".to_string(),
            banner: false,
        }
    }
}

/// Get home directory
pub fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Default config location (~/.tcalc.toml)
pub fn default_path() -> Option<PathBuf> {
    dirs_home().map(|h| h.join(CONFIG_FILE_NAME))
}

impl Config {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load an explicit path, or the default file if it exists.
    ///
    /// A missing default file gives the default config; a missing explicit
    /// file is an error.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.format.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(ConfigError::FractionDigits(self.format.max_fraction_digits));
        }
        Ok(())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.format.max_fraction_digits)
    }

    pub fn messages(&self) -> Messages {
        Messages {
            error: self.messages.error.clone(),
            out_of_range: self.messages.out_of_range.clone(),
            no_data: self.messages.no_data.clone(),
        }
    }

    /// A fresh keypad configured from this config
    pub fn keypad(&self) -> Keypad {
        Keypad::new(self.number_format(), self.messages())
    }
}
