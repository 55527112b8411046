use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;

pub mod dictionary;
pub mod log;

#[cfg(test)]
mod tests;

fn default_channel_capacity() -> usize {
    64
}

fn default_prompt() -> String {
    "> ".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub log: LogConfig,

    /// Capacity of the command and reply channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Shown before each line when stdin is a terminal
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            log: LogConfig::default(),
            channel_capacity: default_channel_capacity(),
            prompt: default_prompt(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults overridden by `WORDTRIE_*` environment variables
    pub fn new() -> Self {
        let channel_capacity = env::var("WORDTRIE_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&capacity| capacity > 0)
            .unwrap_or_else(default_channel_capacity);

        Config {
            dictionary: DictionaryConfig::new(),
            log: LogConfig::new(),
            channel_capacity,
            prompt: default_prompt(),
        }
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
