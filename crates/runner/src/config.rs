//! Journal configuration
//!
//! Read from an optional JSON file; every field has a default.

use pivot_clock::LocalCalendar;
use pivot_store::DEFAULT_STORE_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

/// Journal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalConfig {
    /// JSON document holding the pivot list
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Local zone for dateless input, minutes east of UTC
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Save after every recorded pivot
    #[serde(default)]
    pub autosave: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_utc_offset_minutes() -> i32 {
    7 * 60
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            utc_offset_minutes: default_utc_offset_minutes(),
            autosave: false,
        }
    }
}

impl JournalConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file means defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            log::debug!(
                "No config at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calendar().map(|_| ())
    }

    /// Calendar for the configured offset
    pub fn calendar(&self) -> Result<LocalCalendar, ConfigError> {
        LocalCalendar::from_offset_minutes(self.utc_offset_minutes)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }
}
