//! TOML-based application configuration.
//!
//! Stores the defaults used when creating challenges:
//! - challenge name
//! - countdown length
//! - reminder time
//!
//! Configuration is stored at `<data dir>/config.toml`, next to the data
//! file. The persisted challenge record itself never lives here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{Result, ValidationError};

/// Challenge-creation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_challenge_name")]
    pub challenge_name: String,
    #[serde(default = "default_total_days")]
    pub total_days: u32,
    #[serde(default = "default_reminder_time")]
    pub reminder_time: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

fn default_challenge_name() -> String {
    "75 Hard".to_string()
}

fn default_total_days() -> u32 {
    75
}

fn default_reminder_time() -> String {
    "20:00".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            challenge_name: default_challenge_name(),
            total_days: default_total_days(),
            reminder_time: default_reminder_time(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// A missing file yields the default config; a present but unparseable
    /// file does too, after a warning.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(cfg) => Ok(cfg),
                Err(e) => {
                    tracing::warn!(error = %e, "unparseable config, using defaults");
                    Ok(Self::default())
                }
            },
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Set a config value by key over the fixed key set, then save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.challenge_name" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ValidationError::EmptyName.into());
                }
                self.defaults.challenge_name = value.to_string();
            }
            "defaults.total_days" => {
                let days: u32 = value
                    .parse()
                    .map_err(|_| invalid(key, value, "expected a positive integer"))?;
                self.defaults.total_days = days.max(1);
            }
            "defaults.reminder_time" => {
                if chrono::NaiveTime::parse_from_str(value, "%H:%M").is_err() {
                    return Err(ValidationError::InvalidTime {
                        value: value.to_string(),
                    }
                    .into());
                }
                self.defaults.reminder_time = value.to_string();
            }
            _ => return Err(invalid(key, value, "unknown config key")),
        }
        self.save()
    }
}

fn invalid(key: &str, value: &str, message: &str) -> crate::error::CoreError {
    std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("cannot set '{key}' to '{value}': {message}"),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.defaults.challenge_name, "75 Hard");
        assert_eq!(parsed.defaults.total_days, 75);
        assert_eq!(parsed.defaults.reminder_time, "20:00");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[defaults]\ntotal_days = 30\n").unwrap();
        assert_eq!(parsed.defaults.total_days, 30);
        assert_eq!(parsed.defaults.challenge_name, "75 Hard");
    }
}
