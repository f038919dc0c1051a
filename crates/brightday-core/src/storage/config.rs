//! TOML-based application configuration.
//!
//! Stores user preferences for the CLI surface: how many recent entries
//! to show, whether to print a daily quote, and the default log filter.
//! Stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, CoreError};

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many entries `entries` lists by default.
    #[serde(default = "default_recent_entries")]
    pub recent_entries: u32,
    /// Print a random quote alongside the streak summary.
    #[serde(default = "default_true")]
    pub show_quote: bool,
}

/// Logging preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_recent_entries() -> u32 {
    5
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_entries: default_recent_entries(),
            show_quote: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)
                    .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), CoreError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "display.recent_entries" => Some(self.display.recent_entries.to_string()),
            "display.show_quote" => Some(self.display.show_quote.to_string()),
            "log.level" => Some(self.log.level.clone()),
            _ => None,
        }
    }

    /// Set a config value by dotted key and persist the change.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed for the key's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        match key {
            "display.recent_entries" => {
                self.display.recent_entries =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("'{value}' is not a non-negative integer"),
                    })?;
            }
            "display.show_quote" => {
                self.display.show_quote = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not true/false"),
                })?;
            }
            "log.level" => {
                self.log.level = value.to_string();
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.display.recent_entries, 5);
        assert!(parsed.display.show_quote);
        assert_eq!(parsed.log.level, "warn");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.display.recent_entries, 5);

        let parsed: Config = toml::from_str("[display]\nrecent_entries = 9\n").unwrap();
        assert_eq!(parsed.display.recent_entries, 9);
        assert!(parsed.display.show_quote);
    }

    #[test]
    fn get_supports_dotted_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("display.recent_entries").as_deref(), Some("5"));
        assert_eq!(cfg.get("display.show_quote").as_deref(), Some("true"));
        assert_eq!(cfg.get("log.level").as_deref(), Some("warn"));
        assert!(cfg.get("display.missing").is_none());
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(cfg.set("display.nonexistent", "1").is_err());
        assert!(cfg.set("display.recent_entries", "not a number").is_err());
        assert!(cfg.set("display.show_quote", "maybe").is_err());
    }
}
