//! Game configuration
//!
//! Loaded from a TOML file; every field is optional and falls back to the
//! defaults below. Command-line flags override file values.

use crate::daily::default_epoch;
use crate::error::ConfigError;
use crate::game::{DEFAULT_MAX_ALERTS, DEFAULT_MAX_ROWS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Date of puzzle zero
    pub epoch: NaiveDate,

    /// Guesses per game
    pub max_rows: usize,

    /// Alerts shown at once
    pub max_alerts: usize,

    /// Tile flip duration in milliseconds
    pub flip_ms: u64,

    /// Win dance duration in milliseconds
    pub dance_ms: u64,

    /// Lifetime of advisory alerts in milliseconds
    pub alert_ms: u64,

    /// Lifetime of the win alert in milliseconds
    pub win_alert_ms: u64,

    /// Custom daily target list, one word per line
    pub targets_path: Option<PathBuf>,

    /// Custom accepted-guess list, one word per line
    pub allowed_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            max_rows: DEFAULT_MAX_ROWS,
            max_alerts: DEFAULT_MAX_ALERTS,
            flip_ms: 100,
            dance_ms: 500,
            alert_ms: 1000,
            win_alert_ms: 5000,
            targets_path: None,
            allowed_path: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`, or from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, does not
    /// parse, or holds out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
                path: config_path.clone(),
                source,
            })?;
        let config = Self::from_toml(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: config_path.clone(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::Invalid("max_rows must be at least 1".into()));
        }
        if self.max_alerts == 0 {
            return Err(ConfigError::Invalid("max_alerts must be at least 1".into()));
        }
        Ok(())
    }

    /// Default configuration file location
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordle_daily").join("config.toml"))
    }

    #[must_use]
    pub const fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_ms)
    }

    #[must_use]
    pub const fn dance_duration(&self) -> Duration {
        Duration::from_millis(self.dance_ms)
    }

    #[must_use]
    pub const fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_ms)
    }

    #[must_use]
    pub const fn win_alert_duration(&self) -> Duration {
        Duration::from_millis(self.win_alert_ms)
    }
}
