//! Log output configuration.
//!
//! The terminal belongs to the TUI, so logs always go to a file. The level is
//! a `tracing` filter directive; `CARDWALL_LOG` overrides it when set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "CARDWALL_LOG";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Directory under the user cache dir holding the default log file.
const CACHE_DIR_NAME: &str = "cardwall";

/// File name of the default log file.
const LOG_FILE_NAME: &str = "cardwall.log";

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use cardwall_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.file.is_none());
/// assert_eq!(config.filter_directive_from(Some("cardwall=trace".into())), "cardwall=trace");
/// assert_eq!(config.filter_directive_from(None), "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level written to the log file.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file location. Defaults to the user cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Returns the filter directive to install, honouring `CARDWALL_LOG`.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter_directive_from(std::env::var(LOG_ENV_VAR).ok())
    }

    /// Returns `env` if it holds a non-blank directive, the configured level
    /// otherwise.
    #[must_use]
    pub fn filter_directive_from(&self, env: Option<String>) -> String {
        env.filter(|directive| !directive.trim().is_empty())
            .unwrap_or_else(|| self.level.clone())
    }

    /// Returns the log file path, falling back to
    /// `<cache_dir>/cardwall/cardwall.log`.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is configured and the cache directory
    /// cannot be determined.
    pub fn file_path(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => dirs::cache_dir()
                .map(|dir| dir.join(CACHE_DIR_NAME).join(LOG_FILE_NAME))
                .ok_or(ConfigError::NoHomeDirectory),
        }
    }

    /// Validates the logging configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a known `tracing` level.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.trim().to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
            })
        }
    }
}
