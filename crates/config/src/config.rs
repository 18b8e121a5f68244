//! Core configuration struct and loading logic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drag::DragConfig;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{
    find_config_file, read_config_file, read_config_file_async, write_config_file,
};

/// Board titles created at start-up when nothing else is configured.
pub const DEFAULT_BOARDS: &[&str] = &["To Do", "In Progress", "Done"];

fn default_boards() -> Vec<String> {
    DEFAULT_BOARDS.iter().map(ToString::to_string).collect()
}

/// The main configuration struct for the cardwall application.
///
/// Every field has a default, so an empty file (or no file) is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use cardwall_config::{Config, DragConfig};
///
/// let config = Config::default();
/// assert_eq!(config.initial_boards, ["To Do", "In Progress", "Done"]);
/// assert!(!config.demo);
///
/// let config = Config {
///     initial_boards: vec!["Backlog".into(), "Shipped".into()],
///     drag: DragConfig::with_activation_distance(3),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Titles of the boards created at start-up, left to right.
    #[serde(default = "default_boards")]
    pub initial_boards: Vec<String>,

    /// Start with a sample wall of boards and cards instead of
    /// `initial_boards`.
    #[serde(default)]
    pub demo: bool,

    /// Pointer drag behavior.
    #[serde(default)]
    pub drag: DragConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_boards: default_boards(),
            demo: false,
            drag: DragConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches `./cardwall.json5`, `./cardwall.json`, then the same two
    /// names as `config.*` under the user configuration directory. Returns
    /// the default configuration if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cardwall_config::Config;
    ///
    /// # async fn example() -> cardwall_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Starting with {} boards", config.initial_boards.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                let config: Config = read_config_file_async(&path).await?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the drag distance or log level is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_config::{Config, DragConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.drag = DragConfig::with_activation_distance(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.drag.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.initial_boards, DEFAULT_BOARDS);
        assert!(!config.demo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn validate_invalid_drag_distance() {
        let config = Config {
            drag: DragConfig::with_activation_distance(42),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDragDistance { .. })
        ));
    }

    #[test]
    fn validate_invalid_log_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "chatty".to_string(),
                file: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"demo": true}"#).unwrap();
        assert!(config.demo);
        assert_eq!(config.initial_boards, DEFAULT_BOARDS);
    }

    #[test]
    fn empty_board_list_is_kept() {
        let config: Config = serde_json::from_str(r#"{"initial_boards": []}"#).unwrap();
        assert!(config.initial_boards.is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Start with two columns
                initial_boards: ["Backlog", "Shipped"],
                drag: { activation_distance: 4 },
                logging: { level: "debug", file: "/tmp/cardwall-test.log" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.initial_boards, ["Backlog", "Shipped"]);
        assert_eq!(config.drag.activation_distance, 4);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/cardwall-test.log"))
        );
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ drag: { activation_distance: 0 } }").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            initial_boards: vec!["Inbox".to_string()],
            demo: true,
            drag: DragConfig::with_activation_distance(3),
            logging: LoggingConfig {
                level: "trace".to_string(),
                file: Some(dir.path().join("wall.log")),
            },
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn load_without_files_uses_defaults_or_user_config() {
        // The user config dir is outside our control; only check that loading
        // yields a valid configuration.
        if let Ok(config) = Config::load().await {
            assert!(config.validate().is_ok());
        }
    }
}
