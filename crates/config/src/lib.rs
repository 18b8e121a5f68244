//! Configuration management for the cardwall application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! - [`config`]: the [`Config`] struct and loading logic
//! - [`drag`]: pointer drag activation distance
//! - [`logging`]: log level and log file location
//! - [`persistence`]: config file lookup, reading and writing
//! - [`error`]: error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment: `CARDWALL_LOG` overrides the log filter
//! 2. Local config (`./cardwall.json5` or `./cardwall.json`)
//! 3. User config (`<config_dir>/cardwall/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   initial_boards: ["Backlog", "Doing", "Done"],
//!   demo: false,
//!   drag: { activation_distance: 2 },
//!   logging: { level: "debug" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use cardwall_config::Config;
//!
//! # async fn example() -> cardwall_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Drag starts after {} cells", config.drag.activation_distance);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod logging;
pub mod persistence;

pub use config::Config;
pub use drag::DragConfig;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
