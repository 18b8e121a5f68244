//! Pointer drag configuration.
//!
//! A mouse press only turns into a drag once the pointer has travelled far
//! enough from where it was pressed, so a plain click never moves anything.

use serde::{Deserialize, Serialize};

/// Default activation distance, in terminal cells.
pub const DEFAULT_ACTIVATION_DISTANCE: u16 = 2;

/// Smallest accepted activation distance.
pub const MIN_ACTIVATION_DISTANCE: u16 = 1;

/// Largest accepted activation distance.
pub const MAX_ACTIVATION_DISTANCE: u16 = 10;

/// Configuration for pointer drags.
///
/// # Examples
///
/// ```
/// use cardwall_config::DragConfig;
///
/// let config = DragConfig::default();
/// assert_eq!(config.activation_distance, 2);
///
/// let config = DragConfig::with_activation_distance(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Cells the pointer must travel after a press before a drag starts.
    #[serde(default = "default_activation_distance")]
    pub activation_distance: u16,
}

fn default_activation_distance() -> u16 {
    DEFAULT_ACTIVATION_DISTANCE
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl DragConfig {
    /// Creates a drag configuration with the given activation distance.
    #[must_use]
    pub fn with_activation_distance(activation_distance: u16) -> Self {
        Self {
            activation_distance,
        }
    }

    /// Validates the drag configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the activation distance is outside
    /// `MIN_ACTIVATION_DISTANCE..=MAX_ACTIVATION_DISTANCE`.
    pub fn validate(&self) -> crate::Result<()> {
        if self.activation_distance < MIN_ACTIVATION_DISTANCE {
            return Err(crate::ConfigError::InvalidDragDistance {
                reason: format!(
                    "distance {} is below minimum of {} cells",
                    self.activation_distance, MIN_ACTIVATION_DISTANCE
                ),
            });
        }

        if self.activation_distance > MAX_ACTIVATION_DISTANCE {
            return Err(crate::ConfigError::InvalidDragDistance {
                reason: format!(
                    "distance {} exceeds maximum of {} cells",
                    self.activation_distance, MAX_ACTIVATION_DISTANCE
                ),
            });
        }

        Ok(())
    }
}
