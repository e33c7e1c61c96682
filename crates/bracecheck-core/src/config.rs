use serde::Deserialize;
use thiserror::Error;

use crate::stack::DEFAULT_CAPACITY;

/// Largest accepted `capacity`.
pub const MAX_CAPACITY: usize = 1_000_000;

/// Which stack variant the checker scans with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StackMode {
    /// Fixed capacity; deeper nesting is reported as a stack overflow (default).
    #[default]
    Bounded,
    /// Grows as needed; nesting depth is limited only by memory.
    Unbounded,
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Description of the validation error.
    pub message: String,
}

/// Checker configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum nesting depth for a bounded stack (1-1000000, default: 1000).
    pub capacity: usize,
    /// Which stack variant to use.
    pub stack: StackMode,
}

impl Config {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is out of acceptable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(ConfigError {
                message: format!(
                    "capacity must be between 1 and {MAX_CAPACITY}, got {}",
                    self.capacity
                ),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            stack: StackMode::default(),
        }
    }
}
