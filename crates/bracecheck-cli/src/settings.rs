//! Checker configuration from TOML files and command-line overrides.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bracecheck_core::{Config, ConfigError, StackMode};
use thiserror::Error;
use tracing::info;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "bracecheck.toml";

/// Errors that can occur while resolving the checker configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Values given on the command line, taking precedence over any file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub capacity: Option<usize>,
    pub stack: Option<StackMode>,
}

/// Build the checker configuration.
///
/// Starts from the defaults, then layers the file at `explicit` (or
/// [`CONFIG_FILE_NAME`] inside `dir` if that exists), then `overrides`.
/// The result is validated.
pub fn resolve(
    explicit: Option<&Path>,
    dir: &Path,
    overrides: Overrides,
) -> Result<Config, SettingsError> {
    let mut config = match explicit {
        Some(path) => read_config(path)?,
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                read_config(&candidate)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(capacity) = overrides.capacity {
        config.capacity = capacity;
    }
    if let Some(stack) = overrides.stack {
        config.stack = stack;
    }

    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
