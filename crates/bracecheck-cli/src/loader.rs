//! Reading the buffer to check from disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that can occur while loading a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing exists at the given path.
    #[error("File '{}' was not found in path.", .path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read as UTF-8 text.
    #[error("File '{}' could not be read: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 2,
            Self::Read { .. } => 3,
        }
    }
}

/// Read the whole file at `path` into a string.
pub fn load(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
