//! Station registry error types.

use std::path::PathBuf;

/// Errors that can occur when reading the station registry file.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The file could not be read
    #[error("failed to read station registry {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a line -> stations JSON object
    #[error("failed to parse station registry {path}: {message}")]
    Json { path: PathBuf, message: String },
}
