//! Error types for replacecode.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for replacecode operations.
#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read replacement file {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("File conflict: {path} has been modified since it was read")]
    FileConflict { path: PathBuf },

    #[error("{path} is out of date, run replacecode to update it")]
    OutOfDate { path: PathBuf },
}

/// Result type alias for replacecode operations.
pub type Result<T> = std::result::Result<T, ReplaceError>;
