//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading, writing or checking the
/// configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` picked a file
    #[error("Configuration file path not set")]
    FilePathNotSet,

    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to read configuration from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write configuration to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid YAML for the expected fields
    #[error("Malformed configuration in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to encode configuration: {0}")]
    Encode(#[from] serde_yaml::Error),

    /// A value parsed fine but cannot be used
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}
