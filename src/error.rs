//! Error types for the virtual file system, its snapshot store, and the CLI layer.

use thiserror::Error;

/// Errors raised by file system operations.
///
/// Every variant carries the path exactly as the caller supplied it. None of
/// them leave the tree partially mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Is a directory: {0}")]
    IsADirectory(String),

    #[error("No such file or directory: {0}")]
    NoSuchEntry(String),

    #[error("Destination already exists: {0}")]
    DestinationExists(String),

    #[error("Cannot update a directory: {0}")]
    CannotModifyDirectory(String),

    #[error("Invalid target {path}: {reason}")]
    InvalidTarget { path: String, reason: String },
}

impl VfsError {
    pub(crate) fn invalid_target(path: &str, reason: &str) -> Self {
        VfsError::InvalidTarget {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors from the snapshot store and snapshot codec.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Top-level error surfaced by the CLI and session composition.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Vfs(#[from] VfsError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::Terminal(err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
