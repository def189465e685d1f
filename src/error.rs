//! Error types for the fileguard baseline engine.

use std::path::PathBuf;
use thiserror::Error;

/// Traversal and hashing errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Root directory {path:?} is unreadable: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to hash {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Baseline and compare artifact errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to encode artifact: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write artifact {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Baseline file not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read baseline {path:?}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed baseline {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

/// Errors surfaced by the public entry points
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Rescan of {root:?} failed: {source}")]
    RescanFailure {
        root: String,
        #[source]
        source: ScanError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
