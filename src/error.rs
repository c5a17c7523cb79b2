//! Error types for directory fingerprinting.

use crate::types::Digest;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a tree build.
///
/// A failed build never replaces a previously built tree.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Hash algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),

    #[error("Failed to enumerate {path:?}: {message}")]
    EnumerationFailed { path: PathBuf, message: String },

    #[error("Failed to read file {path:?}: {source}")]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Errors surfaced by the configuration layer and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Root hash mismatch: expected {}, got {}", hex::encode(.expected), hex::encode(.actual))]
    RootMismatch { expected: Digest, actual: Digest },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
