//! Configuration System
//!
//! Layered configuration for tree building and logging: built-in defaults,
//! the global config file, an optional environment-specific file and
//! `PROVEBIT__*` environment variables. CLI flags are applied on top by the
//! binary.

use crate::error::{ApiError, BuildError};
use crate::logging::{self, LoggingConfig};
use crate::tree::hasher::{DigestAlgorithm, ReadFailurePolicy};
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvebitConfig {
    /// Tree building settings
    #[serde(default)]
    pub tree: TreeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree building settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Include files in nested subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Digest algorithm name (sha256, blake3)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,

    /// File or directory names to leave out
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// What to do with files that cannot be read
    #[serde(default)]
    pub on_unreadable: ReadFailurePolicy,
}

fn default_algorithm() -> String {
    "sha256".to_string()
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            algorithm: default_algorithm(),
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            on_unreadable: ReadFailurePolicy::default(),
        }
    }
}

impl TreeConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            recursive: self.recursive,
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
        }
    }

    pub fn digest_algorithm(&self) -> Result<DigestAlgorithm, BuildError> {
        DigestAlgorithm::from_name(&self.algorithm)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Tree: {0}")]
    Tree(String),
    #[error("Logging: {0}")]
    Logging(String),
}

impl ProvebitConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.tree.digest_algorithm() {
            errors.push(ValidationError::Tree(e.to_string()));
        }
        if self.tree.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::Tree(
                "Ignore patterns cannot be empty".to_string(),
            ));
        }

        if let Err(e) = logging::validate_level(&self.logging.level) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        match logging::parse_output_destination(&self.logging.output) {
            Ok(logging::OutputDestination::File) if self.logging.file.is_none() => {
                errors.push(ValidationError::Logging(
                    "Output 'file' requires a log file path".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::Logging(e.to_string())),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into one [`ApiError`].
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
