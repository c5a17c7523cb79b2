//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, BuildError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::RootMismatch { .. } => format!("Verification failed: {}", e),
        ApiError::Build(BuildError::FileReadFailure { .. }) => format!(
            "{}. Pass --skip-unreadable to leave unreadable files out.",
            e
        ),
        _ => e.to_string(),
    }
}
