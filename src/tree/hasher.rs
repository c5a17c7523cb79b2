//! Digest computation for files and internal tree nodes

use crate::error::BuildError;
use crate::tree::walker::FileEntry;
use crate::types::Digest;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::path::PathBuf;
use tracing::{trace, warn};

/// Hash primitive used for every node of a tree.
///
/// Both algorithms produce 32-byte digests. A single build never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl DigestAlgorithm {
    /// Resolve a configured algorithm name.
    pub fn from_name(name: &str) -> Result<Self, BuildError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            other => Err(BuildError::AlgorithmUnavailable(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Blake3 => "blake3",
        }
    }

    /// Digest of a byte sequence, computed in one pass.
    pub fn digest(&self, data: &[u8]) -> Digest {
        match self {
            DigestAlgorithm::Sha256 => Sha256::digest(data).into(),
            DigestAlgorithm::Blake3 => *blake3::hash(data).as_bytes(),
        }
    }

    /// Digest of `left || right`.
    pub fn digest_pair(&self, left: &Digest, right: &Digest) -> Digest {
        match self {
            DigestAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(left);
                hasher.update(right);
                hasher.finalize().into()
            }
            DigestAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(left);
                hasher.update(right);
                *hasher.finalize().as_bytes()
            }
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do when a file cannot be read during a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadFailurePolicy {
    /// Abort the whole build on the first unreadable file
    #[default]
    Abort,
    /// Leave the file out of the leaf set and keep going
    Skip,
}

/// Result of hashing a batch of files
#[derive(Debug, Default)]
pub struct HashedFiles {
    pub digests: Vec<Digest>,
    /// Files left out under [`ReadFailurePolicy::Skip`]
    pub skipped: Vec<PathBuf>,
}

/// Hash every file in `files`, one at a time.
///
/// Each file is read whole and its handle released before the next one is
/// opened. Skipped files contribute no digest, so the leaf count always
/// equals the number of files actually hashed.
pub fn hash_files(
    files: &[FileEntry],
    algorithm: DigestAlgorithm,
    policy: ReadFailurePolicy,
) -> Result<HashedFiles, BuildError> {
    let mut hashed = HashedFiles {
        digests: Vec::with_capacity(files.len()),
        skipped: Vec::new(),
    };

    for file in files {
        match std::fs::read(&file.path) {
            Ok(content) => {
                let digest = algorithm.digest(&content);
                trace!(path = %file.path.display(), digest = %hex::encode(digest), "Hashed file");
                hashed.digests.push(digest);
            }
            Err(source) => match policy {
                ReadFailurePolicy::Abort => {
                    return Err(BuildError::FileReadFailure {
                        path: file.path.clone(),
                        source,
                    });
                }
                ReadFailurePolicy::Skip => {
                    warn!(path = %file.path.display(), error = %source, "Skipping unreadable file");
                    hashed.skipped.push(file.path.clone());
                }
            },
        }
    }

    Ok(hashed)
}
