//! Directory tracker: holds the latest tree built for one directory.
//!
//! Each rebuild produces a fresh [`MerkleTree`] and swaps it in only when the
//! build succeeds. Readers get an `Arc` snapshot that later rebuilds never
//! touch. Rebuilds themselves are serialised.

use crate::error::BuildError;
use crate::tree::builder::{MerkleTree, TreeBuilder};
use crate::tree::hasher::{DigestAlgorithm, ReadFailurePolicy};
use crate::tree::walker::WalkerConfig;
use crate::types::{Digest, EMPTY_ROOT};
use parking_lot::{Mutex, RwLock};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Tracks the fingerprint of a single directory across rebuilds
pub struct DirectoryTracker {
    directory: PathBuf,
    walker_config: RwLock<WalkerConfig>,
    algorithm: DigestAlgorithm,
    read_failure_policy: ReadFailurePolicy,
    current: RwLock<Option<Arc<MerkleTree>>>,
    exists: AtomicBool,
    build_lock: Mutex<()>,
}

impl DirectoryTracker {
    /// Non-recursive tracker using SHA-256
    pub fn new(directory: PathBuf) -> Self {
        Self::with_config(
            directory,
            WalkerConfig::default(),
            DigestAlgorithm::default(),
            ReadFailurePolicy::default(),
        )
    }

    pub fn with_config(
        directory: PathBuf,
        walker_config: WalkerConfig,
        algorithm: DigestAlgorithm,
        read_failure_policy: ReadFailurePolicy,
    ) -> Self {
        Self {
            directory,
            walker_config: RwLock::new(walker_config),
            algorithm,
            read_failure_policy,
            current: RwLock::new(None),
            exists: AtomicBool::new(false),
            build_lock: Mutex::new(()),
        }
    }

    /// Rebuild the tree and return its root hash.
    ///
    /// On error the previously built tree stays in place.
    pub fn rebuild(&self) -> Result<Digest, BuildError> {
        let _guard = self.build_lock.lock();
        let builder = TreeBuilder::new(self.directory.clone())
            .with_walker_config(self.walker_config.read().clone())
            .with_algorithm(self.algorithm)
            .with_read_failure_policy(self.read_failure_policy);

        let tree = match builder.build() {
            Ok(tree) => tree,
            Err(e) => {
                warn!(directory = %self.directory.display(), error = %e, "Rebuild failed, keeping previous tree");
                return Err(e);
            }
        };

        let root = tree.root_hash();
        if tree.has_tree() {
            self.exists.store(true, Ordering::Release);
        }
        *self.current.write() = Some(Arc::new(tree));
        info!(directory = %self.directory.display(), root = %hex::encode(root), "Tracker updated");
        Ok(root)
    }

    /// Latest successfully built tree
    pub fn snapshot(&self) -> Option<Arc<MerkleTree>> {
        self.current.read().clone()
    }

    /// Root hash of the latest tree, or [`EMPTY_ROOT`]
    pub fn root_hash(&self) -> Digest {
        self.snapshot()
            .map(|tree| tree.root_hash())
            .unwrap_or(EMPTY_ROOT)
    }

    pub fn height(&self) -> u32 {
        self.snapshot().map(|tree| tree.height()).unwrap_or(0)
    }

    pub fn num_leaves(&self) -> usize {
        self.snapshot().map(|tree| tree.num_leaves()).unwrap_or(0)
    }

    pub fn total_nodes(&self) -> usize {
        self.snapshot().map(|tree| tree.total_nodes()).unwrap_or(0)
    }

    /// Complete-tree view of the latest tree, `None` if no tree exists
    pub fn tree(&self) -> Option<Vec<Option<Digest>>> {
        self.snapshot()
            .filter(|tree| tree.has_tree())
            .map(|tree| tree.slots())
    }

    /// Recursion setting for the next rebuild
    pub fn is_recursive(&self) -> bool {
        self.walker_config.read().recursive
    }

    /// Change recursion for future rebuilds; the current tree is unaffected.
    pub fn set_recursive(&self, recursive: bool) {
        self.walker_config.write().recursive = recursive;
    }

    /// Whether a non-empty tree has been built at least once
    pub fn exists(&self) -> bool {
        self.exists.load(Ordering::Acquire)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
