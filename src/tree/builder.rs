//! Tree builder for fingerprinting a directory with a Merkle tree

use crate::error::BuildError;
use crate::tree::arena::NodeArena;
use crate::tree::hasher::{self, DigestAlgorithm, ReadFailurePolicy};
use crate::tree::leaves::LeafSet;
use crate::tree::levels;
use crate::tree::shape::{level_of, TreeShape};
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::{Digest, EMPTY_ROOT};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Immutable result of one build: leaf set, nodes and shape.
///
/// A later build produces a new value; an existing one never changes.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    directory: PathBuf,
    recursive: bool,
    algorithm: DigestAlgorithm,
    leaves: LeafSet,
    nodes: NodeArena,
    shape: TreeShape,
    skipped: Vec<PathBuf>,
    built_at: DateTime<Utc>,
}

impl MerkleTree {
    /// Root hash, or [`EMPTY_ROOT`] when no files were found
    pub fn root_hash(&self) -> Digest {
        self.nodes.get(0).copied().unwrap_or(EMPTY_ROOT)
    }

    /// Whether the build produced any nodes
    pub fn has_tree(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn height(&self) -> u32 {
        self.shape.height
    }

    pub fn num_leaves(&self) -> usize {
        self.shape.num_leaves
    }

    pub fn total_nodes(&self) -> usize {
        self.shape.total_nodes
    }

    pub fn shape(&self) -> &TreeShape {
        &self.shape
    }

    /// Sorted, padded leaf digests
    pub fn leaves(&self) -> &[Digest] {
        self.leaves.as_slice()
    }

    /// Number of files that contributed a leaf
    pub fn file_count(&self) -> usize {
        self.leaves.file_count()
    }

    /// Node at a level-order index
    pub fn node(&self, index: usize) -> Option<&Digest> {
        self.nodes.get(index)
    }

    /// Populated `(index, level, digest)` triples in index order
    pub fn populated_nodes(&self) -> impl Iterator<Item = (usize, u32, &Digest)> {
        self.nodes
            .iter()
            .map(|(index, digest)| (index, level_of(index), digest))
    }

    /// Complete-tree view with `2^(height+1) - 1` slots; empty for an empty tree.
    pub fn slots(&self) -> Vec<Option<Digest>> {
        (0..self.shape.capacity())
            .map(|index| self.nodes.get(index).copied())
            .collect()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Files left out because they could not be read
    pub fn skipped_files(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Whether the root hash equals `expected`
    pub fn verify_root(&self, expected: &Digest) -> bool {
        self.root_hash() == *expected
    }
}

/// Tree builder for a single directory
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root: PathBuf,
    walker_config: WalkerConfig,
    algorithm: DigestAlgorithm,
    read_failure_policy: ReadFailurePolicy,
}

impl TreeBuilder {
    /// Create a non-recursive SHA-256 builder for the given directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
            algorithm: DigestAlgorithm::default(),
            read_failure_policy: ReadFailurePolicy::default(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.walker_config.recursive = recursive;
        self
    }

    /// Replace the walker config. Its `recursive` flag wins over earlier calls.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_read_failure_policy(mut self, policy: ReadFailurePolicy) -> Self {
        self.read_failure_policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_recursive(&self) -> bool {
        self.walker_config.recursive
    }

    /// Build the Merkle tree for the directory.
    ///
    /// Files are enumerated and hashed, the digests sorted and padded, and
    /// internal levels computed bottom-up. Any error leaves nothing behind.
    #[instrument(skip(self), fields(directory = %self.root.display(), recursive = self.walker_config.recursive))]
    pub fn build(&self) -> Result<MerkleTree, BuildError> {
        let start = Instant::now();
        info!("Starting tree build");

        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone());
        let files = walker.walk().map_err(|e| {
            error!("Directory enumeration failed: {}", e);
            e
        })?;

        let hashed = hasher::hash_files(&files, self.algorithm, self.read_failure_policy)
            .map_err(|e| {
                error!("File hashing failed: {}", e);
                e
            })?;

        let leaves = LeafSet::from_digests(hashed.digests);
        let shape = TreeShape::new(leaves.file_count(), leaves.len());
        let mut nodes = NodeArena::with_capacity(leaves.len() * 2);

        if leaves.is_empty() {
            debug!("No files found, producing empty tree");
        } else {
            let first_leaf = shape.first_leaf_index();
            for (offset, leaf) in leaves.as_slice().iter().enumerate() {
                nodes.insert(first_leaf + offset, *leaf);
            }
            levels::build_levels(&mut nodes, shape.height, self.algorithm);
        }

        let tree = MerkleTree {
            directory: self.root.clone(),
            recursive: self.walker_config.recursive,
            algorithm: self.algorithm,
            leaves,
            nodes,
            shape,
            skipped: hashed.skipped,
            built_at: Utc::now(),
        };

        info!(
            file_count = tree.file_count(),
            num_leaves = shape.num_leaves,
            height = shape.height,
            total_nodes = shape.total_nodes,
            root = %hex::encode(tree.root_hash()),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );

        Ok(tree)
    }

    /// Build the tree and return only its root hash
    pub fn compute_root(&self) -> Result<Digest, BuildError> {
        Ok(self.build()?.root_hash())
    }
}
