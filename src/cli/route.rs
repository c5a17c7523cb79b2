//! CLI route: single route table and run context. Dispatches to the tree builder and presentation.

use crate::cli::parse::{Commands, TargetArgs};
use crate::cli::presentation;
use crate::config::ProvebitConfig;
use crate::error::{ApiError, BuildError};
use crate::tree::builder::{MerkleTree, TreeBuilder};
use crate::tree::hasher::{DigestAlgorithm, ReadFailurePolicy};
use crate::types::digest_from_hex;
use tracing::{debug, info};

/// Runtime context for CLI execution: the effective configuration.
pub struct RunContext {
    config: ProvebitConfig,
}

impl RunContext {
    /// Create a run context from an already loaded configuration.
    pub fn new(config: ProvebitConfig) -> Result<Self, ApiError> {
        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProvebitConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Root { target, format } => {
                let tree = self.build(target)?;
                presentation::format_root(&tree, *format)
            }
            Commands::Tree { target, format } => {
                let tree = self.build(target)?;
                presentation::format_tree(&tree, *format)
            }
            Commands::Leaves { target, format } => {
                let tree = self.build(target)?;
                presentation::format_leaves(&tree, *format)
            }
            Commands::Verify { target, expected } => {
                let expected = digest_from_hex(expected)
                    .map_err(|e| ApiError::InvalidDigest(format!("{}: {}", expected, e)))?;
                let tree = self.build(target)?;
                if !tree.verify_root(&expected) {
                    return Err(ApiError::RootMismatch {
                        expected,
                        actual: tree.root_hash(),
                    });
                }
                info!(directory = %tree.directory().display(), "Root hash verified");
                Ok(presentation::format_verify_success(&tree))
            }
            Commands::Config => self.config.to_toml(),
        }
    }

    /// Tree builder for `target`, with CLI flags layered over the config.
    pub fn builder_for(&self, target: &TargetArgs) -> Result<TreeBuilder, ApiError> {
        let dir = dunce::canonicalize(&target.dir).map_err(|e| {
            BuildError::InvalidPath(format!("{}: {}", target.dir.display(), e))
        })?;

        let mut walker_config = self.config.tree.walker_config();
        if target.recursive {
            walker_config.recursive = true;
        }

        let algorithm = match &target.algorithm {
            Some(name) => DigestAlgorithm::from_name(name)?,
            None => self.config.tree.digest_algorithm()?,
        };

        let policy = if target.skip_unreadable {
            ReadFailurePolicy::Skip
        } else {
            self.config.tree.on_unreadable
        };

        debug!(
            directory = %dir.display(),
            recursive = walker_config.recursive,
            algorithm = %algorithm,
            "Resolved build options"
        );

        Ok(TreeBuilder::new(dir)
            .with_walker_config(walker_config)
            .with_algorithm(algorithm)
            .with_read_failure_policy(policy))
    }

    fn build(&self, target: &TargetArgs) -> Result<MerkleTree, ApiError> {
        Ok(self.builder_for(target)?.build()?)
    }
}
