//! Filesystem walker that enumerates the regular files under a directory

use crate::error::BuildError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// A regular file found under the walked directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend into subdirectories at any depth (default: top level only)
    pub recursive: bool,
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Path component names to skip entirely (default: none)
    pub ignore_patterns: Vec<String>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a non-recursive walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every regular file.
    ///
    /// Directories are never returned. The order of the result is whatever
    /// the filesystem yields; callers must not depend on it.
    pub fn walk(&self) -> Result<Vec<FileEntry>, BuildError> {
        let root_meta = std::fs::metadata(&self.root).map_err(|e| enumeration_error(&self.root, e))?;
        if !root_meta.is_dir() {
            return Err(BuildError::EnumerationFailed {
                path: self.root.clone(),
                message: "not a directory".to_string(),
            });
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(self.config.follow_symlinks);

        let mut files = Vec::new();
        let mut iter = walker.into_iter();
        while let Some(entry) = iter.next() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
                BuildError::EnumerationFailed {
                    path,
                    message: e.to_string(),
                }
            })?;

            if self.should_ignore(&entry) {
                if entry.file_type().is_dir() {
                    iter.skip_current_dir();
                }
                continue;
            }

            // With follow_links(false) a symlink reports its own type, so it is
            // neither a file nor a directory here and is skipped.
            if !entry.file_type().is_file() {
                continue;
            }

            files.push(FileEntry {
                path: entry.into_path(),
            });
        }

        debug!(
            root = %self.root.display(),
            recursive = self.config.recursive,
            file_count = files.len(),
            "Enumerated files"
        );
        Ok(files)
    }

    /// Check if an entry's own name matches an ignore pattern
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}

fn enumeration_error(path: &Path, e: std::io::Error) -> BuildError {
    BuildError::EnumerationFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
