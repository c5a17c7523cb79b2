//! Integration tests for unreadable files: skip and abort policies end to end

#![cfg(unix)]

use clap::Parser;
use provebit::cli::{Cli, RunContext};
use provebit::config::ProvebitConfig;
use provebit::error::{ApiError, BuildError};
use provebit::tracker::DirectoryTracker;
use provebit::tree::builder::TreeBuilder;
use provebit::tree::hasher::{DigestAlgorithm, ReadFailurePolicy};
use provebit::tree::walker::WalkerConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three files, the last of which is chmodded to 0o000.
///
/// Returns `None` when the file is still readable (e.g. running as root),
/// in which case the calling test has nothing to check.
fn dir_with_unreadable_file() -> Option<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "locked.txt"] {
        fs::write(temp_dir.path().join(name), format!("content of {}", name)).unwrap();
    }
    let locked = temp_dir.path().join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read(&locked).is_ok() {
        restore(&locked);
        return None;
    }
    Some((temp_dir, locked))
}

fn restore(path: &Path) {
    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
}

fn run(config: ProvebitConfig, args: &[&str]) -> Result<String, ApiError> {
    let cli = Cli::try_parse_from(args).unwrap();
    RunContext::new(config).unwrap().execute(&cli.command)
}

#[test]
fn test_skip_policy_excludes_file_before_leaf_counting() {
    let Some((dir, locked)) = dir_with_unreadable_file() else {
        return;
    };

    let tree = TreeBuilder::new(dir.path().to_path_buf())
        .with_read_failure_policy(ReadFailurePolicy::Skip)
        .build()
        .unwrap();

    assert_eq!(tree.file_count(), 2);
    assert_eq!(tree.num_leaves(), 2);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.skipped_files(), &[locked.clone()]);
    restore(&locked);
}

#[test]
fn test_abort_policy_fails_build() {
    let Some((dir, locked)) = dir_with_unreadable_file() else {
        return;
    };

    let result = TreeBuilder::new(dir.path().to_path_buf()).build();

    match result {
        Err(BuildError::FileReadFailure { path, .. }) => assert_eq!(path, locked),
        other => panic!("expected FileReadFailure, got {:?}", other.map(|t| t.root_hash())),
    }
    restore(&locked);
}

#[test]
fn test_skip_unreadable_flag_reaches_builder() {
    let Some((dir, locked)) = dir_with_unreadable_file() else {
        return;
    };
    let path = dir.path().to_string_lossy().to_string();

    let output = run(
        ProvebitConfig::default(),
        &["provebit", "tree", &path, "--skip-unreadable", "--format", "json"],
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["file_count"], 2);
    assert_eq!(value["num_leaves"], 2);
    assert_eq!(value["skipped"].as_array().unwrap().len(), 1);
    restore(&locked);
}

#[test]
fn test_configured_skip_policy_reaches_builder() {
    let Some((dir, locked)) = dir_with_unreadable_file() else {
        return;
    };
    let path = dir.path().to_string_lossy().to_string();
    let mut config = ProvebitConfig::default();
    config.tree.on_unreadable = ReadFailurePolicy::Skip;

    let output = run(config, &["provebit", "leaves", &path, "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["file_count"], 2);
    assert_eq!(value["leaves"].as_array().unwrap().len(), 2);
    restore(&locked);
}

#[test]
fn test_default_policy_reports_read_failure() {
    let Some((dir, locked)) = dir_with_unreadable_file() else {
        return;
    };
    let path = dir.path().to_string_lossy().to_string();

    let result = run(ProvebitConfig::default(), &["provebit", "root", &path]);

    assert!(matches!(
        result,
        Err(ApiError::Build(BuildError::FileReadFailure { .. }))
    ));
    restore(&locked);
}

#[test]
fn test_abort_rebuild_keeps_previous_tree() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "locked.txt"] {
        fs::write(temp_dir.path().join(name), format!("content of {}", name)).unwrap();
    }
    let tracker = DirectoryTracker::with_config(
        temp_dir.path().to_path_buf(),
        WalkerConfig::default(),
        DigestAlgorithm::Sha256,
        ReadFailurePolicy::Abort,
    );
    let root = tracker.rebuild().unwrap();

    let locked = temp_dir.path().join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&locked).is_ok() {
        restore(&locked);
        return;
    }

    let result = tracker.rebuild();

    assert!(matches!(result, Err(BuildError::FileReadFailure { .. })));
    assert_eq!(tracker.root_hash(), root);
    assert_eq!(tracker.num_leaves(), 4);
    assert!(tracker.exists());
    restore(&locked);
}
