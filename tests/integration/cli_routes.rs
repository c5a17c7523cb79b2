//! Integration tests for the CLI route table

use super::test_utils::{dir_with_files, dir_with_nested};
use clap::Parser;
use provebit::cli::{Cli, RunContext};
use provebit::config::ProvebitConfig;
use provebit::error::ApiError;

fn run(args: &[&str]) -> Result<String, ApiError> {
    let cli = Cli::try_parse_from(args).unwrap();
    let context = RunContext::new(ProvebitConfig::default()).unwrap();
    context.execute(&cli.command)
}

#[test]
fn test_root_then_verify() {
    let dir = dir_with_files(5);
    let path = dir.path().to_string_lossy().to_string();

    let root = run(&["provebit", "root", &path]).unwrap();
    let verified = run(&["provebit", "verify", &path, "--expected", &root]).unwrap();

    assert!(verified.contains(&root));
}

#[test]
fn test_verify_detects_tampering() {
    let dir = dir_with_files(5);
    let path = dir.path().to_string_lossy().to_string();
    let root = run(&["provebit", "root", &path]).unwrap();

    std::fs::write(dir.path().join("file_004.txt"), "tampered").unwrap();
    let result = run(&["provebit", "verify", &path, "--expected", &root]);

    assert!(matches!(result, Err(ApiError::RootMismatch { .. })));
}

#[test]
fn test_tree_json_metadata() {
    let dir = dir_with_nested(3, 2);
    let path = dir.path().to_string_lossy().to_string();

    let output = run(&["provebit", "tree", &path, "--recursive", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["file_count"], 5);
    assert_eq!(value["num_leaves"], 6);
    assert_eq!(value["height"], 3);
    assert_eq!(value["recursive"], true);
    assert_eq!(value["algorithm"], "sha256");
}

#[test]
fn test_leaves_json() {
    let dir = dir_with_files(3);
    let path = dir.path().to_string_lossy().to_string();

    let output = run(&["provebit", "leaves", &path, "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["file_count"], 3);
    assert_eq!(value["leaves"].as_array().unwrap().len(), 4);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = dir_with_files(0);
    let missing = dir.path().join("missing").to_string_lossy().to_string();

    assert!(run(&["provebit", "root", &missing]).is_err());
}

#[test]
fn test_config_command_renders_toml() {
    let output = run(&["provebit", "config"]).unwrap();
    assert!(output.contains("[tree]"));
    assert!(output.contains("algorithm = \"sha256\""));
}
