//! Shared helpers for building test directories

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create `count` files with distinct content directly under `root`.
pub fn write_distinct_files(root: &Path, count: usize) {
    for i in 0..count {
        fs::write(root.join(format!("file_{:03}.txt", i)), format!("distinct content #{}", i))
            .unwrap();
    }
}

/// Temporary directory holding `count` distinct files.
pub fn dir_with_files(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_distinct_files(temp_dir.path(), count);
    temp_dir
}

/// Directory with `top` files at the root and `nested` files in `sub/`.
pub fn dir_with_nested(top: usize, nested: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_distinct_files(temp_dir.path(), top);
    let sub = temp_dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    for i in 0..nested {
        fs::write(sub.join(format!("nested_{}.txt", i)), format!("nested content #{}", i)).unwrap();
    }
    temp_dir
}
