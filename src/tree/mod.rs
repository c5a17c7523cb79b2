//! Directory Merkle Tree
//!
//! Fingerprints the regular files of a directory: each file's digest is a
//! leaf, leaves are put in canonical order, and internal nodes hash their
//! two children up to a single root.

pub mod arena;
pub mod builder;
pub mod hasher;
pub mod leaves;
pub mod levels;
pub mod shape;
pub mod walker;
