//! ProveBit: Tamper-Evident Directory Fingerprints
//!
//! Computes a deterministic Merkle root over the files of a directory so that
//! any later change to file contents or membership shows up as a different
//! root hash.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tracker;
pub mod tree;
pub mod types;
