//! CLI parse: clap types for ProveBit. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ProveBit CLI - Tamper-evident directory fingerprints
#[derive(Parser, Debug)]
#[command(name = "provebit")]
#[command(about = "Tamper-evident directory fingerprints using Merkle trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the root hash of a directory
    Root {
        #[command(flatten)]
        target: TargetArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print tree metadata and every populated node
    Tree {
        #[command(flatten)]
        target: TargetArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the sorted leaf digests
    Leaves {
        #[command(flatten)]
        target: TargetArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check a directory against a previously recorded root hash
    Verify {
        #[command(flatten)]
        target: TargetArgs,
        /// Expected root hash (64 hex characters)
        #[arg(long)]
        expected: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Directory selection and build options shared by the tree commands
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Directory to fingerprint
    pub dir: PathBuf,

    /// Include files in nested subdirectories
    #[arg(long, short)]
    pub recursive: bool,

    /// Digest algorithm (sha256, blake3)
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Leave unreadable files out instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
