//! Merge rules: defaults and override order.
//!
//! Later sources win: defaults, global file, environment-specific file,
//! then `PROVEBIT__*` environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("tree.recursive", false)?
        .set_default("tree.algorithm", "sha256")?
        .set_default("tree.follow_symlinks", false)?
        .set_default("tree.on_unreadable", "abort")?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
