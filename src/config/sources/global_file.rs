//! Global config file source: $XDG_CONFIG_HOME/provebit/config.toml or ~/.config/provebit/config.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::PathBuf;
use tracing::debug;

/// Directory holding the global config files.
///
/// `XDG_CONFIG_HOME` wins, then `~/.config`, then the platform config dir.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("provebit"));
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("provebit"));
    }
    directories::ProjectDirs::from("org", "provebit", "provebit")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Add the global config file, then `{PROVEBIT_ENV}.toml` beside it, when present.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(dir) = config_dir() else {
        return Ok(builder);
    };

    let base_config_path = dir.join("config.toml");
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    } else {
        debug!(config_path = %base_config_path.display(), "No global configuration file");
    }

    if let Ok(env_name) = std::env::var("PROVEBIT_ENV") {
        let env_config_path = dir.join(format!("{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path).required(false));
        }
    }

    Ok(builder)
}
