//! Single entry point for loading configuration.

use crate::config::merge;
use crate::config::sources::{environment, global_file};
use crate::config::ProvebitConfig;
use crate::error::ApiError;
use config::File;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and the environment.
    pub fn load() -> Result<ProvebitConfig, ApiError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from an explicit file; the global file is not read.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<ProvebitConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Path of the global config file, if a config directory can be found.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
