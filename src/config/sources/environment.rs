//! Environment source: PROVEBIT__TREE__RECURSIVE=true style overrides

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("PROVEBIT")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
