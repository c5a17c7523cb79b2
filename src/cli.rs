//! CLI domain: parse, route, output, and presentation only.
//! No tree logic here; the route table dispatches to the tree builder.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat, TargetArgs};
pub use presentation::{format_leaves, format_root, format_tree, format_verify_success};
pub use route::RunContext;
