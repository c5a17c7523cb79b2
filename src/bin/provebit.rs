//! ProveBit CLI Binary
//!
//! Command-line interface for computing and verifying directory fingerprints.

use clap::Parser;
use provebit::cli::{Cli, RunContext};
use provebit::config::{ConfigLoader, ProvebitConfig};
use provebit::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", provebit::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }
    config.logging = logging_config;

    info!("ProveBit CLI starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("{}", provebit::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", provebit::cli::map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<ProvebitConfig, provebit::error::ApiError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &ProvebitConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
