//! Cacheconf CLI Binary
//!
//! Command-line interface for inspecting per-cache configuration.

use cacheconf::cli::{Cli, RunContext};
use cacheconf::logging::{init_logging, LoggingConfig};
use cacheconf::settings::SettingsLoader;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and the settings file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("cacheconf starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.settings.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading settings: {}", e);
            eprintln!("{}", cacheconf::cli::map_error(&e));
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
            eprintln!("{}", cacheconf::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and settings.
/// Precedence: CLI flags override the settings file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = match cli.settings {
        Some(ref path) => SettingsLoader::load_from_file(path)
            .ok()
            .map(|s| s.logging)
            .unwrap_or_default(),
        None => SettingsLoader::load(&cli.workspace)
            .ok()
            .map(|s| s.logging)
            .unwrap_or_default(),
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
