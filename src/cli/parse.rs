//! CLI parse: clap types for cacheconf. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cacheconf CLI - Resolve per-cache configuration
#[derive(Parser, Debug)]
#[command(name = "cacheconf")]
#[command(about = "Resolve per-cache configuration with overlay fallback and named copy strategies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where cacheconf.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Settings file path (overrides default settings loading)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the configuration of one cache
    Resolve {
        /// Configuration tree (.toml or .json)
        file: PathBuf,
        /// Cache name, resolved under the catalog scope
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Treat NAME as a full entity path instead of a name under the scope
        #[arg(long)]
        path: bool,
    },
    /// List caches defined under the catalog scope with their strategies
    List {
        /// Configuration tree (.toml or .json)
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show registered copy strategies and aliases
    Strategies,
}
