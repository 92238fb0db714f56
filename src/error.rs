//! Error types for cache configuration resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration tree errors
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("No configuration setting found for key '{path}'")]
    NotFound { path: String },

    #[error("Configuration key '{path}' has type {found} rather than {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid path '{path}': {reason}")]
    BadPath { path: String, reason: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Unsupported configuration format: {0:?} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeError {
    /// True for a path that is absent at every scope checked.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }
}

/// Extension-point registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unresolvable factory '{name}' (known: {})", known.join(", "))]
    UnresolvableFactory { name: String, known: Vec<String> },

    #[error("Alias '{alias}' targets unknown factory '{target}'")]
    DanglingAlias { alias: String, target: String },

    #[error("Alias '{alias}' is already the name of a registered factory")]
    AliasShadowsFactory { alias: String },
}

/// Errors raised while building a typed cache configuration
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Copy strategy errors
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Failed to encode value for copying: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode copied value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Top-level errors surfaced by the settings loader and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to resolve cache '{cache}': {source}")]
    Resolve {
        cache: String,
        #[source]
        source: ResolveError,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
