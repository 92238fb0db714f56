//! Settings System
//!
//! Settings of the cacheconf tool itself: logging, the catalog scope and
//! strategy aliases. Loaded in layers (defaults, global file, workspace file,
//! environment) with the `config` crate. Cache trees are not read through here;
//! see [`crate::tree`].

use crate::catalog::CacheCatalog;
use crate::copy::{self, CopyStrategy};
use crate::error::{ApiError, RegistryError};
use crate::factory::FactoryRegistry;
use crate::logging::LoggingConfig;
use crate::tree::{ConfigPath, ConfigTree};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;
mod sources;

pub use merge::ENV_PREFIX;
pub use sources::workspace_file::WORKSPACE_SETTINGS_FILE;

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where caches are defined in a configuration tree
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Extra names for copy strategies
    #[serde(default)]
    pub strategies: StrategySettings,
}

/// Catalog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Key holding the cache definitions; empty for top-level caches
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    crate::catalog::DEFAULT_SCOPE.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            scope: default_scope(),
        }
    }
}

/// Strategy settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Alias name to registered strategy name
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Settings validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Catalog(String),
    Strategy(String, String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Catalog(msg) => write!(f, "Catalog: {}", msg),
            ValidationError::Strategy(alias, msg) => write!(f, "Strategy alias '{}': {}", alias, msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Settings {
    /// Validate the entire settings structure
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !self.catalog.scope.is_empty() {
            if let Err(e) = ConfigPath::parse(&self.catalog.scope) {
                errors.push(ValidationError::Catalog(e.to_string()));
            }
        }

        let builtins = copy::builtin_registry();
        let mut aliases: Vec<_> = self.strategies.aliases.iter().collect();
        aliases.sort();
        for (alias, target) in aliases {
            if alias.trim().is_empty() {
                errors.push(ValidationError::Strategy(
                    alias.clone(),
                    "alias name cannot be empty".to_string(),
                ));
            } else if builtins.names().contains(alias) {
                errors.push(ValidationError::Strategy(
                    alias.clone(),
                    "alias name is already a registered strategy".to_string(),
                ));
            } else if !builtins.contains(target) {
                errors.push(ValidationError::Strategy(
                    alias.clone(),
                    format!(
                        "unknown strategy '{}' (known: {})",
                        target,
                        builtins.names().join(", ")
                    ),
                ));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Built-in strategies plus the configured aliases
    pub fn strategy_registry(&self) -> Result<FactoryRegistry<dyn CopyStrategy>, RegistryError> {
        let registry = copy::builtin_registry();
        let mut aliases: Vec<_> = self.strategies.aliases.iter().collect();
        aliases.sort();
        for (alias, target) in aliases {
            registry.alias(alias.clone(), target)?;
        }
        Ok(registry)
    }

    /// Catalog over `tree` using these settings
    pub fn catalog(&self, tree: ConfigTree) -> Result<CacheCatalog, RegistryError> {
        Ok(CacheCatalog::with_registry(tree, self.strategy_registry()?)
            .with_scope(self.catalog.scope.clone()))
    }
}

/// Loads [`Settings`] from layered sources
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings for a workspace
    ///
    /// Precedence (lowest to highest): defaults, global settings file,
    /// `<workspace>/cacheconf.toml`, `CACHECONF__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<Settings, ApiError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let settings: Settings = builder
            .add_source(merge::environment())
            .build()?
            .try_deserialize()?;

        debug!(workspace = %workspace_root.display(), scope = %settings.catalog.scope, "Loaded settings");
        Ok(settings)
    }

    /// Load settings from an explicit file, still honouring environment overrides
    pub fn load_from_file(path: &Path) -> Result<Settings, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }

        let settings: Settings = merge::builder_with_defaults()?
            .add_source(config::File::from(path).required(true))
            .add_source(merge::environment())
            .build()?
            .try_deserialize()?;

        debug!(path = %path.display(), "Loaded settings from file");
        Ok(settings)
    }

    /// Location of the global settings file, if a home directory is known
    pub fn global_settings_path() -> Option<PathBuf> {
        sources::global_file::global_settings_path()
    }

    /// Load and validate, folding validation errors into one message
    pub fn load_validated(workspace_root: &Path) -> Result<Settings, ApiError> {
        let settings = Self::load(workspace_root)?;
        settings.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Settings validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(settings)
    }
}
