//! CLI route: single route table and run context.

use crate::catalog::CacheCatalog;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_cache_list, format_resolution, format_strategies, CacheRow, Resolution,
};
use crate::configuration::CompleteConfiguration;
use crate::error::ApiError;
use crate::settings::{Settings, SettingsLoader};
use crate::tree::ConfigTree;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded and validated settings.
pub struct RunContext {
    settings: Settings,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional settings path.
    pub fn new(workspace_root: PathBuf, settings_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let settings = match settings_path {
            Some(ref path) => SettingsLoader::load_from_file(path)?,
            None => SettingsLoader::load(&workspace_root)?,
        };
        Self::from_settings(settings, workspace_root)
    }

    /// Create run context from already loaded settings
    pub fn from_settings(settings: Settings, workspace_root: PathBuf) -> Result<Self, ApiError> {
        settings.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Settings validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            settings,
            workspace_root,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute a command and return its printable output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Resolve {
                file,
                name,
                format,
                path,
            } => self.handle_resolve(file, name, format, *path),
            Commands::List { file, format } => self.handle_list(file, format),
            Commands::Strategies => self.handle_strategies(),
        }
    }

    fn load_catalog(&self, file: &Path) -> Result<CacheCatalog, ApiError> {
        let file = if file.is_relative() {
            self.workspace_root.join(file)
        } else {
            file.to_path_buf()
        };
        let tree = ConfigTree::load(&file)?;
        Ok(self.settings.catalog(tree)?)
    }

    fn handle_resolve(
        &self,
        file: &Path,
        name: &str,
        format: &str,
        as_path: bool,
    ) -> Result<String, ApiError> {
        let catalog = self.load_catalog(file)?;
        let entity_path = if as_path {
            name.to_string()
        } else {
            catalog.entity_path(name)
        };
        debug!(cache = name, path = %entity_path, "Resolving cache from CLI");

        let (configuration, effective) = catalog
            .resolve_entity::<(), ()>(&entity_path)
            .map_err(|source| ApiError::Resolve {
                cache: name.to_string(),
                source,
            })?;

        let strategy = configuration
            .copy_strategy_factory()
            .map(|factory| factory.name().to_string())
            .unwrap_or_default();
        info!(cache = name, %strategy, "Resolved cache configuration");

        format_resolution(
            &Resolution {
                cache: name,
                entity_path: &entity_path,
                strategy: &strategy,
                effective: &effective,
            },
            format,
        )
    }

    fn handle_list(&self, file: &Path, format: &str) -> Result<String, ApiError> {
        let catalog = self.load_catalog(file)?;
        let rows: Vec<CacheRow> = catalog
            .cache_names()
            .into_iter()
            .map(|name| {
                let strategy = catalog
                    .configuration_for::<(), ()>(&name)
                    .map(|config| {
                        config
                            .copy_strategy_factory()
                            .map(|factory| factory.name().to_string())
                            .unwrap_or_default()
                    })
                    .map_err(|e| e.to_string());
                CacheRow { name, strategy }
            })
            .collect();
        format_cache_list(catalog.scope(), &rows, format)
    }

    fn handle_strategies(&self) -> Result<String, ApiError> {
        let registry = self.settings.strategy_registry()?;
        Ok(format_strategies(&registry.names(), &registry.aliases()))
    }
}
