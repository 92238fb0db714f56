//! Global settings file: $XDG_CONFIG_HOME/cacheconf/settings.toml or ~/.config/cacheconf/settings.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global settings file.
pub fn global_settings_path() -> Option<PathBuf> {
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".config"))
        })?;
    Some(config_home.join("cacheconf").join("settings.toml"))
}

/// Add the global settings file to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_settings_path() {
        if path.exists() {
            debug!(settings_path = %path.display(), "Using global settings file");
            builder = builder.add_source(File::from(path.as_path()).required(false));
        } else {
            debug!(
                settings_path = %path.display(),
                "No global settings file; using defaults"
            );
        }
    }
    Ok(builder)
}
