//! Workspace settings file: cacheconf.toml in the workspace root

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// File name of the workspace settings file
pub const WORKSPACE_SETTINGS_FILE: &str = "cacheconf.toml";

pub fn workspace_settings_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(WORKSPACE_SETTINGS_FILE)
}

/// Add the workspace settings file to the builder.
/// Layered after the global file, so workspace values win.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_settings_path(workspace_root);
    if path.exists() {
        return Ok(builder.add_source(File::from(path.as_path()).required(false)));
    }
    Ok(builder)
}
