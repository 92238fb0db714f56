//! Integration tests for layered settings loading

use cacheconf::settings::{SettingsLoader, WORKSPACE_SETTINGS_FILE};
use tempfile::TempDir;

use crate::integration::{with_isolated_home, write_file};

#[test]
fn test_defaults_without_any_settings_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_isolated_home(&test_dir, || {
        let settings = SettingsLoader::load(workspace.path()).unwrap();
        assert_eq!(settings.catalog.scope, "caches");
        assert_eq!(settings.logging.format, "text");
        assert!(settings.strategies.aliases.is_empty());
    });
}

#[test]
fn test_global_settings_path_follows_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    with_isolated_home(&test_dir, || {
        let path = SettingsLoader::global_settings_path().unwrap();
        assert_eq!(
            path,
            test_dir
                .path()
                .join("config")
                .join("cacheconf")
                .join("settings.toml")
        );
    });
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_isolated_home(&test_dir, || {
        write_file(
            &test_dir.path().join("config"),
            "cacheconf/settings.toml",
            r#"
[catalog]
scope = "global_scope"

[strategies.aliases]
shared = "IdentityStrategy"
"#,
        );
        write_file(
            workspace.path(),
            WORKSPACE_SETTINGS_FILE,
            r#"
[catalog]
scope = "workspace_scope"
"#,
        );

        let settings = SettingsLoader::load(workspace.path()).unwrap();
        assert_eq!(settings.catalog.scope, "workspace_scope");
        // keys the workspace file leaves out still come from the global file
        assert_eq!(
            settings.strategies.aliases.get("shared").map(String::as_str),
            Some("IdentityStrategy")
        );
    });
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_isolated_home(&test_dir, || {
        write_file(
            workspace.path(),
            WORKSPACE_SETTINGS_FILE,
            "[catalog]\nscope = \"workspace_scope\"\n",
        );
        std::env::set_var("CACHECONF__CATALOG__SCOPE", "env_scope");

        let settings = SettingsLoader::load(workspace.path()).unwrap();
        assert_eq!(settings.catalog.scope, "env_scope");
    });
}

#[test]
fn test_load_validated_rejects_unknown_alias_target() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_isolated_home(&test_dir, || {
        write_file(
            workspace.path(),
            WORKSPACE_SETTINGS_FILE,
            "[strategies.aliases]\nturbo = \"TurboStrategy\"\n",
        );

        let err = SettingsLoader::load_validated(workspace.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("turbo"), "got: {}", message);
        assert!(message.contains("TurboStrategy"), "got: {}", message);
    });
}

#[test]
fn test_malformed_workspace_file_is_an_error() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_isolated_home(&test_dir, || {
        write_file(workspace.path(), WORKSPACE_SETTINGS_FILE, "[catalog\nscope = 1");
        assert!(SettingsLoader::load(workspace.path()).is_err());
    });
}
