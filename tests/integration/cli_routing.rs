//! Integration tests for CLI command routing

use cacheconf::cli::{map_error, Commands, RunContext};
use cacheconf::settings::Settings;
use cacheconf::ApiError;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::write_file;

const CACHES_TOML: &str = r#"
"storeByValue.strategy" = "IdentityStrategy"
maximumSize = 100

[caches.orders]
"storeByValue.strategy" = "DeepCopyStrategy"

[caches.users]
maximumSize = 10

[caches.legacy]
"storeByValue.strategy" = "fast"
"#;

fn context(workspace: &TempDir) -> RunContext {
    RunContext::from_settings(Settings::default(), workspace.path().to_path_buf()).unwrap()
}

fn resolve(name: &str, format: &str, path: bool) -> Commands {
    Commands::Resolve {
        file: PathBuf::from("caches.toml"),
        name: name.to_string(),
        format: format.to_string(),
        path,
    }
}

#[test]
fn test_resolve_text_output() {
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "caches.toml", CACHES_TOML);

    let output = context(&workspace)
        .execute(&resolve("orders", "text", false))
        .unwrap();
    assert!(output.contains("Cache: orders"));
    assert!(output.contains("Path: caches.orders"));
    assert!(output.contains("Copy strategy: DeepCopyStrategy"));
}

#[test]
fn test_resolve_json_output_includes_effective_tree() {
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "caches.toml", CACHES_TOML);

    let output = context(&workspace)
        .execute(&resolve("users", "json", false))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["strategy"], "IdentityStrategy");
    assert_eq!(parsed["effective"]["maximumSize"], 10);
}

#[test]
fn test_resolve_with_full_path() {
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "caches.toml", CACHES_TOML);

    let output = context(&workspace)
        .execute(&resolve("caches.orders", "json", true))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["strategy"], "DeepCopyStrategy");
}

#[test]
fn test_resolve_unknown_strategy_reports_hint() {
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "caches.toml", CACHES_TOML);

    let err = context(&workspace)
        .execute(&resolve("legacy", "text", false))
        .unwrap_err();
    assert!(matches!(err, ApiError::Resolve { ref cache, .. } if cache == "legacy"));
    assert!(map_error(&err).contains("cacheconf strategies"));
}

#[test]
fn test_aliases_from_settings_apply_to_resolution() {
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "caches.toml", CACHES_TOML);
    let mut settings = Settings::default();
    settings
        .strategies
        .aliases
        .insert("fast".to_string(), "IdentityStrategy".to_string());
    let context = RunContext::from_settings(settings, workspace.path().to_path_buf()).unwrap();

    let output = context.execute(&resolve("legacy", "text", false)).unwrap();
    assert!(output.contains("Copy strategy: IdentityStrategy"));
}

#[test]
fn test_list_reports_each_cache() {
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "caches.toml", CACHES_TOML);

    let output = context(&workspace)
        .execute(&Commands::List {
            file: PathBuf::from("caches.toml"),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let caches = parsed["caches"].as_array().unwrap();
    assert_eq!(caches.len(), 3);
    assert_eq!(caches[0]["name"], "legacy");
    assert!(caches[0]["error"].is_string());
    assert_eq!(caches[1]["strategy"], "DeepCopyStrategy");
    assert_eq!(caches[2]["strategy"], "IdentityStrategy");
}

#[test]
fn test_strategies_lists_builtins() {
    let workspace = TempDir::new().unwrap();
    let output = context(&workspace).execute(&Commands::Strategies).unwrap();
    assert!(output.contains("DeepCopyStrategy"));
    assert!(output.contains("IdentityStrategy"));
}

#[test]
fn test_missing_tree_file_is_an_error() {
    let workspace = TempDir::new().unwrap();
    let err = context(&workspace)
        .execute(&resolve("orders", "text", false))
        .unwrap_err();
    assert!(matches!(err, ApiError::Tree(_)));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let workspace = TempDir::new().unwrap();
    let mut settings = Settings::default();
    settings.logging.format = "yaml".to_string();
    let result = RunContext::from_settings(settings, workspace.path().to_path_buf());
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn test_cache_names_with_spaces_resolve_their_own_strategy() {
    let workspace = TempDir::new().unwrap();
    write_file(
        workspace.path(),
        "spaced.toml",
        r#"
"storeByValue.strategy" = "IdentityStrategy"

[caches."my cache".storeByValue]
strategy = "DeepCopyStrategy"
"#,
    );
    let context = context(&workspace);

    let output = context
        .execute(&Commands::List {
            file: PathBuf::from("spaced.toml"),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["caches"][0]["name"], "my cache");
    assert_eq!(parsed["caches"][0]["strategy"], "DeepCopyStrategy");

    let output = context
        .execute(&Commands::Resolve {
            file: PathBuf::from("spaced.toml"),
            name: "my cache".to_string(),
            format: "json".to_string(),
            path: false,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["path"], "caches.\"my cache\"");
    assert_eq!(parsed["strategy"], "DeepCopyStrategy");
    assert_eq!(parsed["effective"]["storeByValue"]["strategy"], "DeepCopyStrategy");
}

#[test]
fn test_alias_shadowing_a_strategy_is_rejected() {
    let workspace = TempDir::new().unwrap();
    let mut settings = Settings::default();
    settings
        .strategies
        .aliases
        .insert("IdentityStrategy".to_string(), "DeepCopyStrategy".to_string());
    let result = RunContext::from_settings(settings, workspace.path().to_path_buf());
    match result {
        Err(ApiError::ConfigError(message)) => {
            assert!(message.contains("IdentityStrategy"), "got: {}", message)
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("shadowing alias should fail validation"),
    }
}
