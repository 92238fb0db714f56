//! CLI presentation: text and json formatters per command.

use crate::error::ApiError;
use crate::tree::ConfigTree;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

/// Outcome of resolving one cache
pub struct Resolution<'a> {
    pub cache: &'a str,
    pub entity_path: &'a str,
    pub strategy: &'a str,
    pub effective: &'a ConfigTree,
}

/// One line of `list` output
pub struct CacheRow {
    pub name: String,
    pub strategy: Result<String, String>,
}

fn to_pretty_json(value: &serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to render JSON: {}", e)))
}

pub fn format_resolution(resolution: &Resolution<'_>, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_pretty_json(&json!({
            "cache": resolution.cache,
            "path": resolution.entity_path,
            "strategy": resolution.strategy,
            "effective": resolution.effective.to_json(),
        }));
    }

    let effective = to_pretty_json(&resolution.effective.to_json())?;
    Ok(format!(
        "Cache: {}\n  Path: {}\n  Copy strategy: {}\n\nEffective configuration:\n{}",
        resolution.cache, resolution.entity_path, resolution.strategy, effective
    ))
}

pub fn format_cache_list(scope: &str, rows: &[CacheRow], format: &str) -> Result<String, ApiError> {
    if format == "json" {
        let caches: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| match &row.strategy {
                Ok(strategy) => json!({ "name": row.name, "strategy": strategy }),
                Err(error) => json!({ "name": row.name, "error": error }),
            })
            .collect();
        return to_pretty_json(&json!({ "scope": scope, "caches": caches }));
    }

    if rows.is_empty() {
        return Ok(format!("No caches defined under '{}'.", scope));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Cache", "Copy strategy"]);
    for row in rows {
        let strategy = match &row.strategy {
            Ok(strategy) => strategy.clone(),
            Err(error) => format!("error: {}", error),
        };
        table.add_row(vec![row.name.clone(), strategy]);
    }
    Ok(table.to_string())
}

pub fn format_strategies(names: &[String], aliases: &[(String, String)]) -> String {
    let mut lines = vec!["Copy strategies:".to_string()];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    if !aliases.is_empty() {
        lines.push(String::new());
        lines.push("Aliases:".to_string());
        lines.extend(
            aliases
                .iter()
                .map(|(alias, target)| format!("  {} -> {}", alias, target)),
        );
    }
    lines.join("\n")
}
