//! Reading configuration trees from TOML and JSON documents

use super::{ConfigTree, ConfigValue};
use crate::error::TreeError;
use std::path::Path;
use tracing::debug;

impl ConfigTree {
    /// Parse a TOML document
    pub fn parse_toml(source: &str) -> Result<Self, TreeError> {
        let table: toml::Table =
            toml::from_str(source).map_err(|e| TreeError::Parse(e.to_string()))?;
        match ConfigValue::from(toml::Value::Table(table)) {
            ConfigValue::Object(object) => Ok(Self::from_object(object)),
            _ => Err(TreeError::Parse("TOML root must be a table".to_string())),
        }
    }

    /// Parse a JSON document
    pub fn parse_json(source: &str) -> Result<Self, TreeError> {
        let json: serde_json::Value =
            serde_json::from_str(source).map_err(|e| TreeError::Parse(e.to_string()))?;
        Self::from_json(json)
    }

    /// Load a tree from disk, choosing the format by file extension
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, TreeError> = match extension.as_deref() {
            Some("toml") => Self::parse_toml,
            Some("json") => Self::parse_json,
            _ => return Err(TreeError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path)?;
        let tree = parse(&source)?;
        debug!(path = %path.display(), keys = tree.root().len(), "Loaded configuration tree");
        Ok(tree)
    }
}
