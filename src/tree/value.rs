//! Configuration values held by a [`ConfigTree`](super::ConfigTree)

use std::collections::BTreeMap;
use std::fmt;

/// Object node: keys sorted for deterministic rendering
pub type ConfigObject = BTreeMap<String, ConfigValue>;

/// A single configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Object(ConfigObject),
}

impl ConfigValue {
    /// Human-readable type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) | ConfigValue::Float(_) => "number",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Object(_) => "object",
        }
    }

    pub fn as_object(&self) -> Option<&ConfigObject> {
        match self {
            ConfigValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Scalar rendered as a string; booleans and numbers coerce.
    pub fn as_string(&self) -> Option<String> {
        match self {
            ConfigValue::String(s) => Some(s.clone()),
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::Integer(i) => Some(i.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    /// Render as JSON for display
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::Null => serde_json::Value::Null,
            ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
            ConfigValue::Integer(i) => serde_json::Value::from(*i),
            ConfigValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ConfigValue::String(s) => serde_json::Value::String(s.clone()),
            ConfigValue::List(items) => {
                serde_json::Value::Array(items.iter().map(ConfigValue::to_json).collect())
            }
            ConfigValue::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_string() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{}", self.to_json()),
        }
    }
}

/// Insert `value` at `key`, expanding dotted keys into nested objects.
///
/// Objects that meet at the same key are merged; otherwise the later value wins.
pub(crate) fn insert_expanded(target: &mut ConfigObject, key: &str, value: ConfigValue) {
    let value = expand(value);
    match key.split_once('.') {
        Some((head, rest)) if !head.is_empty() && !rest.is_empty() => {
            let entry = target
                .entry(head.to_string())
                .or_insert_with(|| ConfigValue::Object(ConfigObject::new()));
            if !matches!(entry, ConfigValue::Object(_)) {
                *entry = ConfigValue::Object(ConfigObject::new());
            }
            if let ConfigValue::Object(child) = entry {
                insert_expanded(child, rest, value);
            }
        }
        _ => merge_into(target, key.to_string(), value),
    }
}

fn merge_into(target: &mut ConfigObject, key: String, value: ConfigValue) {
    match (target.get_mut(&key), value) {
        (Some(ConfigValue::Object(existing)), ConfigValue::Object(incoming)) => {
            for (k, v) in incoming {
                merge_into(existing, k, v);
            }
        }
        (_, value) => {
            target.insert(key, value);
        }
    }
}

fn expand(value: ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Object(map) => {
            let mut expanded = ConfigObject::new();
            for (k, v) in map {
                insert_expanded(&mut expanded, &k, v);
            }
            ConfigValue::Object(expanded)
        }
        ConfigValue::List(items) => ConfigValue::List(items.into_iter().map(expand).collect()),
        other => other,
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ConfigValue::Null,
            serde_json::Value::Bool(b) => ConfigValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => ConfigValue::String(s),
            serde_json::Value::Array(items) => {
                ConfigValue::List(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => ConfigValue::String(s),
            toml::Value::Integer(i) => ConfigValue::Integer(i),
            toml::Value::Float(f) => ConfigValue::Float(f),
            toml::Value::Boolean(b) => ConfigValue::Bool(b),
            toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
            toml::Value::Array(items) => {
                ConfigValue::List(items.into_iter().map(ConfigValue::from).collect())
            }
            toml::Value::Table(table) => ConfigValue::Object(
                table
                    .into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}
