//! Configuration Tree
//!
//! Immutable, hierarchical configuration consumed by the overlay resolver.
//! Trees are shared behind an `Arc`, so cloning one is cheap and lookups
//! from many threads need no locking.

pub mod loader;
pub mod path;
pub mod value;

pub use path::{quote_key, ConfigPath};
pub use value::{ConfigObject, ConfigValue};

use crate::error::TreeError;
use std::sync::Arc;

/// Immutable configuration tree
#[derive(Debug, Clone)]
pub struct ConfigTree {
    root: Arc<ConfigObject>,
}

impl ConfigTree {
    /// Tree with no settings
    pub fn empty() -> Self {
        Self::from_object(ConfigObject::new())
    }

    /// Build a tree from an object, expanding dotted keys into nested objects
    ///
    /// Every key containing `.` is expanded, including keys that were quoted in
    /// the source document: TOML `[caches."orders.v2"]` lands at the path
    /// `caches.orders.v2`. A key holding a literal dot cannot be expressed.
    pub fn from_object(object: ConfigObject) -> Self {
        let mut root = ConfigObject::new();
        for (key, value) in object {
            value::insert_expanded(&mut root, &key, value);
        }
        Self {
            root: Arc::new(root),
        }
    }

    /// Build a tree from a JSON value. The value must be an object.
    pub fn from_json(json: serde_json::Value) -> Result<Self, TreeError> {
        match ConfigValue::from(json) {
            ConfigValue::Object(object) => Ok(Self::from_object(object)),
            other => Err(TreeError::Parse(format!(
                "root must be an object, found {}",
                other.type_name()
            ))),
        }
    }

    /// The root object
    pub fn root(&self) -> &ConfigObject {
        &self.root
    }

    /// Top-level keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// True when both trees share the same underlying storage
    pub fn ptr_eq(&self, other: &ConfigTree) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Whether a non-null value exists at `path`
    ///
    /// Fails only when `path` is not a valid path expression.
    pub fn has_path(&self, path: &str) -> Result<bool, TreeError> {
        let parsed = ConfigPath::parse(path)?;
        Ok(!matches!(self.find(&parsed), None | Some(ConfigValue::Null)))
    }

    /// Value at `path`
    pub fn get_value(&self, path: &str) -> Result<&ConfigValue, TreeError> {
        let parsed = ConfigPath::parse(path)?;
        match self.find(&parsed) {
            None | Some(ConfigValue::Null) => Err(TreeError::NotFound {
                path: path.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }

    /// Object at `path` as a tree of its own
    pub fn get_subtree(&self, path: &str) -> Result<ConfigTree, TreeError> {
        match self.get_value(path)? {
            ConfigValue::Object(object) => Ok(ConfigTree {
                root: Arc::new(object.clone()),
            }),
            other => Err(TreeError::TypeMismatch {
                path: path.to_string(),
                expected: "object",
                found: other.type_name(),
            }),
        }
    }

    /// String at `path`; booleans and numbers are rendered as text
    pub fn get_string(&self, path: &str) -> Result<String, TreeError> {
        let value = self.get_value(path)?;
        value.as_string().ok_or_else(|| TreeError::TypeMismatch {
            path: path.to_string(),
            expected: "string",
            found: value.type_name(),
        })
    }

    /// New tree where lookups check `self` first, then `fallback`.
    ///
    /// Objects present on both sides are merged key by key; for anything
    /// else the receiver's value wins.
    pub fn with_fallback(&self, fallback: &ConfigTree) -> ConfigTree {
        if fallback.is_empty() {
            return self.clone();
        }
        let mut merged = (*fallback.root).clone();
        overlay_object(&mut merged, &self.root);
        ConfigTree {
            root: Arc::new(merged),
        }
    }

    /// Render the tree as JSON
    pub fn to_json(&self) -> serde_json::Value {
        ConfigValue::Object((*self.root).clone()).to_json()
    }

    fn find(&self, path: &ConfigPath) -> Option<&ConfigValue> {
        let (last, parents) = path.segments().split_last()?;
        let mut current: &ConfigObject = &self.root;
        for segment in parents {
            current = current.get(segment)?.as_object()?;
        }
        current.get(last)
    }
}

impl PartialEq for ConfigTree {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.root == other.root
    }
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::empty()
    }
}

/// Write every value of `winner` over `base`, recursing where both hold objects
fn overlay_object(base: &mut ConfigObject, winner: &ConfigObject) {
    for (key, value) in winner {
        match (base.get_mut(key), value) {
            (Some(ConfigValue::Object(existing)), ConfigValue::Object(incoming)) => {
                overlay_object(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
