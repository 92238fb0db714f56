//! Copy strategies for store-by-value caches.
//!
//! A strategy decides how a cached value is duplicated when it crosses the
//! cache boundary. Strategies are bound by name through a
//! [`FactoryRegistry`] and created by the cache engine when it needs one.

use crate::error::CopyError;
use crate::factory::FactoryRegistry;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Registry name of [`IdentityStrategy`]
pub const IDENTITY_STRATEGY: &str = "IdentityStrategy";

/// Registry name of [`DeepCopyStrategy`]
pub const DEEP_COPY_STRATEGY: &str = "DeepCopyStrategy";

/// Policy for duplicating cache entries
pub trait CopyStrategy: Send + Sync {
    /// Produce a copy of an encoded value
    fn copy_json(&self, value: serde_json::Value) -> Result<serde_json::Value, CopyError>;

    /// Strategies returning true hand out the stored value itself
    fn shares_values(&self) -> bool {
        false
    }
}

impl dyn CopyStrategy {
    /// Copy a value according to this strategy
    pub fn copy<T>(&self, value: &Arc<T>) -> Result<Arc<T>, CopyError>
    where
        T: Serialize + DeserializeOwned,
    {
        if self.shares_values() {
            return Ok(Arc::clone(value));
        }
        let encoded = serde_json::to_value(value.as_ref()).map_err(CopyError::Encode)?;
        let copied = self.copy_json(encoded)?;
        let decoded = serde_json::from_value(copied).map_err(CopyError::Decode)?;
        Ok(Arc::new(decoded))
    }
}

/// Shares values without copying
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStrategy;

impl CopyStrategy for IdentityStrategy {
    fn copy_json(&self, value: serde_json::Value) -> Result<serde_json::Value, CopyError> {
        Ok(value)
    }

    fn shares_values(&self) -> bool {
        true
    }
}

/// Copies values through their serialized form
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepCopyStrategy;

impl CopyStrategy for DeepCopyStrategy {
    fn copy_json(&self, value: serde_json::Value) -> Result<serde_json::Value, CopyError> {
        Ok(value)
    }
}

/// Registry holding the built-in strategies under their type names
pub fn builtin_registry() -> FactoryRegistry<dyn CopyStrategy> {
    let registry: FactoryRegistry<dyn CopyStrategy> = FactoryRegistry::new();
    registry.register(IDENTITY_STRATEGY, || {
        Box::new(IdentityStrategy) as Box<dyn CopyStrategy>
    });
    registry.register(DEEP_COPY_STRATEGY, || {
        Box::new(DeepCopyStrategy) as Box<dyn CopyStrategy>
    });
    registry
}
