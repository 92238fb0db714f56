//! Cache configuration with a bound copy strategy factory

use super::{CacheConfiguration, CacheConfigurationBuilder, CompleteConfiguration};
use super::{ExpiryPolicy, ListenerConfiguration};
use crate::copy::{self, CopyStrategy};
use crate::error::ResolveError;
use crate::factory::{FactoryHandle, FactoryRegistry};
use crate::overlay;
use crate::tree::ConfigTree;
use std::fmt;
use tracing::debug;

/// Required key naming the copy strategy of a cache
pub const STRATEGY_KEY: &str = "storeByValue.strategy";

/// Cache settings plus the copy strategy factory
///
/// Holding the factory never creates a strategy; the cache engine calls
/// [`FactoryHandle::create`] when it needs one.
pub struct TypedCacheConfiguration<K, V> {
    pub(crate) base: CacheConfiguration<K, V>,
    pub(crate) copy_strategy_factory: Option<FactoryHandle<dyn CopyStrategy>>,
}

impl<K, V> TypedCacheConfiguration<K, V> {
    /// All defaults, no copy strategy
    pub fn new() -> Self {
        Self {
            base: CacheConfiguration::new(),
            copy_strategy_factory: None,
        }
    }

    /// Upgrade any configuration into the typed form.
    ///
    /// Base settings are copied. The copy strategy factory is shared with the
    /// source when it carries one and left unset otherwise.
    pub fn from_complete(source: &dyn CompleteConfiguration<K, V>) -> Self {
        Self {
            base: CacheConfiguration::from_complete(source),
            copy_strategy_factory: source.copy_strategy_factory().cloned(),
        }
    }

    /// Resolve the configuration of the cache `entity_name` from `global`.
    ///
    /// The cache's own sub-tree overrides the global settings. The required
    /// `storeByValue.strategy` key names a factory in `registry`.
    pub fn from_config(
        global: &ConfigTree,
        entity_name: &str,
        registry: &FactoryRegistry<dyn CopyStrategy>,
    ) -> Result<Self, ResolveError> {
        let effective = overlay::resolve(global, entity_name)?;
        let configuration = Self::from_effective(&effective, registry)?;
        debug!(entity = entity_name, "Resolved cache configuration");
        Ok(configuration)
    }

    /// Build from a tree the overlay has already produced
    pub fn from_effective(
        effective: &ConfigTree,
        registry: &FactoryRegistry<dyn CopyStrategy>,
    ) -> Result<Self, ResolveError> {
        let strategy = effective.get_string(STRATEGY_KEY)?;
        let factory = registry.resolve(&strategy)?;

        debug!(strategy = factory.name(), "Resolved copy strategy");
        Ok(Self::new().with_copy_strategy_factory(Some(factory)))
    }

    /// [`from_config`](Self::from_config) against the built-in strategies
    pub fn from_config_with_builtins(
        global: &ConfigTree,
        entity_name: &str,
    ) -> Result<Self, ResolveError> {
        Self::from_config(global, entity_name, &copy::builtin_registry())
    }

    pub fn builder() -> CacheConfigurationBuilder<K, V> {
        CacheConfigurationBuilder::new()
    }

    /// Builder seeded with this configuration's settings
    pub fn to_builder(&self) -> CacheConfigurationBuilder<K, V> {
        CacheConfigurationBuilder::from_configuration(self.clone())
    }

    /// Replace the copy strategy factory (builder pattern).
    #[must_use]
    pub fn with_copy_strategy_factory(
        mut self,
        factory: Option<FactoryHandle<dyn CopyStrategy>>,
    ) -> Self {
        self.copy_strategy_factory = factory;
        self
    }

    /// The plain settings without the copy strategy
    pub fn base(&self) -> &CacheConfiguration<K, V> {
        &self.base
    }
}

impl<K, V> CompleteConfiguration<K, V> for TypedCacheConfiguration<K, V> {
    fn is_read_through(&self) -> bool {
        self.base.is_read_through()
    }

    fn is_write_through(&self) -> bool {
        self.base.is_write_through()
    }

    fn is_store_by_value(&self) -> bool {
        self.base.is_store_by_value()
    }

    fn is_statistics_enabled(&self) -> bool {
        self.base.is_statistics_enabled()
    }

    fn is_management_enabled(&self) -> bool {
        self.base.is_management_enabled()
    }

    fn expiry_policy(&self) -> &ExpiryPolicy {
        self.base.expiry_policy()
    }

    fn listener_configurations(&self) -> &[ListenerConfiguration] {
        self.base.listener_configurations()
    }

    fn copy_strategy_factory(&self) -> Option<&FactoryHandle<dyn CopyStrategy>> {
        self.copy_strategy_factory.as_ref()
    }
}

impl<K, V> Default for TypedCacheConfiguration<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for TypedCacheConfiguration<K, V> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            copy_strategy_factory: self.copy_strategy_factory.clone(),
        }
    }
}

impl<K, V> PartialEq for TypedCacheConfiguration<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.copy_strategy_factory == other.copy_strategy_factory
    }
}

impl<K, V> fmt::Debug for TypedCacheConfiguration<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCacheConfiguration")
            .field("base", &self.base)
            .field("copy_strategy_factory", &self.copy_strategy_factory)
            .finish()
    }
}
