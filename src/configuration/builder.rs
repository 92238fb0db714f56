//! Builder for typed cache configurations

use super::{CacheConfiguration, ExpiryPolicy, ListenerConfiguration, TypedCacheConfiguration};
use crate::copy::CopyStrategy;
use crate::factory::FactoryHandle;

/// Accumulates settings and produces a [`TypedCacheConfiguration`]
#[must_use]
pub struct CacheConfigurationBuilder<K, V> {
    configuration: TypedCacheConfiguration<K, V>,
}

impl<K, V> CacheConfigurationBuilder<K, V> {
    pub fn new() -> Self {
        Self::from_configuration(TypedCacheConfiguration::new())
    }

    pub(crate) fn from_configuration(configuration: TypedCacheConfiguration<K, V>) -> Self {
        Self { configuration }
    }

    fn map_base(
        mut self,
        f: impl FnOnce(CacheConfiguration<K, V>) -> CacheConfiguration<K, V>,
    ) -> Self {
        let base = std::mem::take(&mut self.configuration.base);
        self.configuration.base = f(base);
        self
    }

    pub fn read_through(self, enabled: bool) -> Self {
        self.map_base(|base| base.with_read_through(enabled))
    }

    pub fn write_through(self, enabled: bool) -> Self {
        self.map_base(|base| base.with_write_through(enabled))
    }

    pub fn store_by_value(self, enabled: bool) -> Self {
        self.map_base(|base| base.with_store_by_value(enabled))
    }

    pub fn statistics_enabled(self, enabled: bool) -> Self {
        self.map_base(|base| base.with_statistics_enabled(enabled))
    }

    pub fn management_enabled(self, enabled: bool) -> Self {
        self.map_base(|base| base.with_management_enabled(enabled))
    }

    pub fn expiry_policy(self, policy: ExpiryPolicy) -> Self {
        self.map_base(|base| base.with_expiry_policy(policy))
    }

    pub fn listener(self, listener: ListenerConfiguration) -> Self {
        self.map_base(|base| base.with_listener(listener))
    }

    pub fn copy_strategy_factory(mut self, factory: FactoryHandle<dyn CopyStrategy>) -> Self {
        self.configuration.copy_strategy_factory = Some(factory);
        self
    }

    pub fn clear_copy_strategy_factory(mut self) -> Self {
        self.configuration.copy_strategy_factory = None;
        self
    }

    pub fn build(self) -> TypedCacheConfiguration<K, V> {
        self.configuration
    }
}

impl<K, V> Default for CacheConfigurationBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
