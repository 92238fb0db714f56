//! Plain cache configuration without copy strategy binding

use super::{CompleteConfiguration, ExpiryPolicy, ListenerConfiguration};
use std::fmt;
use std::marker::PhantomData;

/// Generic cache settings
///
/// Defaults match a store-by-value cache with no loaders, writers,
/// statistics or management, and entries that never expire.
pub struct CacheConfiguration<K, V> {
    pub(crate) read_through: bool,
    pub(crate) write_through: bool,
    pub(crate) store_by_value: bool,
    pub(crate) statistics_enabled: bool,
    pub(crate) management_enabled: bool,
    pub(crate) expiry_policy: ExpiryPolicy,
    pub(crate) listeners: Vec<ListenerConfiguration>,
    types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> CacheConfiguration<K, V> {
    pub fn new() -> Self {
        Self {
            read_through: false,
            write_through: false,
            store_by_value: true,
            statistics_enabled: false,
            management_enabled: false,
            expiry_policy: ExpiryPolicy::Eternal,
            listeners: Vec::new(),
            types: PhantomData,
        }
    }

    /// Copy the base settings of any configuration variant
    pub fn from_complete(source: &dyn CompleteConfiguration<K, V>) -> Self {
        Self {
            read_through: source.is_read_through(),
            write_through: source.is_write_through(),
            store_by_value: source.is_store_by_value(),
            statistics_enabled: source.is_statistics_enabled(),
            management_enabled: source.is_management_enabled(),
            expiry_policy: *source.expiry_policy(),
            listeners: source.listener_configurations().to_vec(),
            types: PhantomData,
        }
    }

    /// Set read-through (builder pattern).
    #[must_use]
    pub fn with_read_through(mut self, enabled: bool) -> Self {
        self.read_through = enabled;
        self
    }

    /// Set write-through (builder pattern).
    #[must_use]
    pub fn with_write_through(mut self, enabled: bool) -> Self {
        self.write_through = enabled;
        self
    }

    /// Choose store-by-value or store-by-reference (builder pattern).
    #[must_use]
    pub fn with_store_by_value(mut self, enabled: bool) -> Self {
        self.store_by_value = enabled;
        self
    }

    #[must_use]
    pub fn with_statistics_enabled(mut self, enabled: bool) -> Self {
        self.statistics_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_management_enabled(mut self, enabled: bool) -> Self {
        self.management_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    /// Add a listener registration (builder pattern).
    #[must_use]
    pub fn with_listener(mut self, listener: ListenerConfiguration) -> Self {
        self.listeners.push(listener);
        self
    }
}

impl<K, V> CompleteConfiguration<K, V> for CacheConfiguration<K, V> {
    fn is_read_through(&self) -> bool {
        self.read_through
    }

    fn is_write_through(&self) -> bool {
        self.write_through
    }

    fn is_store_by_value(&self) -> bool {
        self.store_by_value
    }

    fn is_statistics_enabled(&self) -> bool {
        self.statistics_enabled
    }

    fn is_management_enabled(&self) -> bool {
        self.management_enabled
    }

    fn expiry_policy(&self) -> &ExpiryPolicy {
        &self.expiry_policy
    }

    fn listener_configurations(&self) -> &[ListenerConfiguration] {
        &self.listeners
    }
}

impl<K, V> Default for CacheConfiguration<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls so K and V need no Clone/PartialEq/Debug bounds
impl<K, V> Clone for CacheConfiguration<K, V> {
    fn clone(&self) -> Self {
        Self {
            read_through: self.read_through,
            write_through: self.write_through,
            store_by_value: self.store_by_value,
            statistics_enabled: self.statistics_enabled,
            management_enabled: self.management_enabled,
            expiry_policy: self.expiry_policy,
            listeners: self.listeners.clone(),
            types: PhantomData,
        }
    }
}

impl<K, V> PartialEq for CacheConfiguration<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.read_through == other.read_through
            && self.write_through == other.write_through
            && self.store_by_value == other.store_by_value
            && self.statistics_enabled == other.statistics_enabled
            && self.management_enabled == other.management_enabled
            && self.expiry_policy == other.expiry_policy
            && self.listeners == other.listeners
    }
}

impl<K, V> fmt::Debug for CacheConfiguration<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfiguration")
            .field("key_type", &std::any::type_name::<K>())
            .field("value_type", &std::any::type_name::<V>())
            .field("read_through", &self.read_through)
            .field("write_through", &self.write_through)
            .field("store_by_value", &self.store_by_value)
            .field("statistics_enabled", &self.statistics_enabled)
            .field("management_enabled", &self.management_enabled)
            .field("expiry_policy", &self.expiry_policy)
            .field("listeners", &self.listeners)
            .finish()
    }
}
