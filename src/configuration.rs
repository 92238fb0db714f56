//! Cache Configuration
//!
//! Strongly-typed cache settings handed to the caching engine. The base shape
//! ([`CacheConfiguration`]) carries the generic cache options; the typed form
//! ([`TypedCacheConfiguration`]) adds the copy strategy factory resolved from a
//! configuration tree.

use crate::copy::CopyStrategy;
use crate::factory::FactoryHandle;

mod base;
mod builder;
mod expiry;
mod typed;

pub use base::CacheConfiguration;
pub use builder::CacheConfigurationBuilder;
pub use expiry::{ExpiryPolicy, ListenerConfiguration};
pub use typed::{TypedCacheConfiguration, STRATEGY_KEY};

/// Capability set shared by every cache configuration variant
///
/// The copy constructors read a source through this trait only, so they accept
/// plain and typed configurations alike.
pub trait CompleteConfiguration<K, V> {
    /// Fully qualified name of the key type
    fn key_type(&self) -> &'static str {
        std::any::type_name::<K>()
    }

    /// Fully qualified name of the value type
    fn value_type(&self) -> &'static str {
        std::any::type_name::<V>()
    }

    fn is_read_through(&self) -> bool;

    fn is_write_through(&self) -> bool;

    fn is_store_by_value(&self) -> bool;

    fn is_statistics_enabled(&self) -> bool;

    fn is_management_enabled(&self) -> bool;

    fn expiry_policy(&self) -> &ExpiryPolicy;

    fn listener_configurations(&self) -> &[ListenerConfiguration];

    /// Copy strategy factory, for variants that carry one
    fn copy_strategy_factory(&self) -> Option<&FactoryHandle<dyn CopyStrategy>> {
        None
    }
}
