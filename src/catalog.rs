//! Cache catalog: resolves named caches defined under a common scope.
//!
//! Cache definitions usually live together under one key (`caches` by
//! default) while shared defaults sit at the top level:
//!
//! ```toml
//! storeByValue.strategy = "IdentityStrategy"
//!
//! [caches.orders]
//! storeByValue.strategy = "DeepCopyStrategy"
//! ```
//!
//! The catalog turns a bare cache name into the entity path under that scope
//! and resolves it against the whole tree, so top-level defaults still apply.

use crate::configuration::TypedCacheConfiguration;
use crate::copy::{self, CopyStrategy};
use crate::error::ResolveError;
use crate::factory::FactoryRegistry;
use crate::overlay;
use crate::tree::{quote_key, ConfigTree, ConfigValue};
use tracing::debug;

/// Default key under which caches are defined
pub const DEFAULT_SCOPE: &str = "caches";

/// Resolves cache configurations from one shared tree
#[derive(Debug, Clone)]
pub struct CacheCatalog {
    tree: ConfigTree,
    registry: FactoryRegistry<dyn CopyStrategy>,
    scope: String,
}

impl CacheCatalog {
    /// Catalog over `tree` using the built-in strategies and the default scope
    pub fn new(tree: ConfigTree) -> Self {
        Self::with_registry(tree, copy::builtin_registry())
    }

    pub fn with_registry(tree: ConfigTree, registry: FactoryRegistry<dyn CopyStrategy>) -> Self {
        Self {
            tree,
            registry,
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Change the scope; an empty scope resolves names at the top level
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn registry(&self) -> &FactoryRegistry<dyn CopyStrategy> {
        &self.registry
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Entity path of the cache `name`, quoting the name where needed
    pub fn entity_path(&self, name: &str) -> String {
        let key = quote_key(name);
        if self.scope.is_empty() {
            key
        } else {
            format!("{}.{}", self.scope, key)
        }
    }

    /// Typed configuration of the cache `name`
    pub fn configuration_for<K, V>(
        &self,
        name: &str,
    ) -> Result<TypedCacheConfiguration<K, V>, ResolveError> {
        let (configuration, _) = self.resolve_entity(&self.entity_path(name))?;
        Ok(configuration)
    }

    /// Typed configuration and effective tree of the entity at `entity_path`
    ///
    /// The overlay runs once and both results come from it.
    pub fn resolve_entity<K, V>(
        &self,
        entity_path: &str,
    ) -> Result<(TypedCacheConfiguration<K, V>, ConfigTree), ResolveError> {
        debug!(path = entity_path, "Resolving cache configuration");
        let effective = overlay::resolve(&self.tree, entity_path)?;
        let configuration = TypedCacheConfiguration::from_effective(&effective, &self.registry)?;
        Ok((configuration, effective))
    }

    /// Effective tree of the cache `name` after overlaying it on the defaults
    pub fn effective_tree(&self, name: &str) -> Result<ConfigTree, ResolveError> {
        Ok(overlay::resolve(&self.tree, &self.entity_path(name))?)
    }

    /// Names of the caches defined under the scope, sorted
    pub fn cache_names(&self) -> Vec<String> {
        let scoped = if self.scope.is_empty() {
            Some(self.tree.root())
        } else {
            self.tree
                .get_value(&self.scope)
                .ok()
                .and_then(ConfigValue::as_object)
        };

        scoped
            .map(|object| {
                object
                    .iter()
                    .filter(|(_, value)| matches!(value, ConfigValue::Object(_)))
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
