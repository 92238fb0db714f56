//! Named factories for late-bound extension points.
//!
//! A [`FactoryRegistry`] maps names to zero-argument constructors; resolving a
//! name yields a [`FactoryHandle`] that can build fresh instances on demand.
//! Resolution never runs the constructor.

use crate::error::RegistryError;
use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

struct HandleInner<T: ?Sized> {
    name: String,
    constructor: Arc<dyn Fn() -> Box<T> + Send + Sync>,
}

/// Reference to a named, zero-argument constructible `T`
///
/// Clones share the same handle. Two handles compare equal when they name the
/// same factory, whether or not they are the same handle.
pub struct FactoryHandle<T: ?Sized> {
    inner: Arc<HandleInner<T>>,
}

impl<T: ?Sized> FactoryHandle<T> {
    /// Handle over an arbitrary constructor, bypassing any registry
    pub fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        Self::from_parts(name.into(), Arc::new(constructor))
    }

    fn from_parts(name: String, constructor: Arc<dyn Fn() -> Box<T> + Send + Sync>) -> Self {
        Self {
            inner: Arc::new(HandleInner { name, constructor }),
        }
    }

    /// Name of the factory this handle refers to
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Build a new instance. Every call constructs afresh.
    pub fn create(&self) -> Box<T> {
        (self.inner.constructor)()
    }

    /// True when both values are clones of one handle
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for FactoryHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> PartialEq for FactoryHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_handle(other) || self.inner.name == other.inner.name
    }
}

impl<T: ?Sized> Eq for FactoryHandle<T> {}

impl<T: ?Sized> fmt::Debug for FactoryHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FactoryHandle").field(&self.inner.name).finish()
    }
}

impl<T: ?Sized> Serialize for FactoryHandle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.name)
    }
}

struct RegistryState<T: ?Sized> {
    constructors: HashMap<String, Arc<dyn Fn() -> Box<T> + Send + Sync>>,
    aliases: HashMap<String, String>,
}

/// Name-to-constructor lookup table
///
/// Cloning is cheap and clones share the same table.
pub struct FactoryRegistry<T: ?Sized> {
    state: Arc<RwLock<RegistryState<T>>>,
}

impl<T: ?Sized> FactoryRegistry<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState {
                constructors: HashMap::new(),
                aliases: HashMap::new(),
            })),
        }
    }

    /// Register a constructor under `name`, replacing any previous one
    pub fn register<F>(&self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(factory = %name, "Registering factory");
        let mut state = self.state.write();
        state.aliases.remove(&name);
        state.constructors.insert(name, Arc::new(constructor));
    }

    /// Make `alias` resolve to the factory registered as `target`
    ///
    /// Fails when `alias` is itself a registered factory name.
    pub fn alias(&self, alias: impl Into<String>, target: &str) -> Result<(), RegistryError> {
        let alias = alias.into();
        let mut state = self.state.write();
        if state.constructors.contains_key(&alias) {
            return Err(RegistryError::AliasShadowsFactory { alias });
        }
        let canonical = match canonical_name(&*state, target) {
            Some(name) => name.to_string(),
            None => {
                return Err(RegistryError::DanglingAlias {
                    alias,
                    target: target.to_string(),
                })
            }
        };
        debug!(%alias, target = %canonical, "Registering factory alias");
        state.aliases.insert(alias, canonical);
        Ok(())
    }

    /// Look up a factory by name or alias without constructing anything
    pub fn resolve(&self, name: &str) -> Result<FactoryHandle<T>, RegistryError> {
        let state = self.state.read();
        let canonical = canonical_name(&*state, name).ok_or_else(|| {
            let mut known: Vec<String> = state.constructors.keys().cloned().collect();
            known.sort();
            RegistryError::UnresolvableFactory {
                name: name.to_string(),
                known,
            }
        })?;
        let constructor = Arc::clone(&state.constructors[canonical]);
        Ok(FactoryHandle::from_parts(canonical.to_string(), constructor))
    }

    pub fn contains(&self, name: &str) -> bool {
        canonical_name(&*self.state.read(), name).is_some()
    }

    /// Registered factory names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().constructors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registered aliases as `(alias, target)` pairs, sorted by alias
    pub fn aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .state
            .read()
            .aliases
            .iter()
            .map(|(a, t)| (a.clone(), t.clone()))
            .collect();
        aliases.sort();
        aliases
    }
}

fn canonical_name<'a, T: ?Sized>(state: &'a RegistryState<T>, name: &'a str) -> Option<&'a str> {
    if let Some((registered, _)) = state.constructors.get_key_value(name) {
        return Some(registered.as_str());
    }
    state.aliases.get(name).map(String::as_str)
}

impl<T: ?Sized> Clone for FactoryRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: ?Sized> Default for FactoryRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for FactoryRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("names", &self.names())
            .field("aliases", &self.aliases())
            .finish()
    }
}
