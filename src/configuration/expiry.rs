//! Expiry and listener settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When cache entries expire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// Entries never expire
    #[default]
    Eternal,
    /// Fixed lifetime counted from creation
    AfterCreation(Duration),
    /// Lifetime reset on every read
    AfterAccess(Duration),
    /// Lifetime reset on every write
    AfterUpdate(Duration),
    /// Lifetime reset on any read or write
    Touched(Duration),
}

impl ExpiryPolicy {
    /// Lifetime of an entry, or `None` for eternal entries
    pub fn duration(&self) -> Option<Duration> {
        match self {
            ExpiryPolicy::Eternal => None,
            ExpiryPolicy::AfterCreation(d)
            | ExpiryPolicy::AfterAccess(d)
            | ExpiryPolicy::AfterUpdate(d)
            | ExpiryPolicy::Touched(d) => Some(*d),
        }
    }
}

/// Registration of a cache entry listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerConfiguration {
    /// Listener name, as known to the cache engine
    pub listener: String,

    /// Whether events carry the previous value
    #[serde(default)]
    pub old_value_required: bool,

    /// Whether the listener runs on the mutating thread
    #[serde(default)]
    pub synchronous: bool,
}

impl ListenerConfiguration {
    pub fn new(listener: impl Into<String>) -> Self {
        Self {
            listener: listener.into(),
            old_value_required: false,
            synchronous: false,
        }
    }
}
