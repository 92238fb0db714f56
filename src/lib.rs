//! Cacheconf: Per-Cache Configuration Resolution
//!
//! Resolves the effective configuration of a named cache by layering its own
//! sub-tree over the global configuration tree, and exposes a typed cache
//! configuration whose copy strategy is selected by name.

pub mod catalog;
pub mod cli;
pub mod configuration;
pub mod copy;
pub mod error;
pub mod factory;
pub mod logging;
pub mod overlay;
pub mod settings;
pub mod tree;

pub use catalog::CacheCatalog;
pub use configuration::{CompleteConfiguration, TypedCacheConfiguration};
pub use copy::CopyStrategy;
pub use error::{ApiError, ResolveError, TreeError};
pub use factory::{FactoryHandle, FactoryRegistry};
pub use tree::ConfigTree;
