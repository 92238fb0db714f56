//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, RegistryError, ResolveError, TreeError};

/// Map domain errors to a string for CLI output, with a hint where one helps.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Resolve {
            cache,
            source: ResolveError::Tree(TreeError::NotFound { path }),
        } => format!(
            "{}\nHint: set '{}' for cache '{}' or at the top level as a default.",
            e, path, cache
        ),
        ApiError::Resolve {
            source: ResolveError::Registry(RegistryError::UnresolvableFactory { .. }),
            ..
        } => format!(
            "{}\nHint: run `cacheconf strategies` to list registered names.",
            e
        ),
        _ => e.to_string(),
    }
}
