//! Configuration Overlay Resolver
//!
//! Computes the effective configuration for a named cache: the cache's own
//! sub-tree layered over the global tree. Keys the cache leaves out fall
//! through to the global value at the same top-level path.

use crate::error::TreeError;
use crate::tree::ConfigTree;
use tracing::debug;

/// Resolve the effective configuration for `entity_name`.
///
/// Returns `global` itself (same shared tree) when the name has no sub-tree or
/// is not a valid path expression. Fails only when the global tree is malformed
/// at the entity's path, e.g. the name maps to a scalar instead of an object.
pub fn resolve(global: &ConfigTree, entity_name: &str) -> Result<ConfigTree, TreeError> {
    let has_specific = match global.has_path(entity_name) {
        Ok(found) => found,
        Err(TreeError::BadPath { reason, .. }) => {
            // Malformed names read as "no overrides" rather than failing resolution
            debug!(entity = entity_name, %reason, "Entity name is not a valid path; using global configuration");
            false
        }
        Err(e) => return Err(e),
    };

    if !has_specific {
        debug!(entity = entity_name, "No entity-specific configuration");
        return Ok(global.clone());
    }

    let specific = global.get_subtree(entity_name)?;
    debug!(
        entity = entity_name,
        overrides = specific.root().len(),
        "Overlaying entity configuration on global defaults"
    );
    Ok(specific.with_fallback(global))
}
