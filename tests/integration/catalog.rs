//! Integration tests for the cache catalog

use cacheconf::catalog::{CacheCatalog, DEFAULT_SCOPE};
use cacheconf::configuration::CompleteConfiguration;
use cacheconf::copy::{DEEP_COPY_STRATEGY, IDENTITY_STRATEGY};
use cacheconf::tree::ConfigTree;
use tempfile::TempDir;

use crate::integration::write_file;

const CATALOG_TOML: &str = r#"
maximumSize = 1000
"storeByValue.strategy" = "IdentityStrategy"

[caches]
note = "scalar entries are not caches"

[caches.orders]
"storeByValue.strategy" = "DeepCopyStrategy"
maximumSize = 20

[caches.sessions]
maximumSize = 5
"#;

fn load_catalog() -> CacheCatalog {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "caches.toml", CATALOG_TOML);
    CacheCatalog::new(ConfigTree::load(&path).unwrap())
}

#[test]
fn test_cache_names_lists_object_entries_sorted() {
    let catalog = load_catalog();
    assert_eq!(catalog.scope(), DEFAULT_SCOPE);
    assert_eq!(catalog.cache_names(), vec!["orders", "sessions"]);
}

#[test]
fn test_configuration_for_resolves_under_scope() {
    let catalog = load_catalog();
    let orders = catalog.configuration_for::<String, String>("orders").unwrap();
    assert_eq!(
        orders.copy_strategy_factory().unwrap().name(),
        DEEP_COPY_STRATEGY
    );
    let sessions = catalog.configuration_for::<String, String>("sessions").unwrap();
    assert_eq!(
        sessions.copy_strategy_factory().unwrap().name(),
        IDENTITY_STRATEGY
    );
}

#[test]
fn test_effective_tree_layers_cache_over_defaults() {
    let catalog = load_catalog();
    let effective = catalog.effective_tree("sessions").unwrap();
    assert_eq!(effective.get_string("maximumSize").unwrap(), "5");
    assert_eq!(
        effective.get_string("storeByValue.strategy").unwrap(),
        IDENTITY_STRATEGY
    );
}

#[test]
fn test_empty_scope_uses_bare_names() {
    let tree = ConfigTree::parse_toml(
        r#"
"storeByValue.strategy" = "IdentityStrategy"
[orders]
"storeByValue.strategy" = "DeepCopyStrategy"
"#,
    )
    .unwrap();
    let catalog = CacheCatalog::new(tree).with_scope("");
    assert_eq!(catalog.entity_path("orders"), "orders");
    assert_eq!(catalog.cache_names(), vec!["orders", "storeByValue"]);
    let orders = catalog.configuration_for::<(), ()>("orders").unwrap();
    assert_eq!(
        orders.copy_strategy_factory().unwrap().name(),
        DEEP_COPY_STRATEGY
    );
}
