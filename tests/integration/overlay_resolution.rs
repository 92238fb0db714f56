//! Integration tests for the overlay resolver over loaded trees

use cacheconf::overlay;
use cacheconf::tree::ConfigTree;
use cacheconf::TreeError;

const GLOBAL_TOML: &str = r#"
maximumSize = 1000
statistics = false

[storeByValue]
strategy = "IdentityStrategy"

[expiry]
policy = "eternal"
seconds = 0

[orders]
maximumSize = 50

[orders.expiry]
policy = "afterWrite"

[sessions]
"storeByValue.strategy" = "DeepCopyStrategy"
"#;

fn global() -> ConfigTree {
    ConfigTree::parse_toml(GLOBAL_TOML).unwrap()
}

#[test]
fn test_entity_keys_win_and_missing_keys_fall_through() {
    let effective = overlay::resolve(&global(), "orders").unwrap();
    assert_eq!(effective.get_string("maximumSize").unwrap(), "50");
    assert_eq!(effective.get_string("statistics").unwrap(), "false");
    assert_eq!(
        effective.get_string("storeByValue.strategy").unwrap(),
        "IdentityStrategy"
    );
}

#[test]
fn test_nested_objects_merge_key_by_key() {
    let effective = overlay::resolve(&global(), "orders").unwrap();
    assert_eq!(effective.get_string("expiry.policy").unwrap(), "afterWrite");
    assert_eq!(effective.get_string("expiry.seconds").unwrap(), "0");
}

#[test]
fn test_dotted_keys_override_nested_settings() {
    let effective = overlay::resolve(&global(), "sessions").unwrap();
    assert_eq!(
        effective.get_string("storeByValue.strategy").unwrap(),
        "DeepCopyStrategy"
    );
    assert_eq!(effective.get_string("maximumSize").unwrap(), "1000");
}

#[test]
fn test_absent_entity_returns_global_tree() {
    let global = global();
    let effective = overlay::resolve(&global, "users").unwrap();
    assert!(effective.ptr_eq(&global));
}

#[test]
fn test_malformed_entity_name_returns_global_tree() {
    let global = global();
    for name in ["", "orders.", "bad name", "a..b", "\"unterminated"] {
        let effective = overlay::resolve(&global, name).unwrap();
        assert!(effective.ptr_eq(&global), "name {:?} should degrade", name);
    }
}

#[test]
fn test_scalar_at_entity_path_is_type_mismatch() {
    let err = overlay::resolve(&global(), "maximumSize").unwrap_err();
    assert!(matches!(
        err,
        TreeError::TypeMismatch {
            expected: "object",
            ..
        }
    ));
}

#[test]
fn test_resolution_does_not_modify_global() {
    let global = global();
    let before = global.to_json();
    let _ = overlay::resolve(&global, "orders").unwrap();
    assert_eq!(global.to_json(), before);
}

#[test]
fn test_json_and_toml_trees_resolve_alike() {
    let json = ConfigTree::parse_json(
        r#"{
            "maximumSize": 1000,
            "statistics": false,
            "storeByValue": { "strategy": "IdentityStrategy" },
            "expiry": { "policy": "eternal", "seconds": 0 },
            "orders": { "maximumSize": 50, "expiry": { "policy": "afterWrite" } },
            "sessions": { "storeByValue.strategy": "DeepCopyStrategy" }
        }"#,
    )
    .unwrap();
    let from_json = overlay::resolve(&json, "orders").unwrap();
    let from_toml = overlay::resolve(&global(), "orders").unwrap();
    assert_eq!(from_json, from_toml);
}
