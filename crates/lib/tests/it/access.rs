//! Dot-path access integration tests
//!
//! Covers lenient lookup (get, data_get), structural mutation (set, add),
//! removal (forget, forget_all), and the read-then-remove combination
//! (pull), including the fast-path and fallback rules each of them
//! documents.

use rummage::{
    Fallback, Map, Object, Value, add, data_get, forget, forget_all, get, path, pull, set,
};

use crate::helpers::sample_tree;

// ===== GET =====

#[test]
fn test_get_top_level_and_nested() {
    let tree = sample_tree();

    assert_eq!(get(&tree, "debug", ()), false);
    assert_eq!(get(&tree, "user.name", ()), "Alice");
    assert_eq!(get(&tree, path!("user.profile.theme"), ()), "dark");
}

#[test]
fn test_get_empty_path_returns_whole_node() {
    let tree = sample_tree();
    assert_eq!(get(&tree, "", ()), tree);

    // Separator-only paths have no segments and also resolve the whole node
    assert_eq!(get(&tree, "...", ()), tree);
}

#[test]
fn test_get_numeric_segments_address_list_positions() {
    let tree = sample_tree();

    assert_eq!(get(&tree, "user.profile.languages.0", ()), "en");
    assert_eq!(get(&tree, "user.profile.languages.1", ()), "fr");
    assert_eq!(get(&tree, "user.profile.languages.2", "none"), "none");
}

#[test]
fn test_get_default_on_miss() {
    let tree = sample_tree();

    assert_eq!(get(&tree, "user.missing", ()), Value::Null);
    assert_eq!(get(&tree, "user.missing", "fallback"), "fallback");
    assert_eq!(get(&tree, "server.port.extra", 0), 0); // descent through a scalar
    assert_eq!(get(&Value::Int(5), "anything", "x"), "x"); // non-mapping root
}

#[test]
fn test_get_stored_null_is_not_a_miss() {
    let tree = Value::Map(Map::new().with("present", Value::Null));

    // A stored null comes back as null; the default is for misses only
    assert_eq!(get(&tree, "present", "fallback"), Value::Null);
    assert_eq!(get(&tree, "absent", "fallback"), "fallback");
}

#[test]
fn test_get_literal_key_wins_over_descent() {
    let tree = Value::Map(
        Map::new()
            .with("products", Map::new().with("desk", Map::new().with("price", 100)))
            .with("products.desk", "literal entry"),
    );

    assert_eq!(get(&tree, "products.desk", ()), "literal entry");
    // Descent still works for paths with no literal twin
    assert_eq!(get(&tree, "products.desk.price", ()), 100);
}

#[test]
fn test_get_computed_default_runs_only_on_miss() {
    use std::{cell::Cell, rc::Rc};

    let tree = sample_tree();
    let ran = Rc::new(Cell::new(0));

    let count = Rc::clone(&ran);
    let hit = get(
        &tree,
        "user.name",
        Fallback::computed(move || {
            count.set(count.get() + 1);
            "computed"
        }),
    );
    assert_eq!(hit, "Alice");
    assert_eq!(ran.get(), 0);

    let count = Rc::clone(&ran);
    let miss = get(
        &tree,
        "user.nickname",
        Fallback::computed(move || {
            count.set(count.get() + 1);
            "computed"
        }),
    );
    assert_eq!(miss, "computed");
    assert_eq!(ran.get(), 1);
}

// ===== DATA_GET =====

#[test]
fn test_data_get_descends_objects() {
    let tree = Value::Map(Map::new().with(
        "owner",
        Object::new()
            .with("name", "Alice")
            .with("address", Object::new().with("city", "Oslo")),
    ));

    assert_eq!(data_get(&tree, "owner.name", ()), "Alice");
    assert_eq!(data_get(&tree, "owner.address.city", ()), "Oslo");
    assert_eq!(data_get(&tree, "owner.address.zip", "none"), "none");

    // get treats objects as opaque
    assert_eq!(get(&tree, "owner.name", "opaque"), "opaque");
}

#[test]
fn test_data_get_has_no_literal_fast_path() {
    let tree = Value::Map(
        Map::new()
            .with("a", Map::new().with("b", "nested"))
            .with("a.b", "literal"),
    );

    assert_eq!(get(&tree, "a.b", ()), "literal");
    assert_eq!(data_get(&tree, "a.b", ()), "nested");
}

// ===== SET =====

#[test]
fn test_set_creates_intermediate_mappings() {
    let mut tree = Value::Map(Map::new());

    let displaced = set(&mut tree, "user.profile.name", "Alice");
    assert_eq!(displaced, None);
    assert_eq!(get(&tree, "user.profile.name", ()), "Alice");

    // Intermediates are real mappings
    assert!(get(&tree, "user", ()).is_map());
    assert!(get(&tree, "user.profile", ()).is_map());
}

#[test]
fn test_set_returns_displaced_value() {
    let mut tree = sample_tree();

    let displaced = set(&mut tree, "user.name", "Bob");
    assert_eq!(displaced, Some(Value::Text("Alice".to_string())));
    assert_eq!(get(&tree, "user.name", ()), "Bob");
}

#[test]
fn test_set_discards_scalar_intermediates() {
    let mut tree = sample_tree();

    // server.port is an integer; setting below it replaces it with a mapping
    set(&mut tree, "server.port.public", 443);
    assert_eq!(get(&tree, "server.port.public", ()), 443);
    assert!(get(&tree, "server.port", ()).is_map());
}

#[test]
fn test_set_on_non_mapping_root() {
    let mut tree = Value::Text("scalar".to_string());
    set(&mut tree, "key", "value");

    assert!(tree.is_map());
    assert_eq!(get(&tree, "key", ()), "value");
}

#[test]
fn test_set_empty_path_replaces_node() {
    let mut tree = sample_tree();
    let displaced = set(&mut tree, "", 42);

    assert_eq!(displaced, Some(sample_tree()));
    assert_eq!(tree, Value::Int(42));
}

#[test]
fn test_set_numeric_segments_make_int_keys() {
    let mut tree = Value::Map(Map::new());
    set(&mut tree, "items.0", "first");
    set(&mut tree, "items.1", "second");

    let items = get(&tree, "items", ());
    let items = items.as_map().unwrap();
    assert!(items.is_list());
    assert_eq!(items.get(0).unwrap(), "first");
    assert_eq!(items.get(1).unwrap(), "second");
}

// ===== ADD =====

#[test]
fn test_add_only_fills_vacant_paths() {
    let mut tree = sample_tree();

    add(&mut tree, "user.name", "Bob"); // present, no-op
    add(&mut tree, "user.nickname", "al"); // absent, inserted

    assert_eq!(get(&tree, "user.name", ()), "Alice");
    assert_eq!(get(&tree, "user.nickname", ()), "al");
}

#[test]
fn test_add_treats_stored_null_as_vacant() {
    let mut tree = Value::Map(Map::new().with("slot", Value::Null));
    add(&mut tree, "slot", "filled");

    assert_eq!(get(&tree, "slot", ()), "filled");
}

// ===== FORGET =====

#[test]
fn test_forget_removes_and_returns() {
    let mut tree = sample_tree();

    let removed = forget(&mut tree, "user.profile.theme");
    assert_eq!(removed, Some(Value::Text("dark".to_string())));
    assert_eq!(get(&tree, "user.profile.theme", "gone"), "gone");

    // Siblings and the parent mapping survive
    assert_eq!(get(&tree, "user.profile.languages.0", ()), "en");
    assert!(get(&tree, "user.profile", ()).is_map());
}

#[test]
fn test_forget_missing_path_is_a_no_op() {
    let mut tree = sample_tree();

    assert_eq!(forget(&mut tree, "user.missing"), None);
    assert_eq!(forget(&mut tree, "no.such.path"), None);
    assert_eq!(forget(&mut tree, "server.port.deep"), None); // scalar intermediate
    assert_eq!(tree, sample_tree()); // nothing was disturbed
}

#[test]
fn test_forget_empty_path_removes_nothing() {
    let mut tree = sample_tree();
    assert_eq!(forget(&mut tree, ""), None);
    assert_eq!(tree, sample_tree());
}

#[test]
fn test_forget_all_follows_each_path_independently() {
    let mut tree = sample_tree();
    forget_all(&mut tree, ["user.email", "debug", "no.such.path"]);

    assert_eq!(get(&tree, "user.email", "gone"), "gone");
    assert_eq!(get(&tree, "debug", "gone"), "gone");
    assert_eq!(get(&tree, "user.name", ()), "Alice"); // untouched
}

// ===== PULL =====

#[test]
fn test_pull_reads_then_removes() {
    let mut tree = sample_tree();

    let pulled = pull(&mut tree, "server.port", ());
    assert_eq!(pulled, 8080);
    assert_eq!(get(&tree, "server.port", ()), Value::Null);
    assert_eq!(get(&tree, "server.host", ()), "localhost"); // sibling intact
}

#[test]
fn test_pull_default_on_miss() {
    let mut tree = sample_tree();
    assert_eq!(pull(&mut tree, "server.tls", false), false);
    assert_eq!(tree, sample_tree());
}

#[test]
fn test_pull_literal_key_read_but_not_removed() {
    // The read side honors the whole-path literal fast path; the removal
    // side only follows segments, so the literal entry stays behind.
    let mut tree = Value::Map(Map::new().with("a.b", "literal"));

    let pulled = pull(&mut tree, "a.b", ());
    assert_eq!(pulled, "literal");
    assert_eq!(get(&tree, "a.b", ()), "literal");
}
