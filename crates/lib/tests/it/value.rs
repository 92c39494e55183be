//! Value model integration tests
//!
//! Covers the ordered Map container (insertion order, key unification,
//! push indexing), Key coercion, Object properties, and the Value
//! conversion surface (From, TryFrom, cross-type equality).

use rummage::{Key, Map, Object, Value};

use crate::helpers::key_strings;

// ===== MAP BEHAVIOR =====

#[test]
fn test_map_preserves_insertion_order() {
    let mut map = Map::new().with("zebra", 1).with("apple", 2).with("mango", 3);
    assert_eq!(key_strings(&map), vec!["zebra", "apple", "mango"]);

    // Overwriting keeps the original position, inserting appends
    let old = map.insert("apple", 20);
    assert_eq!(old, Some(Value::Int(2)));
    map.insert("new", 4);
    assert_eq!(key_strings(&map), vec!["zebra", "apple", "mango", "new"]);
    assert_eq!(map.get("apple").unwrap(), 20);
}

#[test]
fn test_map_unifies_canonical_numeric_keys() {
    let mut map = Map::new();
    map.insert(5, "by int");
    assert_eq!(map.get("5").unwrap(), "by int"); // same key, different spelling

    map.insert("5", "overwritten");
    assert_eq!(map.len(), 1);

    // Non-canonical spellings are distinct text keys
    map.insert("05", "padded");
    map.insert("+5", "signed");
    assert_eq!(map.len(), 3);
    assert!(map.contains_key("05"));
    // The stored key is Int(5), so a raw Text("5") lookup matches nothing
    assert!(!map.contains_key(Key::Text("5".to_string())));
}

#[test]
fn test_map_push_appends_after_largest_int_key() {
    let mut map = Map::from_values(vec!["a", "b"]);
    map.push("c");
    assert!(map.is_list());
    assert_eq!(map.get(2).unwrap(), "c");

    map.insert(10, "j");
    map.push("k");
    assert_eq!(map.get(11).unwrap(), "k");

    // Removal does not reset the next index below the remaining maximum
    map.remove(11);
    map.push("l");
    assert_eq!(map.get(11).unwrap(), "l");
}

#[test]
fn test_map_push_with_no_int_keys_starts_at_zero() {
    let mut map = Map::new().with("name", "x");
    map.push("first");
    assert_eq!(map.get(0).unwrap(), "first");

    // Negative keys never produce negative push targets
    let mut negatives = Map::new().with(-5, "low");
    negatives.push("next");
    assert_eq!(negatives.get(0).unwrap(), "next");
}

#[test]
fn test_map_removal_breaks_list_shape() {
    let mut map = Map::from_values(vec!["a", "b", "c"]);
    assert!(map.is_list());

    assert_eq!(map.remove(1), Some(Value::Text("b".to_string())));
    assert!(!map.is_list()); // keys 0 and 2 are no longer dense
    assert_eq!(key_strings(&map), vec!["0", "2"]);
}

#[test]
fn test_map_get_as_typed_extraction() {
    let map = Map::new()
        .with("name", "Alice")
        .with("age", 30)
        .with("active", true);

    assert_eq!(map.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(map.get_as::<i64>("age"), Some(30));
    assert_eq!(map.get_as::<f64>("age"), Some(30.0)); // ints widen
    assert_eq!(map.get_as::<bool>("active"), Some(true));

    assert_eq!(map.get_as::<i64>("name"), None); // wrong type
    assert_eq!(map.get_as::<String>("missing"), None); // absent
}

#[test]
fn test_map_collects_and_iterates_pairs() {
    let mut map: Map = vec![("b", 1), ("a", 2)].into_iter().collect();
    map.extend(vec![("c", 3)]);
    assert_eq!(key_strings(&map), vec!["b", "a", "c"]);

    let pairs: Vec<(Key, Value)> = map.into_iter().collect();
    assert_eq!(pairs[0], (Key::from("b"), Value::Int(1)));
    assert_eq!(pairs[2], (Key::from("c"), Value::Int(3)));
}

// ===== KEY COERCION =====

#[test]
fn test_key_segment_canonicalization() {
    assert_eq!(Key::from_segment("5"), Key::Int(5));
    assert_eq!(Key::from_segment("-3"), Key::Int(-3));
    assert_eq!(Key::from_segment("0"), Key::Int(0));

    // Only the canonical decimal spelling becomes an integer
    assert_eq!(Key::from_segment("05"), Key::Text("05".to_string()));
    assert_eq!(Key::from_segment("+5"), Key::Text("+5".to_string()));
    assert_eq!(Key::from_segment("-0"), Key::Text("-0".to_string()));
    assert_eq!(Key::from_segment("5.0"), Key::Text("5.0".to_string()));
    assert_eq!(Key::from_segment(""), Key::Text(String::new()));
}

#[test]
fn test_key_from_value_coercions() {
    assert_eq!(Key::try_from(&Value::Null).unwrap(), Key::Text(String::new()));
    assert_eq!(Key::try_from(&Value::Bool(true)).unwrap(), Key::Int(1));
    assert_eq!(Key::try_from(&Value::Int(7)).unwrap(), Key::Int(7));
    assert_eq!(Key::try_from(&Value::Float(2.9)).unwrap(), Key::Int(2)); // truncates
    assert_eq!(
        Key::try_from(&Value::Text("7".to_string())).unwrap(),
        Key::Int(7)
    );

    let err = Key::try_from(&Value::Map(Map::new())).unwrap_err();
    assert!(err.is_invalid_key());
    assert_eq!(err.to_string(), "cannot use map value as a map key");
}

#[test]
fn test_key_display_and_equality() {
    assert_eq!(Key::Int(5).to_string(), "5");
    assert_eq!(Key::from("name").to_string(), "name");
    assert_eq!(Key::Int(5), 5);
    assert_eq!(Key::from("x"), "x");
}

// ===== OBJECT BEHAVIOR =====

#[test]
fn test_object_keeps_declaration_order() {
    let mut object = Object::new().with("zulu", 1).with("alpha", 2);
    object.set_property("zulu", 10); // overwrite keeps position

    let names: Vec<&str> = object.properties().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zulu", "alpha"]);
    assert_eq!(object.property("zulu").unwrap(), 10);
}

#[test]
fn test_object_is_distinct_from_map() {
    let as_object = Value::Object(Object::new().with("a", 1));
    let as_map = Value::Map(Map::new().with("a", 1));

    assert_ne!(as_object, as_map);
    assert!(as_object.is_object() && !as_object.is_map());
    assert!(as_object.as_map().is_none());
    assert_eq!(as_object.type_name(), "object");
}

// ===== VALUE CONVERSIONS =====

#[test]
fn test_value_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from(2.5), Value::Float(2.5));
    assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
    assert_eq!(Value::from(None::<i64>), Value::Null);
}

#[test]
fn test_value_from_vec_builds_a_list() {
    let value = Value::from(vec![1, 2, 3]);
    let map = value.as_map().unwrap();

    assert!(map.is_list());
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(1).unwrap(), 2);
}

#[test]
fn test_value_try_from_reports_both_types() {
    let err = String::try_from(&Value::Int(3)).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "type mismatch: expected text, found int");

    assert_eq!(i64::try_from(&Value::Int(3)).unwrap(), 3);
    assert_eq!(f64::try_from(&Value::Int(3)).unwrap(), 3.0); // widening
    assert!(bool::try_from(&Value::Text("true".to_string())).is_err());
}

#[test]
fn test_value_cross_type_equality() {
    assert_eq!(Value::Text("a".to_string()), "a");
    assert_eq!("a", Value::Text("a".to_string()));
    assert_eq!(Value::Int(5), 5i64);
    assert_eq!(Value::Int(5), 5i32);
    assert_eq!(Value::Float(2.5), 2.5);
    assert_eq!(Value::Bool(true), true);

    // No coercion across types
    assert_ne!(Value::Int(5), "5");
    assert_ne!(Value::Text("5".to_string()), 5i64);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Text("plain".to_string()).to_string(), "plain");
    assert_eq!(
        Value::Map(Map::new().with("a", 1).with("b", "two")).to_string(),
        "{a: 1, b: two}"
    );
}
