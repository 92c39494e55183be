//! JSON serialization integration tests
//!
//! Covers the JSON forms of maps and objects (arrays for list-shaped
//! maps, ordered objects otherwise), key coercion on the way back in,
//! and the serde_json::Value conversions.

use rummage::{Key, Map, Object, Value};
use serde_json::json;

use crate::helpers::key_strings;

// ===== JSON OUTPUT =====

#[test]
fn test_list_shaped_map_serializes_as_array() {
    let list = Value::Map(Map::from_values(vec![1, 2, 3]));
    assert_eq!(list.to_json_string(), "[1,2,3]");
}

#[test]
fn test_keyed_map_serializes_as_object_in_order() {
    let map = Value::Map(Map::new().with("b", 1).with("a", 2));
    assert_eq!(map.to_json_string(), r#"{"b":1,"a":2}"#);
}

#[test]
fn test_sparse_int_keys_serialize_as_object() {
    let mut map = Map::from_values(vec!["a", "b", "c"]);
    map.remove(1);

    // Keys 0 and 2 remain; no longer list-shaped, so keys are spelled out
    assert_eq!(Value::Map(map).to_json_string(), r#"{"0":"a","2":"c"}"#);
}

#[test]
fn test_object_serializes_as_json_object() {
    let object = Value::Object(Object::new().with("name", "Alice").with("age", 30));
    assert_eq!(object.to_json_string(), r#"{"name":"Alice","age":30}"#);
}

#[test]
fn test_scalars_serialize() {
    assert_eq!(Value::Null.to_json_string(), "null");
    assert_eq!(Value::Bool(true).to_json_string(), "true");
    assert_eq!(Value::Int(-7).to_json_string(), "-7");
    assert_eq!(Value::Float(2.5).to_json_string(), "2.5");
    assert_eq!(Value::Text("hi".to_string()).to_json_string(), r#""hi""#);
}

// ===== JSON INPUT =====

#[test]
fn test_json_object_deserializes_in_document_order() {
    let value: Value = serde_json::from_str(r#"{"zulu":1,"alpha":2,"mike":3}"#).unwrap();
    let map = value.as_map().unwrap();

    assert_eq!(key_strings(map), vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_json_array_deserializes_as_list_map() {
    let value: Value = serde_json::from_str(r#"["x","y"]"#).unwrap();
    let map = value.as_map().unwrap();

    assert!(map.is_list());
    assert_eq!(map.get(0).unwrap(), "x");
    assert_eq!(map.get(1).unwrap(), "y");
}

#[test]
fn test_numeric_json_keys_coerce_like_path_segments() {
    let value: Value = serde_json::from_str(r#"{"5":"five","05":"padded"}"#).unwrap();
    let map = value.as_map().unwrap();

    // "5" is canonical and becomes an integer key; "05" is not and stays text
    assert_eq!(map.get(5).unwrap(), "five");
    assert_eq!(map.get("05").unwrap(), "padded");
    assert_eq!(map.keys().next(), Some(&Key::Int(5)));
}

#[test]
fn test_json_numbers_choose_int_or_float() {
    let numbers: Value = serde_json::from_str("[1,2.5,9223372036854775808]").unwrap();
    let map = numbers.as_map().unwrap();

    assert_eq!(map.get(0), Some(&Value::Int(1)));
    assert_eq!(map.get(1), Some(&Value::Float(2.5)));
    // Beyond the signed 64-bit range, numbers fall back to floats
    assert!(matches!(map.get(2), Some(Value::Float(_))));
}

// ===== ROUND TRIPS =====

#[test]
fn test_document_round_trip_preserves_structure_and_order() {
    let original = Value::Map(
        Map::new()
            .with(
                "user",
                Map::new()
                    .with("name", "Alice")
                    .with("tags", Map::from_values(vec!["admin", "ops"])),
            )
            .with("active", true)
            .with("score", 12.5),
    );

    let text = original.to_json_string();
    let reparsed: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(reparsed, original);
    assert_eq!(reparsed.to_json_string(), text);
}

#[test]
fn test_int_keyed_object_round_trips() {
    let text = r#"{"0":"a","2":"b"}"#;
    let value: Value = serde_json::from_str(text).unwrap();

    assert_eq!(value.as_map().unwrap().get(0).unwrap(), "a");
    assert_eq!(value.to_json_string(), text);
}

#[test]
fn test_object_comes_back_as_map() {
    let object = Value::Object(Object::new().with("name", "Alice"));
    let reparsed: Value = serde_json::from_str(&object.to_json_string()).unwrap();

    // The object/map distinction only exists in memory
    assert!(reparsed.is_map());
    assert_eq!(reparsed.as_map().unwrap().get("name").unwrap(), "Alice");
}

// ===== SERDE_JSON VALUE BRIDGE =====

#[test]
fn test_from_serde_json_value() {
    let value = Value::from(json!([1, "two", null, {"a": true}]));
    let map = value.as_map().unwrap();

    assert_eq!(map.get(0), Some(&Value::Int(1)));
    assert_eq!(map.get(1).unwrap(), "two");
    assert_eq!(map.get(2), Some(&Value::Null));
    assert_eq!(map.get(3).unwrap().as_map().unwrap().get("a").unwrap(), true);
}

#[test]
fn test_from_serde_json_value_coerces_numeric_keys() {
    let value = Value::from(json!({"5": "five"}));
    assert_eq!(value.as_map().unwrap().get(5).unwrap(), "five");
}

#[test]
fn test_to_serde_json_value() {
    let list = Value::Map(Map::from_values(vec![1, 2]));
    assert_eq!(serde_json::Value::from(list), json!([1, 2]));

    let keyed = Value::Map(Map::new().with("a", 1).with("b", Value::Null));
    let json = keyed.to_json();
    assert_eq!(json["a"], json!(1));
    assert_eq!(json["b"], json!(null));
}
