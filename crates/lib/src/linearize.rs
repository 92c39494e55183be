//! Tree linearization: flattening nested mappings into flat forms.
//!
//! Three views of a nested tree: [`dot`] keeps addresses (dotted keys),
//! [`flatten`] keeps only the leaf values, and [`fetch`] projects one field
//! across every element of a collection, segment by segment. The first two
//! are total on any input; `fetch` is strict and fails on the first element
//! missing the requested segment.

use crate::{
    Map, Result, Value,
    errors::Error,
    path::Path,
    value::Key,
};

/// Flattens nested mappings into a single level of dotted keys.
///
/// Depth-first: each leaf (non-mapping) value appears under the dotted
/// concatenation of the keys leading to it. Empty nested mappings
/// contribute nothing. A non-mapping input yields an empty map.
///
/// ```
/// use rummage::{Map, Value, dot};
///
/// let tree = Value::Map(Map::new().with(
///     "user",
///     Map::new()
///         .with("name", "Alice")
///         .with("langs", Map::from_values(vec!["en", "fr"])),
/// ));
///
/// let flat = dot(&tree);
/// assert_eq!(flat.get("user.name").unwrap(), "Alice");
/// assert_eq!(flat.get("user.langs.0").unwrap(), "en");
/// assert_eq!(flat.get("user.langs.1").unwrap(), "fr");
/// assert_eq!(flat.len(), 3);
/// ```
pub fn dot(node: &Value) -> Map {
    dot_prefixed(node, "")
}

/// Like [`dot`], with a prefix prepended to every produced key.
///
/// The prefix is used verbatim; pass `"config."` (with the trailing dot)
/// to namespace the result under `config`.
pub fn dot_prefixed(node: &Value, prefix: &str) -> Map {
    let mut flattened = Map::new();
    if let Value::Map(map) = node {
        collect_dotted(map, prefix, &mut flattened);
    }
    flattened
}

fn collect_dotted(map: &Map, prefix: &str, out: &mut Map) {
    for (key, value) in map.iter() {
        match value {
            Value::Map(nested) => {
                collect_dotted(nested, &format!("{prefix}{key}."), out);
            }
            leaf => {
                out.insert(Key::from_segment(&format!("{prefix}{key}")), leaf.clone());
            }
        }
    }
}

/// Collects every leaf value in depth-first order, discarding keys.
///
/// The result lines up with [`dot`]'s values. A non-mapping input yields
/// an empty sequence.
///
/// ```
/// use rummage::{Map, Value, flatten};
///
/// let tree = Value::Map(
///     Map::new()
///         .with("a", 1)
///         .with("b", Map::new().with("c", 2).with("d", 3)),
/// );
///
/// let leaves = flatten(&tree);
/// assert_eq!(leaves, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// ```
pub fn flatten(node: &Value) -> Vec<Value> {
    let mut leaves = Vec::new();
    if let Value::Map(map) = node {
        collect_leaves(map, &mut leaves);
    }
    leaves
}

fn collect_leaves(map: &Map, out: &mut Vec<Value>) {
    for (_, value) in map.iter() {
        match value {
            Value::Map(nested) => collect_leaves(nested, out),
            leaf => out.push(leaf.clone()),
        }
    }
}

/// Projects a field across every element of a collection, one path segment
/// at a time.
///
/// The working sequence starts as the top-level mapping's values. For each
/// path segment in turn, every element of the sequence is replaced by the
/// value under that segment (mapping key or object property), and the
/// sequence is re-indexed. The final sequence is returned as-is, one entry
/// per surviving element; projected collections are not merged into one
/// pool.
///
/// Strict: the first element missing the requested segment fails the whole
/// call with [`Error::MissingField`], and no partial result is returned.
/// A non-mapping input yields an empty sequence.
///
/// ```
/// use rummage::{Map, Value, fetch};
///
/// let posts = Value::Map(Map::from_values(vec![
///     Map::new().with("title", "intro").with("meta", Map::new().with("by", "ann")),
///     Map::new().with("title", "next").with("meta", Map::new().with("by", "bob")),
/// ]));
///
/// let authors = fetch(&posts, "meta.by").unwrap();
/// assert_eq!(authors, vec![Value::Text("ann".into()), Value::Text("bob".into())]);
///
/// // One post without the field fails the whole call
/// assert!(fetch(&posts, "meta.tags").is_err());
/// ```
pub fn fetch(node: &Value, path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let mut working: Vec<Value> = match node {
        Value::Map(map) => map.values().cloned().collect(),
        _ => Vec::new(),
    };

    for segment in path.segments() {
        let mut projected = Vec::with_capacity(working.len());
        for (index, item) in working.iter().enumerate() {
            let child = match item {
                Value::Map(map) => map.get(segment),
                Value::Object(object) => object.property(segment),
                _ => None,
            };
            match child {
                Some(value) => projected.push(value.clone()),
                None => {
                    return Err(Error::MissingField {
                        field: segment.to_string(),
                        item: index.to_string(),
                    });
                }
            }
        }
        working = projected;
    }

    Ok(working)
}
