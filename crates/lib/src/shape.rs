//! Collection shaping: projecting, partitioning, filtering, and sorting
//! mappings.
//!
//! Every function here takes a [`Map`] and returns fresh data; inputs are
//! never mutated. Key association and insertion order are preserved
//! wherever the operation does not define a new order. [`pluck`] and
//! [`pluck_keyed`] are strict (see [`Error::MissingField`]); everything
//! else is total.

use std::cmp::Ordering;

use crate::{
    Fallback, Map, Result, Value, access::data_get, errors::Error, path::Path, value::Key,
};

/// Builds a new map by transforming every entry.
///
/// Duplicate keys produced by the transform keep the first occurrence's
/// position with the last occurrence's value.
///
/// ```
/// use rummage::{Key, Map, build};
///
/// let prices = Map::new().with("apple", 3).with("pear", 4);
/// let tagged = build(&prices, |key, value| {
///     (Key::from(format!("fruit.{key}")), value.clone())
/// });
/// assert_eq!(tagged.get("fruit.apple").unwrap(), 3);
/// ```
pub fn build(map: &Map, mut transform: impl FnMut(&Key, &Value) -> (Key, Value)) -> Map {
    let mut results = Map::new();
    for (key, value) in map.iter() {
        let (new_key, new_value) = transform(key, value);
        results.insert(new_key, new_value);
    }
    results
}

/// Splits a map into its keys and its values, in iteration order.
pub fn divide(map: &Map) -> (Vec<Key>, Vec<Value>) {
    (
        map.keys().cloned().collect(),
        map.values().cloned().collect(),
    )
}

/// Returns the entries whose keys are not in `keys`, in original order.
///
/// ```
/// use rummage::{Map, except};
///
/// let user = Map::new().with("name", "Alice").with("password", "secret");
/// let safe = except(&user, ["password"]);
/// assert!(safe.get("password").is_none());
/// assert_eq!(safe.len(), 1);
/// ```
pub fn except(map: &Map, keys: impl IntoIterator<Item = impl Into<Key>>) -> Map {
    let excluded: Vec<Key> = keys.into_iter().map(Into::into).collect();
    map.iter()
        .filter(|(key, _)| !excluded.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns the entries whose keys are in `keys`, in original order.
///
/// The order of `keys` does not matter; the input map's order is kept.
pub fn only(map: &Map, keys: impl IntoIterator<Item = impl Into<Key>>) -> Map {
    let wanted: Vec<Key> = keys.into_iter().map(Into::into).collect();
    map.iter()
        .filter(|(key, _)| wanted.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Extracts one field from every element of a collection.
///
/// Elements may be mappings (keyed lookup) or objects (property lookup).
/// Strict: an element without the field fails the whole call with
/// [`Error::MissingField`]; scalar elements always fail.
///
/// ```
/// use rummage::{Map, Value, pluck};
///
/// let users = Map::from_values(vec![
///     Map::new().with("name", "Alice").with("age", 30),
///     Map::new().with("name", "Bob").with("age", 25),
/// ]);
///
/// let names = pluck(&users, "name").unwrap();
/// assert_eq!(names, vec![Value::Text("Alice".into()), Value::Text("Bob".into())]);
/// ```
pub fn pluck(items: &Map, field: &str) -> Result<Vec<Value>> {
    let mut results = Vec::with_capacity(items.len());
    for (item_key, item) in items.iter() {
        results.push(field_of(item, item_key, field)?.clone());
    }
    Ok(results)
}

/// Extracts one field from every element, keyed by another field.
///
/// The key field's value coerces to a [`Key`] the way map keys do
/// ([`Error::InvalidKey`] for containers). Elements producing a duplicate
/// key keep the first occurrence's position with the last occurrence's
/// value.
///
/// ```
/// use rummage::{Map, pluck_keyed};
///
/// let users = Map::from_values(vec![
///     Map::new().with("id", 7).with("name", "Alice"),
///     Map::new().with("id", 9).with("name", "Bob"),
/// ]);
///
/// let by_id = pluck_keyed(&users, "name", "id").unwrap();
/// assert_eq!(by_id.get(7).unwrap(), "Alice");
/// assert_eq!(by_id.get(9).unwrap(), "Bob");
/// ```
pub fn pluck_keyed(items: &Map, field: &str, key_field: &str) -> Result<Map> {
    let mut results = Map::new();
    for (item_key, item) in items.iter() {
        let value = field_of(item, item_key, field)?.clone();
        let key = Key::try_from(field_of(item, item_key, key_field)?)?;
        results.insert(key, value);
    }
    Ok(results)
}

fn field_of<'a>(item: &'a Value, item_key: &Key, field: &str) -> Result<&'a Value> {
    let found = match item {
        Value::Map(map) => map.get(field),
        Value::Object(object) => object.property(field),
        _ => None,
    };
    found.ok_or_else(|| Error::MissingField {
        field: field.to_string(),
        item: item_key.to_string(),
    })
}

/// Returns the entries matching a predicate, keys and order preserved.
///
/// ```
/// use rummage::{Map, filter};
///
/// let scores = Map::new().with("ann", 91).with("bob", 64).with("cat", 88);
/// let passed = filter(&scores, |_, score| score.as_int().unwrap_or(0) >= 80);
/// assert_eq!(passed.len(), 2);
/// assert!(passed.get("bob").is_none());
/// ```
pub fn filter(map: &Map, mut predicate: impl FnMut(&Key, &Value) -> bool) -> Map {
    map.iter()
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns the first value matching a predicate, or the resolved default.
pub fn first(
    map: &Map,
    mut predicate: impl FnMut(&Key, &Value) -> bool,
    default: impl Into<Fallback>,
) -> Value {
    for (key, value) in map.iter() {
        if predicate(key, value) {
            return value.clone();
        }
    }
    default.into().resolve()
}

/// Returns the last value matching a predicate, or the resolved default.
pub fn last(
    map: &Map,
    mut predicate: impl FnMut(&Key, &Value) -> bool,
    default: impl Into<Fallback>,
) -> Value {
    for (key, value) in map.iter().rev() {
        if predicate(key, value) {
            return value.clone();
        }
    }
    default.into().resolve()
}

/// Returns the values re-indexed as a sequence, keys discarded.
pub fn values(map: &Map) -> Vec<Value> {
    map.values().cloned().collect()
}

/// Comparison rules for [`sort_by`] and [`sort_by_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOptions {
    /// Rank by type (null, bool, numbers, text, map, object), then compare
    /// naturally within the type. Integers and floats compare numerically
    /// with each other.
    #[default]
    Regular,
    /// Coerce every sort key to a number and compare numerically. Null is
    /// 0, booleans are 0/1, text parses as a number or counts as 0,
    /// containers count as 1 when non-empty.
    Numeric,
    /// Compare the rendered text of the sort keys.
    Text,
    /// Compare the rendered text of the sort keys, lowercased.
    CaseInsensitiveText,
}

/// Sorts a map's entries by a computed sort key, keeping key association.
///
/// The sort is stable: entries with equal sort keys keep their original
/// relative order, ascending or descending (descending reverses the
/// comparison, not the output).
///
/// ```
/// use rummage::{Map, SortOptions, sort_by};
///
/// let words = Map::from_values(vec!["pear", "fig", "apple"]);
/// let by_len = sort_by(
///     &words,
///     |word| (word.as_text_or_empty().len() as i64).into(),
///     SortOptions::Regular,
///     false,
/// );
///
/// // Keys travel with their values
/// let order: Vec<String> = by_len.keys().map(|k| k.to_string()).collect();
/// assert_eq!(order, vec!["1", "0", "2"]);
/// ```
pub fn sort_by(
    map: &Map,
    mut key_fn: impl FnMut(&Value) -> Value,
    options: SortOptions,
    descending: bool,
) -> Map {
    let mut decorated: Vec<(Key, Value, Value)> = map
        .iter()
        .map(|(key, value)| (key.clone(), value.clone(), key_fn(value)))
        .collect();

    decorated.sort_by(|a, b| {
        let ordering = compare_values(&a.2, &b.2, options);
        if descending { ordering.reverse() } else { ordering }
    });

    decorated
        .into_iter()
        .map(|(key, value, _)| (key, value))
        .collect()
}

/// Sorts a map's entries by the value under a dot path in each entry.
///
/// The sort key for each entry is `data_get(entry, field, null)`, so
/// entries missing the field sort with a null key.
///
/// ```
/// use rummage::{Map, SortOptions, sort_by_field};
///
/// let users = Map::from_values(vec![
///     Map::new().with("name", "carol").with("age", 41),
///     Map::new().with("name", "ann").with("age", 29),
/// ]);
///
/// let by_age = sort_by_field(&users, "age", SortOptions::Regular, false);
/// let first = by_age.values().next().unwrap();
/// assert_eq!(first.as_map().unwrap().get("name").unwrap(), "ann");
/// ```
pub fn sort_by_field(
    map: &Map,
    field: impl AsRef<Path>,
    options: SortOptions,
    descending: bool,
) -> Map {
    let field = field.as_ref();
    sort_by(map, |item| data_get(item, field, ()), options, descending)
}

/// Sorts a map's entries by a computed sort key with the default
/// ([`SortOptions::Regular`], ascending) rules.
pub fn sort(map: &Map, key_fn: impl FnMut(&Value) -> Value) -> Map {
    sort_by(map, key_fn, SortOptions::Regular, false)
}

fn compare_values(a: &Value, b: &Value, options: SortOptions) -> Ordering {
    match options {
        SortOptions::Regular => compare_regular(a, b),
        SortOptions::Numeric => numeric_rank(a).total_cmp(&numeric_rank(b)),
        SortOptions::Text => a.to_string().cmp(&b.to_string()),
        SortOptions::CaseInsensitiveText => {
            a.to_string().to_lowercase().cmp(&b.to_string().to_lowercase())
        }
    }
}

fn compare_regular(a: &Value, b: &Value) -> Ordering {
    fn type_rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
            Value::Map(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Map(x), Value::Map(y)) => x.len().cmp(&y.len()),
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()),
        _ => match (a.as_float(), b.as_float()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}

fn numeric_rank(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Int(n) => *n as f64,
        Value::Float(x) => *x,
        Value::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Map(map) => {
            if map.is_empty() {
                0.0
            } else {
                1.0
            }
        }
        Value::Object(object) => {
            if object.is_empty() {
                0.0
            } else {
                1.0
            }
        }
    }
}
