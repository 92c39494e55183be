//! Insertion-ordered mapping.
//!
//! [`Map`] is the traversable container of the value model: an ordered list
//! of key/value entries with by-key lookup. It plays the role both of an
//! associative map and of a list (integer keys `0..n`), which is why
//! serialization renders list-shaped maps as arrays.

use std::fmt;

use super::{Key, Value};
use crate::errors::Error;

/// An insertion-ordered mapping from [`Key`] to [`Value`].
///
/// Entries iterate in the order they were first inserted. Overwriting an
/// existing key replaces the value but keeps the entry's original position;
/// removing an entry closes the gap, preserving the relative order of the
/// rest.
///
/// ```
/// # use rummage::{Map, Value};
/// let mut map = Map::new().with("b", 1).with("a", 2);
/// map.insert("b", 10); // stays first
///
/// let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(map.get("b"), Some(&Value::Int(10)));
/// ```
///
/// Integer and text keys unify through canonicalization: looking up `"5"`
/// finds an entry stored under `5`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    entries: Vec<(Key, Value)>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a map with `0..n` integer keys from a sequence of values.
    ///
    /// ```
    /// # use rummage::{Key, Map};
    /// let list = Map::from_values(vec!["a", "b"]);
    /// assert_eq!(list.get(0).unwrap(), "a");
    /// assert_eq!(list.get(1).unwrap(), "b");
    /// ```
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let mut map = Map::new();
        for value in values {
            map.push(value);
        }
        map
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the keys are exactly `0..len` in order.
    ///
    /// List-shaped maps serialize as JSON arrays. The empty map counts as a
    /// list.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(index, (key, _))| key.as_int() == Some(index as i64))
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }

    /// Returns `true` if the map contains the given key.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.position(&key.into()).is_some()
    }

    /// Gets a value by key.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let key = key.into();
        self.position(&key).map(|index| &self.entries[index].1)
    }

    /// Gets a mutable reference to a value by key.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        let key = key.into();
        self.position(&key).map(|index| &mut self.entries[index].1)
    }

    /// Gets a value by key, converted to the requested type.
    ///
    /// Returns `None` when the key is absent or the value has the wrong
    /// type.
    ///
    /// ```
    /// # use rummage::Map;
    /// let map = Map::new().with("name", "Alice").with("age", 30);
    /// assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(map.get_as::<i64>("age"), Some(30));
    /// assert_eq!(map.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl Into<Key>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = Error>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Inserts a value under a key, returning the previous value if present.
    ///
    /// An existing key keeps its original position in iteration order.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends a value under the next integer key.
    ///
    /// The next key is one past the largest integer key, or `0` for a map
    /// without non-negative integer keys. When the largest key is already
    /// `i64::MAX` the next index saturates onto it and the entry is
    /// replaced, keeping keys unique.
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self
            .entries
            .iter()
            .filter_map(|(key, _)| key.as_int())
            .max()
            .map_or(0, |max| max.saturating_add(1).max(0));
        self.insert(Key::Int(next), value);
    }

    /// Removes an entry by key, returning its value if present.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        self.position(&key).map(|index| self.entries.remove(index).1)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over the entries with mutable access to the values.
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&Key, &mut Value)> + ExactSizeIterator {
        self.entries.iter_mut().map(|(key, value)| (&*key, value))
    }

    /// Builder-style insert for constructing maps inline.
    ///
    /// ```
    /// # use rummage::Map;
    /// let map = Map::new()
    ///     .with("name", "Alice")
    ///     .with("age", 30)
    ///     .with("tags", Map::from_values(vec!["admin", "ops"]));
    /// assert_eq!(map.len(), 3);
    /// ```
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
