//! Dot-path resolution: lenient lookups and structural mutation.
//!
//! The functions here address into a [`Value`] tree with dot-separated
//! paths. Lookups ([`get`], [`data_get`], [`pull`]) never fail; a path that
//! cannot be resolved yields a caller-supplied [`Fallback`] instead.
//! Mutations ([`set`], [`add`], [`forget`]) never fail either: `set` creates
//! the structure it needs, `forget` quietly abandons paths that do not
//! exist, and `add` declines to overwrite.
//!
//! ```
//! use rummage::{Map, Value, get, set};
//!
//! let mut config = Value::Map(Map::new());
//! set(&mut config, "server.port", 8080);
//! set(&mut config, "server.host", "localhost");
//!
//! assert_eq!(get(&config, "server.port", ()), 8080);
//! assert_eq!(get(&config, "server.tls", false), false);
//! ```

use crate::{
    Map, Value,
    path::Path,
    value::{Key, Object},
};

/// A default for lenient lookups: either a ready value or a deferred
/// computation.
///
/// Most call sites pass a plain value (or `()` for null) and never see this
/// type; [`Fallback::computed`] defers expensive defaults until a lookup
/// actually misses.
///
/// ```
/// use rummage::{Fallback, Map, Value, get};
///
/// let data = Value::Map(Map::new().with("name", "Alice"));
///
/// assert_eq!(get(&data, "name", ()), "Alice");
/// assert_eq!(get(&data, "role", "guest"), "guest");
///
/// // Computed defaults only run on a miss
/// let fallback = Fallback::computed(|| "expensive".to_string());
/// assert_eq!(get(&data, "role", fallback), "expensive");
/// ```
pub enum Fallback {
    /// A value returned as-is on a miss.
    Literal(Value),
    /// A computation run only when a miss occurs.
    Computed(Box<dyn FnOnce() -> Value>),
}

impl Fallback {
    /// Wraps a deferred computation, run only if the lookup misses.
    pub fn computed<T, F>(f: F) -> Self
    where
        T: Into<Value>,
        F: FnOnce() -> T + 'static,
    {
        Fallback::Computed(Box::new(move || f().into()))
    }

    /// Produces the fallback value, running the computation if deferred.
    pub fn resolve(self) -> Value {
        match self {
            Fallback::Literal(value) => value,
            Fallback::Computed(f) => f(),
        }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::Literal(Value::Null)
    }
}

impl std::fmt::Debug for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Fallback::Computed(_) => f.debug_tuple("Computed").field(&"<closure>").finish(),
        }
    }
}

impl From<Value> for Fallback {
    fn from(value: Value) -> Self {
        Fallback::Literal(value)
    }
}

impl From<()> for Fallback {
    fn from(_: ()) -> Self {
        Fallback::Literal(Value::Null)
    }
}

impl From<bool> for Fallback {
    fn from(value: bool) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<i64> for Fallback {
    fn from(value: i64) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<i32> for Fallback {
    fn from(value: i32) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<u32> for Fallback {
    fn from(value: u32) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<f64> for Fallback {
    fn from(value: f64) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<&str> for Fallback {
    fn from(value: &str) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<String> for Fallback {
    fn from(value: String) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<Map> for Fallback {
    fn from(value: Map) -> Self {
        Fallback::Literal(value.into())
    }
}

impl From<Object> for Fallback {
    fn from(value: Object) -> Self {
        Fallback::Literal(value.into())
    }
}

/// Looks up a value by dot path, resolving `default` on a miss.
///
/// The empty path returns the whole node. On a mapping, a top-level key
/// that literally equals the full path string (dots included) wins over
/// dot descent; otherwise the path is split and each segment descends
/// through one level of mapping. Any miss along the way resolves the
/// default. A stored null at the resolved path is returned as null, not
/// replaced by the default.
///
/// ```
/// use rummage::{Map, Value, get};
///
/// let data = Value::Map(
///     Map::new()
///         .with("a", Map::new().with("b", 1))
///         .with("a.b", "literal"),
/// );
///
/// // The literal top-level key shadows descent
/// assert_eq!(get(&data, "a.b", ()), "literal");
/// assert_eq!(get(&data, "a.c", 99), 99);
/// ```
pub fn get(node: &Value, path: impl AsRef<Path>, default: impl Into<Fallback>) -> Value {
    let path = path.as_ref();
    let default = default.into();

    if path.is_empty() {
        return node.clone();
    }

    if let Value::Map(map) = node {
        // Exact top-level match takes priority over descent
        if let Some(value) = map.get(path.as_str()) {
            return value.clone();
        }
    }

    let mut current = node;
    for segment in path.segments() {
        match current {
            Value::Map(map) => match map.get(segment) {
                Some(child) => current = child,
                None => return default.resolve(),
            },
            _ => return default.resolve(),
        }
    }
    current.clone()
}

/// Looks up a value by dot path, descending through objects as well.
///
/// Unlike [`get`], there is no whole-path fast path, and segments resolve
/// against object properties in addition to mapping keys. This is the
/// retriever used by [`sort_by_field`](crate::sort_by_field).
///
/// ```
/// use rummage::{Map, Object, Value, data_get};
///
/// let user = Value::Object(
///     Object::new().with("profile", Map::new().with("name", "Alice")),
/// );
///
/// assert_eq!(data_get(&user, "profile.name", ()), "Alice");
/// assert_eq!(data_get(&user, "profile.email", ()), Value::Null);
/// ```
pub fn data_get(node: &Value, path: impl AsRef<Path>, default: impl Into<Fallback>) -> Value {
    let path = path.as_ref();
    let default = default.into();

    if path.is_empty() {
        return node.clone();
    }

    let mut current = node;
    for segment in path.segments() {
        let child = match current {
            Value::Map(map) => map.get(segment),
            Value::Object(object) => object.property(segment),
            _ => None,
        };
        match child {
            Some(next) => current = next,
            None => return default.resolve(),
        }
    }
    current.clone()
}

/// Sets the value at a dot path, returning the value it displaced.
///
/// Missing intermediate mappings are created; intermediate values that are
/// not mappings (including the root) are discarded and replaced by empty
/// mappings, so a `set` always succeeds. The empty path replaces the whole
/// node.
///
/// ```
/// use rummage::{Value, get, set};
///
/// let mut data = Value::Null;
/// set(&mut data, "user.profile.name", "Alice");
/// assert_eq!(get(&data, "user.profile.name", ()), "Alice");
///
/// // Setting through a scalar discards it
/// let old = set(&mut data, "user.profile.name.first", "A");
/// assert_eq!(old, None);
/// assert_eq!(get(&data, "user.profile.name.first", ()), "A");
/// ```
pub fn set(node: &mut Value, path: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
    let path = path.as_ref();
    let value = value.into();

    let segments: Vec<&str> = path.segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        return Some(std::mem::replace(node, value));
    };

    let mut current = node;
    for &segment in parents {
        let map = ensure_map(current);
        let key = Key::from_segment(segment);
        if !matches!(map.get(key.clone()), Some(Value::Map(_))) {
            if let Some(old) = map.insert(key.clone(), Map::new()) {
                tracing::debug!(
                    segment,
                    discarded = old.type_name(),
                    "Discarded non-mapping value while creating intermediate path"
                );
            }
        }
        current = match map.get_mut(key) {
            Some(child) => child,
            None => unreachable!("intermediate mapping was just inserted"),
        };
    }

    ensure_map(current).insert(Key::from_segment(last), value)
}

/// Replaces a non-mapping node with an empty mapping and returns the map.
fn ensure_map(node: &mut Value) -> &mut Map {
    if !node.is_map() {
        tracing::debug!(
            discarded = node.type_name(),
            "Replaced non-mapping value with an empty mapping"
        );
        *node = Value::Map(Map::new());
    }
    match node {
        Value::Map(map) => map,
        _ => unreachable!(),
    }
}

/// Sets the value at a dot path only if nothing (or null) is there.
///
/// ```
/// use rummage::{Map, Value, add, get};
///
/// let mut data = Value::Map(Map::new().with("name", "Alice"));
/// add(&mut data, "name", "Bob");   // present, no-op
/// add(&mut data, "role", "admin"); // absent, inserted
///
/// assert_eq!(get(&data, "name", ()), "Alice");
/// assert_eq!(get(&data, "role", ()), "admin");
/// ```
pub fn add(node: &mut Value, path: impl AsRef<Path>, value: impl Into<Value>) {
    let path = path.as_ref();
    if get(node, path, ()).is_null() {
        set(node, path, value);
    }
}

/// Removes the value at a dot path, returning it if something was removed.
///
/// Traversal stops at the first missing or non-mapping intermediate and
/// removes nothing; partial paths are never torn down. The empty path
/// removes nothing.
///
/// ```
/// use rummage::{Map, Value, forget, get};
///
/// let mut data = Value::Map(Map::new().with("a", Map::new().with("b", 1)));
/// assert_eq!(forget(&mut data, "a.b"), Some(Value::Int(1)));
///
/// // Missing intermediate: nothing is removed
/// assert_eq!(forget(&mut data, "x.y.z"), None);
/// assert_eq!(get(&data, "a", ()), Value::Map(Map::new()));
/// ```
pub fn forget(node: &mut Value, path: impl AsRef<Path>) -> Option<Value> {
    let path = path.as_ref();
    let segments: Vec<&str> = path.segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        return None;
    };

    let mut current = node;
    for &segment in parents {
        let child = match current {
            Value::Map(map) => map.get_mut(segment),
            _ => None,
        };
        match child {
            Some(next) => current = next,
            None => {
                tracing::trace!(path = %path, segment, "Abandoned removal at unreachable segment");
                return None;
            }
        }
    }

    match current {
        Value::Map(map) => map.remove(*last),
        _ => None,
    }
}

/// Removes the values at several dot paths.
///
/// Each path follows [`forget`]'s rules independently.
pub fn forget_all(node: &mut Value, paths: impl IntoIterator<Item = impl AsRef<Path>>) {
    for path in paths {
        forget(node, path);
    }
}

/// Reads the value at a dot path, then removes it.
///
/// The read happens before any mutation and follows [`get`]'s rules
/// (including the whole-path fast path); the removal follows [`forget`]'s.
///
/// ```
/// use rummage::{Map, Value, get, pull};
///
/// let mut data = Value::Map(Map::new().with("token", "abc123"));
/// assert_eq!(pull(&mut data, "token", ()), "abc123");
/// assert_eq!(get(&data, "token", "gone"), "gone");
/// ```
pub fn pull(node: &mut Value, path: impl AsRef<Path>, default: impl Into<Fallback>) -> Value {
    let path = path.as_ref();
    let value = get(node, path, default);
    forget(node, path);
    value
}
