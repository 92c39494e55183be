//!
//! Rummage: dot-path access, linearization, and shaping for nested dynamic data.
//!
//! This library works on loosely structured trees (decoded JSON, parsed
//! config files, API payloads) where the shape is known informally and code
//! wants to reach into it without declaring types first.
//!
//! ## Core Concepts
//!
//! * **Values (`Value`)**: The dynamic tree node. A closed sum over scalars
//!   (null, bool, int, float, text), insertion-ordered mappings (`Map`), and
//!   opaque property bags (`Object`).
//! * **Paths (`Path`, `PathBuf`, [`path!`])**: Dot-separated addresses into a
//!   tree, with the same borrowed/owned split as `std::path`. Bare string
//!   literals work anywhere a path is expected.
//! * **Access (`get`, `set`, `add`, `forget`, `pull`)**: Lenient resolution
//!   and structural mutation. Lookups resolve a [`Fallback`] default instead
//!   of failing; mutations create or skip structure as needed.
//! * **Linearization (`dot`, `flatten`, `fetch`)**: Collapsing a nested tree
//!   into dotted keys, bare leaves, or a per-element field projection.
//! * **Shaping (`except`, `only`, `pluck`, `filter`, `sort_by`, ...)**:
//!   Building new collections out of old ones, preserving key association
//!   and insertion order.
//!
//! Lookups and mutations never fail. The extraction operations ([`fetch`],
//! [`pluck`], [`pluck_keyed`]) are strict: they return a [`Result`] and fail
//! on the first element missing a requested field.
//!
//! ## Example
//!
//! ```
//! use rummage::{Map, Value, get, pluck, set};
//!
//! let mut inventory = Value::Map(Map::new());
//! set(&mut inventory, "fruit.apple.stock", 12);
//! set(&mut inventory, "fruit.pear.stock", 7);
//!
//! assert_eq!(get(&inventory, "fruit.pear.stock", 0), 7);
//! assert_eq!(get(&inventory, "fruit.plum.stock", 0), 0);
//!
//! let fruit = get(&inventory, "fruit", ());
//! let stocks = pluck(fruit.as_map().unwrap(), "stock").unwrap();
//! assert_eq!(stocks, vec![Value::Int(12), Value::Int(7)]);
//! ```

mod access;
mod errors;
mod linearize;
pub mod path;
mod shape;
mod value;

pub use access::{Fallback, add, data_get, forget, forget_all, get, pull, set};
pub use errors::Error;
pub use linearize::{dot, dot_prefixed, fetch, flatten};
pub use path::{Path, PathBuf};
pub use shape::{
    SortOptions, build, divide, except, filter, first, last, only, pluck, pluck_keyed, sort,
    sort_by, sort_by_field, values,
};
pub use value::{Key, Map, Object, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
