//! Object-like values.

use std::fmt;

use super::Value;

/// A bag of named properties, held in declaration order.
///
/// `Object` is the object-like case of the value model: dot-path traversal
/// treats it as opaque, but operations that document property access
/// ([`data_get`](crate::data_get), [`fetch`](crate::fetch),
/// [`pluck`](crate::pluck)) look up its properties by name.
///
/// Objects serialize as JSON maps, so they deserialize back as
/// [`Map`](super::Map); the distinction only exists on values built in
/// memory.
///
/// ```
/// # use rummage::Object;
/// let user = Object::new().with("name", "Alice").with("age", 30);
/// assert_eq!(user.property("name").unwrap(), "Alice");
/// assert!(user.property("email").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    properties: Vec<(String, Value)>,
}

impl Object {
    /// Creates a new empty object.
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.properties
            .iter()
            .position(|(existing, _)| existing == name)
    }

    /// Gets a property value by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|index| &self.properties[index].1)
    }

    /// Gets a mutable reference to a property value by name.
    pub fn property_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.position(name)
            .map(|index| &mut self.properties[index].1)
    }

    /// Sets a property, returning the previous value if present.
    ///
    /// An existing property keeps its original position.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.properties[index].1, value)),
            None => {
                self.properties.push((name, value));
                None
            }
        }
    }

    /// Removes a property by name, returning its value if present.
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.position(name)
            .map(|index| self.properties.remove(index).1)
    }

    /// Iterates over the properties in declaration order.
    pub fn properties(&self) -> impl DoubleEndedIterator<Item = (&str, &Value)> + ExactSizeIterator {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Builder-style property set for constructing objects inline.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(name, value);
        self
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (name, value) in iter {
            object.set_property(name, value);
        }
        object
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}
