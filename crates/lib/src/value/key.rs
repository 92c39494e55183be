//! Map keys with integer/string duality.

use std::fmt;

use super::Value;
use crate::errors::Error;

/// A key in a [`Map`](super::Map): either an integer index or a text name.
///
/// Keys constructed through `From<&str>`/`From<String>` are canonicalized:
/// a string that is the canonical decimal rendering of an `i64` becomes
/// [`Key::Int`], everything else stays [`Key::Text`]. `"5"` and `5` are
/// therefore the same key, while `"05"`, `"+5"`, and `"5.0"` remain text.
///
/// ```
/// # use rummage::Key;
/// assert_eq!(Key::from("5"), Key::Int(5));
/// assert_eq!(Key::from("05"), Key::Text("05".to_string()));
/// assert_eq!(Key::from("name"), Key::Text("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer index
    Int(i64),
    /// Text name
    Text(String),
}

impl Key {
    /// Builds the canonical key for one path segment.
    ///
    /// Canonical integer strings become [`Key::Int`]; anything else,
    /// including zero-padded or signed renderings, becomes [`Key::Text`].
    pub fn from_segment(segment: &str) -> Key {
        match segment.parse::<i64>() {
            Ok(n) if n.to_string() == segment => Key::Int(n),
            _ => Key::Text(segment.to_string()),
        }
    }

    /// Returns true if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true if this is a text key
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Text(_))
    }

    /// Returns the integer index, if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text name, if this is a text key
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::from_segment(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::from_segment(&value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// Coerces a scalar value into a key, the way dynamic languages key arrays.
///
/// Null becomes the empty text key, booleans become `0`/`1`, floats
/// truncate toward zero, and text canonicalizes through
/// [`Key::from_segment`]. Containers cannot be keys.
impl TryFrom<&Value> for Key {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Text(String::new())),
            Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
            Value::Int(n) => Ok(Key::Int(*n)),
            Value::Float(x) => Ok(Key::Int(*x as i64)),
            Value::Text(s) => Ok(Key::from_segment(s)),
            Value::Map(_) | Value::Object(_) => Err(Error::InvalidKey {
                type_name: value.type_name().to_string(),
            }),
        }
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match self {
            Key::Text(s) => s == other,
            Key::Int(n) => n.to_string() == other,
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Key::Int(n) => n == other,
            _ => false,
        }
    }
}
