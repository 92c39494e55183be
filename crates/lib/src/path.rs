//! Path types for dot-notation access into nested values.
//!
//! This module provides the dot-path pair used by every lookup and mutation
//! in this crate. The Path/PathBuf types follow the same borrowed/owned
//! pattern as std::path::Path/PathBuf.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and modified
//!
//! Bare string slices implement `AsRef<Path>`, so operations accept string
//! literals directly. An empty path addresses the whole value. Segments are
//! separated by dots; empty segments are ignored during traversal, so raw
//! un-normalized strings are safe to use as paths.
//!
//! # Usage
//!
//! ```rust
//! use rummage::PathBuf;
//! use std::str::FromStr;
//!
//! // Construct from string (automatically normalized)
//! let path = PathBuf::from_str("user.profile.name")?;
//!
//! // Build incrementally (infallible)
//! let built = PathBuf::new()
//!     .push("user")
//!     .push("profile")
//!     .push("name");
//!
//! assert_eq!(path, built);
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by cleaning up dots and empty segments.
///
/// - Empty string "" → empty string (refers to the whole value)
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
/// - Pure dots "..." → empty string
///
/// # Examples
///
/// ```rust
/// # use rummage::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// An owned dot-separated path.
///
/// `PathBuf` builds and manipulates paths for addressing nested values.
/// Construction through [`FromStr`] normalizes the input; the incremental
/// builders are infallible.
///
/// # Examples
///
/// ```rust
/// # use rummage::PathBuf;
/// # use std::str::FromStr;
/// let path = PathBuf::from_str("user.profile.name")?;
///
/// let segments: Vec<&str> = path.segments().collect();
/// assert_eq!(segments, vec!["user", "profile", "name"]);
/// assert_eq!(path.last_segment(), Some("name"));
/// # Ok::<(), std::convert::Infallible>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dot-separated path.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. It provides read-only access to path segments
/// without allocation.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a PathBuf by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        PathBuf {
            inner: normalize_path(path),
        }
    }

    /// Adds a path to the end of this path.
    ///
    /// Accepts both strings and path types, normalizing the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rummage::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile");
    /// assert_eq!(path.as_str(), "user.profile");
    ///
    /// // Dotted strings are normalized as they are pushed
    /// let path = PathBuf::new().push("user").push("name..first");
    /// assert_eq!(path.as_str(), "user.name.first");
    /// ```
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other_path = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other_path.inner.to_string();
        } else if !other_path.inner.is_empty() {
            self.inner.push('.');
            self.inner.push_str(&other_path.inner);
        }
        self
    }
}

impl Path {
    /// Wraps a string slice as a borrowed path.
    ///
    /// No validation is performed: segment iteration skips empty segments,
    /// so un-normalized input behaves the same as its normalized form.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is #[repr(transparent)] over str.
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path segments as string slices.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the parent path, or `None` if this path has at most one segment.
    pub fn parent(&self) -> Option<&Path> {
        self.inner
            .rfind('.')
            .map(|last_dot| Path::new(&self.inner[..last_dot]))
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments().next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Default for PathBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<&PathBuf> for PathBuf {
    fn from(path: &PathBuf) -> Self {
        path.clone()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path, with a zero-cost case for literals.
///
/// - `path!()` - Empty path (`PathBuf`)
/// - `path!("user.profile.name")` - Single literal (`&'static Path`, no allocation)
/// - `path!("user", "profile", "name")` - Multiple segments (`PathBuf`)
/// - `path!(base, "profile")` - Mix runtime values and literals (`PathBuf`)
///
/// # Examples
///
/// ```rust
/// use rummage::path;
///
/// let name = path!("user.profile.name");
/// let built = path!("user", "profile", "name");
/// assert_eq!(name.as_str(), built.as_str());
/// ```
#[macro_export]
macro_rules! path {
    // Empty path - returns PathBuf
    () => {
        $crate::PathBuf::new()
    };

    // Single string literal - returns &'static Path (zero allocation)
    ($single:literal) => {
        $crate::Path::new($single)
    };

    // Multiple arguments - returns PathBuf
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = $crate::PathBuf::new();

        fn add_segment(path: &mut $crate::PathBuf, segment: impl AsRef<str>) {
            let segment_str = segment.as_ref().trim();
            if !segment_str.is_empty() {
                *path = std::mem::take(path).push(segment_str);
            }
        }

        let first_str = $first.to_string();
        add_segment(&mut path, first_str);

        $(
            let rest_str = $rest.to_string();
            add_segment(&mut path, rest_str);
        )*

        path
    }};
}
