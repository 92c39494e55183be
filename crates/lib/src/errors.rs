//! Error types for strict operations.
//!
//! Most of this crate is lenient: lookups resolve a caller-supplied default
//! and mutations silently no-op when a path cannot be reached. The
//! extraction operations ([`fetch`](crate::fetch), [`pluck`](crate::pluck),
//! [`pluck_keyed`](crate::pluck_keyed)) and the typed conversions are the
//! exception, and this module defines the errors they fail with.

use thiserror::Error;

/// Structured error types for strict extraction and conversion failures.
///
/// Strict operations fail fast: the first missing field or unusable key
/// aborts the whole call, and no partial results are returned.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A field required by an extraction was absent from an item.
    #[error("missing field '{field}' in item at key '{item}'")]
    MissingField { field: String, item: String },

    /// A value could not be coerced into a map key.
    #[error("cannot use {type_name} value as a map key")]
    InvalidKey { type_name: String },

    /// A typed accessor or conversion found a value of the wrong type.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl Error {
    /// Check if this error reports a field missing from an item
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Error::MissingField { .. })
    }

    /// Check if this error reports a value unusable as a map key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::InvalidKey { .. })
    }

    /// Check if this error reports a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Get the missing field name if this is a field lookup error
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField { field, .. } => Some(field),
            _ => None,
        }
    }
}
