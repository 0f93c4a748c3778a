//! Error types for the wire codec.

use std::fmt;
use thiserror::Error;

/// Locates a value inside a decoded document.
///
/// `entity` is the innermost entity that owns the value, `field` its wire key
/// (absent for elements of a top-level list) and `pointer` a JSON pointer from
/// the document root, e.g. `/us/2/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    entity: &'static str,
    field: Option<&'static str>,
    pointer: String,
}

impl FieldPath {
    /// Creates a path for `field` of `entity` at `pointer`.
    #[must_use]
    pub fn new(entity: &'static str, field: &'static str, pointer: impl Into<String>) -> Self {
        Self {
            entity,
            field: Some(field),
            pointer: pointer.into(),
        }
    }

    /// Path of an element of a top-level list of `T`.
    #[must_use]
    pub fn element_of<T: crate::WireEntity>(index: usize) -> Self {
        Self {
            entity: T::ENTITY,
            field: None,
            pointer: format!("/{index}"),
        }
    }

    /// Path of the `index`-th element below this path.
    #[must_use]
    pub fn element(&self, index: usize) -> Self {
        Self {
            entity: self.entity,
            field: self.field,
            pointer: format!("{}/{index}", self.pointer),
        }
    }

    /// Returns the name of the entity owning the value.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// Returns the wire key of the field, if the value is a field.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }

    /// Returns the JSON pointer from the document root.
    #[must_use]
    pub fn pointer(&self) -> &str {
        &self.pointer
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}.{} at {}", self.entity, field, self.pointer),
            None => write!(f, "{} at {}", self.entity, self.pointer),
        }
    }
}

/// Failures while decoding a wire payload. No partial value is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required key is absent or `null`.
    #[error("missing field {path}")]
    MissingField { path: FieldPath },

    /// A value has the wrong JSON shape.
    #[error("type mismatch for {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        actual: &'static str,
    },

    /// A date or timestamp string does not match the fixed wire format.
    #[error("malformed date for {path}: {raw:?}")]
    MalformedDate { path: FieldPath, raw: String },

    /// The input is not JSON, or its top-level shape is wrong.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl DecodeError {
    /// Returns the path of the failing value, if the error has one.
    #[must_use]
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MissingField { path }
            | Self::TypeMismatch { path, .. }
            | Self::MalformedDate { path, .. } => Some(path),
            Self::InvalidDocument(_) => None,
        }
    }
}

/// Failures while encoding a value. Well-typed values only fail on misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The fallback member of a wire enum has no tag to send.
    #[error("{name}::{variant} has no wire tag and cannot be encoded")]
    UnencodableVariant { name: &'static str, variant: String },

    /// A date or timestamp has a year the four-digit wire formats cannot hold.
    #[error("{value} is outside the wire date range (years 0000 to 9999)")]
    DateOutOfRange { value: String },

    /// The JSON writer rejected a value (e.g. a non-finite float).
    #[error("serialization error: {0}")]
    Serialization(String),
}
