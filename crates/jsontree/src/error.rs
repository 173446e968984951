//! Error types for tree construction, comparison and reflection.

use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur while building, editing, comparing or reflecting trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// A map key did not serialize to text (reflection path).
    #[error("map key must be a string, got {0}")]
    InvalidKeyType(String),

    /// The value's shape has no usable field list (reflection path).
    #[error("value is not convertible to a JSON tree: {0}")]
    NotConvertible(String),

    /// Equality or ordering was attempted between incompatible variants.
    #[error("cannot compare {left} with {right}")]
    InvalidComparison {
        left: &'static str,
        right: &'static str,
    },

    /// An edit was attempted on an immutable array or object.
    #[error("cannot modify an immutable {0}")]
    ImmutableContainer(&'static str),

    /// `remove(index)` was called past the end of an array.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Strict object construction saw the same key twice.
    #[error("duplicate key: {0:?}")]
    DuplicateKey(String),

    /// A `Serialize` implementation reported its own error.
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl serde::ser::Error for JsonError {
    fn custom<T: Display>(msg: T) -> Self {
        JsonError::Serialize(msg.to_string())
    }
}

/// Convenience alias used throughout jsontree.
pub type Result<T> = std::result::Result<T, JsonError>;
