//! # jsontree
//!
//! An in-memory JSON value tree with a visitor-driven traversal engine.
//!
//! Trees are built by hand or reflected from any `serde::Serialize` value,
//! and can be rendered to text, checked for shallow type uniformity and key
//! uniqueness, or transformed into new trees with `filter` and `map`.
//! There is no parser: this crate only goes from tree to text.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree::{JsonArray, JsonObject, JsonValue};
//!
//! let scores = JsonArray::new(vec![95.into(), 87.into(), 92.into()]);
//! assert!(scores.is_uniform());
//!
//! let doc = JsonObject::new([
//!     ("name", JsonValue::from("Alice")),
//!     ("scores", JsonValue::Array(scores)),
//! ]);
//! assert!(doc.has_unique_keys());
//!
//! let high = doc.filter_values(|v| v.as_number().is_some_and(|n| n.as_f64() > 90.0));
//! assert_eq!(high.to_string(), r#"{"scores": [95, 92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `JsonValue`, `JsonArray`, `JsonObject` and their container kinds
//! - [`number`]: `JsonNumber` and its representation-preserving arithmetic
//! - [`visitor`]: the `Visitor` trait and the `accept` dispatcher
//! - [`check`]: type-uniformity and key-uniqueness visitors
//! - [`transform`]: filter and map
//! - [`reflect`]: `to_tree` for any `Serialize` value
//! - [`render`]: compact and pretty text output
//! - [`error`]: Error types

pub mod check;
pub mod error;
pub mod number;
pub mod reflect;
pub mod render;
pub mod transform;
pub mod value;
pub mod visitor;

pub use check::{SameKind, UniqueKeys};
pub use error::{JsonError, Result};
pub use number::JsonNumber;
pub use reflect::{to_tree, ToTree, TreeSerializer};
pub use value::{ContainerKind, JsonArray, JsonObject, JsonValue, ValueKind};
pub use visitor::{accept, walk_array, walk_object, Descend, EntryFlow, Visitor};
