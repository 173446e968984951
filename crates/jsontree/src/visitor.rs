//! Pre-order, depth-first traversal driven by a [`Visitor`].
//!
//! The dispatcher calls one hook per node before looking at its children.
//! Container hooks may answer [`Descend::Stop`] to keep the walk out of that
//! container, and the entry hook may answer [`EntryFlow::Skip`] to keep it
//! out of one entry's value. A visitor uses these signals to take a subtree
//! over, for example by running a nested filter on it and splicing in the
//! result, without the dispatcher visiting the same nodes a second time.
//!
//! # Example
//!
//! ```
//! use jsontree::{Descend, JsonArray, JsonValue, Visitor};
//!
//! struct CountStrings(usize);
//!
//! impl Visitor for CountStrings {
//!     fn visit_scalar(&mut self, value: &JsonValue) -> Descend {
//!         if value.as_str().is_some() {
//!             self.0 += 1;
//!         }
//!         Descend::Continue
//!     }
//! }
//!
//! let array = JsonArray::new(vec!["a".into(), 1.into(), "b".into()]);
//! let mut counter = CountStrings(0);
//! array.accept(&mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use crate::value::{JsonArray, JsonObject, JsonValue};

/// Answer of a node hook: walk into the node's children or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Continue,
    Stop,
}

/// Answer of the entry hook: walk into the entry's value or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFlow {
    Continue,
    Skip,
}

/// Hooks called by [`accept`]. Every hook defaults to continuing without
/// doing anything, so a visitor overrides only what it needs.
#[allow(unused_variables)]
pub trait Visitor {
    /// Called for `Null`, `Boolean`, `Number` and `String` nodes. Scalars have
    /// no children, so the answer does not change the walk.
    fn visit_scalar(&mut self, value: &JsonValue) -> Descend {
        Descend::Continue
    }

    /// Called for each object entry, before its value is visited.
    fn visit_entry(&mut self, key: &str, value: &JsonValue) -> EntryFlow {
        EntryFlow::Continue
    }

    /// Called for each object, before its entries.
    fn visit_object(&mut self, object: &JsonObject) -> Descend {
        Descend::Continue
    }

    /// Called for each array, before its elements.
    fn visit_array(&mut self, array: &JsonArray) -> Descend {
        Descend::Continue
    }
}

/// Walk `value` and everything below it.
pub fn accept<V: Visitor + ?Sized>(value: &JsonValue, visitor: &mut V) {
    match value {
        JsonValue::Object(object) => walk_object(object, visitor),
        JsonValue::Array(array) => walk_array(array, visitor),
        JsonValue::Null | JsonValue::Boolean(_) | JsonValue::Number(_) | JsonValue::String(_) => {
            visitor.visit_scalar(value);
        }
    }
}

/// Walk an object: the object hook, then each entry hook followed by the
/// entry's value unless the entry was skipped.
pub fn walk_object<V: Visitor + ?Sized>(object: &JsonObject, visitor: &mut V) {
    if visitor.visit_object(object) == Descend::Stop {
        return;
    }
    for (key, value) in object.iter() {
        if visitor.visit_entry(key, value) == EntryFlow::Skip {
            continue;
        }
        accept(value, visitor);
    }
}

/// Walk an array: the array hook, then each element in order.
pub fn walk_array<V: Visitor + ?Sized>(array: &JsonArray, visitor: &mut V) {
    if visitor.visit_array(array) == Descend::Stop {
        return;
    }
    for element in array.iter() {
        accept(element, visitor);
    }
}

impl JsonValue {
    /// Drive `visitor` over this value. See [`accept`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        accept(self, visitor);
    }
}

impl JsonArray {
    /// Drive `visitor` over this array. See [`walk_array`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk_array(self, visitor);
    }
}

impl JsonObject {
    /// Drive `visitor` over this object. See [`walk_object`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk_object(self, visitor);
    }
}
