//! Structural queries: shallow type uniformity and key uniqueness.
//!
//! Both checks are visitors that accumulate a verdict while the dispatcher
//! walks the tree. Each instance is meant to be driven by one top-level walk;
//! read the verdict with `is_valid()` afterwards.

use std::collections::HashSet;

use tracing::trace;

use crate::value::{JsonArray, JsonObject, JsonValue, ValueKind};
use crate::visitor::{Descend, EntryFlow, Visitor};

/// Checks that every element of a container is the same variant.
///
/// The container the walk starts on is the subject. Its elements (or, for an
/// object, its entry values) are judged: the first one locks the expected
/// [`ValueKind`], and every judged value must have that kind. Containers are
/// judged by variant only and not descended. `Null` never counts as uniform,
/// not even next to another `Null`: the first `Null` locks the kind and fails
/// the check on the spot.
#[derive(Debug, Default)]
pub struct SameKind {
    subject_seen: bool,
    locked: Option<ValueKind>,
    invalid: bool,
}

impl SameKind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        !self.invalid
    }

    fn judge(&mut self, kind: ValueKind) {
        let locked = *self.locked.get_or_insert(kind);
        if kind != locked || kind == ValueKind::Null {
            self.invalid = true;
        }
    }

    fn container(&mut self, kind: ValueKind) -> Descend {
        if !self.subject_seen {
            self.subject_seen = true;
            return Descend::Continue;
        }
        self.judge(kind);
        Descend::Stop
    }
}

impl Visitor for SameKind {
    fn visit_scalar(&mut self, value: &JsonValue) -> Descend {
        self.subject_seen = true;
        self.judge(value.kind());
        Descend::Continue
    }

    fn visit_object(&mut self, _object: &JsonObject) -> Descend {
        self.container(ValueKind::Object)
    }

    fn visit_array(&mut self, _array: &JsonArray) -> Descend {
        self.container(ValueKind::Array)
    }
}

/// Checks that no object in the tree has two entries with the same key.
///
/// An object is valid when its own keys are distinct and every container
/// among its values is valid; an array is valid when every container among
/// its elements is valid. Each nested container is checked by a fresh
/// instance, so keys are only compared between siblings.
#[derive(Debug, Default)]
pub struct UniqueKeys {
    subject_seen: bool,
    seen: HashSet<String>,
    invalid: bool,
}

impl UniqueKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        !self.invalid
    }

    fn nested(&mut self, walk: impl FnOnce(&mut UniqueKeys)) {
        let mut check = UniqueKeys::new();
        walk(&mut check);
        if !check.is_valid() {
            self.invalid = true;
        }
    }

    /// Claim the walk's first container as the subject; later ones are
    /// checked on their own.
    fn claim_subject(&mut self) -> bool {
        !std::mem::replace(&mut self.subject_seen, true)
    }
}

impl Visitor for UniqueKeys {
    fn visit_entry(&mut self, key: &str, value: &JsonValue) -> EntryFlow {
        if self.invalid {
            return EntryFlow::Skip;
        }
        if !self.seen.insert(key.to_string()) {
            trace!(key, "duplicate key");
            self.invalid = true;
            return EntryFlow::Skip;
        }
        if value.is_container() {
            self.nested(|check| value.accept(check));
        }
        EntryFlow::Skip
    }

    fn visit_object(&mut self, object: &JsonObject) -> Descend {
        if self.claim_subject() {
            return Descend::Continue;
        }
        if !self.invalid {
            self.nested(|check| object.accept(check));
        }
        Descend::Stop
    }

    fn visit_array(&mut self, array: &JsonArray) -> Descend {
        if self.claim_subject() {
            return Descend::Continue;
        }
        if !self.invalid {
            self.nested(|check| array.accept(check));
        }
        Descend::Stop
    }
}

impl JsonValue {
    /// Shallow type uniformity of this value's elements. See [`SameKind`].
    ///
    /// A scalar is judged on its own, so only `Null` fails.
    pub fn is_uniform(&self) -> bool {
        let mut check = SameKind::new();
        self.accept(&mut check);
        check.is_valid()
    }

    /// Key uniqueness of every object in this value. See [`UniqueKeys`].
    pub fn has_unique_keys(&self) -> bool {
        let mut check = UniqueKeys::new();
        self.accept(&mut check);
        check.is_valid()
    }
}

impl JsonArray {
    /// True when all elements are the same, non-null variant.
    ///
    /// ```
    /// use jsontree::{JsonArray, JsonValue};
    ///
    /// assert!(JsonArray::new(vec![1.into(), 2.into(), 3.into()]).is_uniform());
    /// assert!(!JsonArray::new(vec![JsonValue::Null, JsonValue::Null]).is_uniform());
    /// ```
    pub fn is_uniform(&self) -> bool {
        let mut check = SameKind::new();
        self.accept(&mut check);
        let valid = check.is_valid();
        trace!(len = self.len(), valid, "array uniformity check");
        valid
    }

    pub fn has_unique_keys(&self) -> bool {
        let mut check = UniqueKeys::new();
        self.accept(&mut check);
        check.is_valid()
    }
}

impl JsonObject {
    /// True when all entry values are the same, non-null variant.
    pub fn is_uniform(&self) -> bool {
        let mut check = SameKind::new();
        self.accept(&mut check);
        let valid = check.is_valid();
        trace!(len = self.len(), valid, "object uniformity check");
        valid
    }

    /// True when no object at any depth repeats a key among its own entries.
    pub fn has_unique_keys(&self) -> bool {
        let mut check = UniqueKeys::new();
        self.accept(&mut check);
        let valid = check.is_valid();
        trace!(len = self.len(), valid, "key uniqueness check");
        valid
    }
}
