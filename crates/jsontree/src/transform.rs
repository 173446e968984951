//! Structure-preserving transforms: filter and map.
//!
//! Both transforms are visitors that collect a new container while the
//! dispatcher walks the input. When the walk reaches a nested container the
//! visitor runs a fresh transform on it, splices the result in, and answers
//! `Stop`/`Skip` so the dispatcher does not walk that subtree again.
//!
//! Composition rules shared by filter and map:
//!
//! - A nested container is kept only if its transformed copy is non-empty.
//!   This prunes containers that were already empty in the input too.
//! - The result has the [`ContainerKind`] of the container the transform was
//!   called on.
//! - Filter keeps an object's entries as they are, repeated keys included.
//!   Map coalesces keys that collide after `key_action`, last value winning.
//! - The input is never modified.
//!
//! Map shrinks trees the same way filter does: an entry or element whose
//! mapped container comes out empty disappears from its parent, so map is not
//! strictly shape-preserving.

use tracing::trace;

use crate::value::{ContainerKind, JsonArray, JsonObject, JsonValue};
use crate::visitor::{Descend, EntryFlow, Visitor};

type ValuePredicate<'f> = &'f dyn Fn(&JsonValue) -> bool;
type KeyPredicate<'f> = &'f dyn Fn(&str) -> bool;
type ValueAction<'f> = &'f dyn Fn(&JsonValue) -> JsonValue;
type KeyAction<'f> = &'f dyn Fn(&str) -> String;

// ============================================================================
// Filter
// ============================================================================

struct ObjectFilter<'f> {
    value_predicate: ValuePredicate<'f>,
    key_predicate: KeyPredicate<'f>,
    kind: Option<ContainerKind>,
    kept: Vec<(String, JsonValue)>,
}

impl<'f> ObjectFilter<'f> {
    fn new(value_predicate: ValuePredicate<'f>, key_predicate: KeyPredicate<'f>) -> Self {
        Self {
            value_predicate,
            key_predicate,
            kind: None,
            kept: Vec::new(),
        }
    }

    /// Kept entries are a subset of the input's, so repeated keys stay
    /// repeated.
    fn finish(self) -> JsonObject {
        JsonObject::from_parts(self.kept, self.kind.unwrap_or_default())
    }
}

impl Visitor for ObjectFilter<'_> {
    fn visit_entry(&mut self, key: &str, value: &JsonValue) -> EntryFlow {
        match value {
            JsonValue::Array(array) => {
                let filtered = filter_array(array, self.value_predicate, self.key_predicate);
                if !filtered.is_empty() {
                    self.kept.push((key.to_string(), JsonValue::Array(filtered)));
                }
            }
            JsonValue::Object(object) => {
                let filtered = filter_object(object, self.value_predicate, self.key_predicate);
                if !filtered.is_empty() {
                    self.kept.push((key.to_string(), JsonValue::Object(filtered)));
                }
            }
            scalar => {
                if (self.value_predicate)(scalar) && (self.key_predicate)(key) {
                    self.kept.push((key.to_string(), scalar.clone()));
                }
            }
        }
        EntryFlow::Skip
    }

    fn visit_object(&mut self, object: &JsonObject) -> Descend {
        if self.kind.is_some() {
            return Descend::Stop;
        }
        self.kind = Some(object.kind());
        Descend::Continue
    }

    fn visit_array(&mut self, _array: &JsonArray) -> Descend {
        Descend::Stop
    }
}

struct ArrayFilter<'f> {
    value_predicate: ValuePredicate<'f>,
    key_predicate: KeyPredicate<'f>,
    kind: Option<ContainerKind>,
    kept: Vec<JsonValue>,
}

impl<'f> ArrayFilter<'f> {
    fn new(value_predicate: ValuePredicate<'f>, key_predicate: KeyPredicate<'f>) -> Self {
        Self {
            value_predicate,
            key_predicate,
            kind: None,
            kept: Vec::new(),
        }
    }

    fn finish(self) -> JsonArray {
        JsonArray::with_kind(self.kept, self.kind.unwrap_or_default())
    }
}

impl Visitor for ArrayFilter<'_> {
    fn visit_scalar(&mut self, value: &JsonValue) -> Descend {
        if (self.value_predicate)(value) {
            self.kept.push(value.clone());
        }
        Descend::Continue
    }

    fn visit_object(&mut self, object: &JsonObject) -> Descend {
        let filtered = filter_object(object, self.value_predicate, self.key_predicate);
        if !filtered.is_empty() {
            self.kept.push(JsonValue::Object(filtered));
        }
        Descend::Stop
    }

    fn visit_array(&mut self, array: &JsonArray) -> Descend {
        if self.kind.is_none() {
            self.kind = Some(array.kind());
            return Descend::Continue;
        }
        let filtered = filter_array(array, self.value_predicate, self.key_predicate);
        if !filtered.is_empty() {
            self.kept.push(JsonValue::Array(filtered));
        }
        Descend::Stop
    }
}

fn filter_object(
    object: &JsonObject,
    value_predicate: ValuePredicate<'_>,
    key_predicate: KeyPredicate<'_>,
) -> JsonObject {
    let mut filter = ObjectFilter::new(value_predicate, key_predicate);
    object.accept(&mut filter);
    filter.finish()
}

fn filter_array(
    array: &JsonArray,
    value_predicate: ValuePredicate<'_>,
    key_predicate: KeyPredicate<'_>,
) -> JsonArray {
    let mut filter = ArrayFilter::new(value_predicate, key_predicate);
    array.accept(&mut filter);
    filter.finish()
}

// ============================================================================
// Map
// ============================================================================

struct ObjectMap<'f> {
    value_action: ValueAction<'f>,
    key_action: KeyAction<'f>,
    kind: Option<ContainerKind>,
    mapped: Vec<(String, JsonValue)>,
}

impl<'f> ObjectMap<'f> {
    fn new(value_action: ValueAction<'f>, key_action: KeyAction<'f>) -> Self {
        Self {
            value_action,
            key_action,
            kind: None,
            mapped: Vec::new(),
        }
    }

    /// Keys that collide after `key_action` coalesce, last one wins.
    fn finish(self) -> JsonObject {
        JsonObject::with_kind(self.mapped, self.kind.unwrap_or_default())
    }
}

impl Visitor for ObjectMap<'_> {
    fn visit_entry(&mut self, key: &str, value: &JsonValue) -> EntryFlow {
        match value {
            JsonValue::Array(array) => {
                let mapped = map_array(array, self.value_action, self.key_action);
                if !mapped.is_empty() {
                    self.mapped
                        .push(((self.key_action)(key), JsonValue::Array(mapped)));
                }
            }
            JsonValue::Object(object) => {
                let mapped = map_object(object, self.value_action, self.key_action);
                if !mapped.is_empty() {
                    self.mapped
                        .push(((self.key_action)(key), JsonValue::Object(mapped)));
                }
            }
            scalar => {
                self.mapped
                    .push(((self.key_action)(key), (self.value_action)(scalar)));
            }
        }
        EntryFlow::Skip
    }

    fn visit_object(&mut self, object: &JsonObject) -> Descend {
        if self.kind.is_some() {
            return Descend::Stop;
        }
        self.kind = Some(object.kind());
        Descend::Continue
    }

    fn visit_array(&mut self, _array: &JsonArray) -> Descend {
        Descend::Stop
    }
}

struct ArrayMap<'f> {
    value_action: ValueAction<'f>,
    key_action: KeyAction<'f>,
    kind: Option<ContainerKind>,
    mapped: Vec<JsonValue>,
}

impl<'f> ArrayMap<'f> {
    fn new(value_action: ValueAction<'f>, key_action: KeyAction<'f>) -> Self {
        Self {
            value_action,
            key_action,
            kind: None,
            mapped: Vec::new(),
        }
    }

    fn finish(self) -> JsonArray {
        JsonArray::with_kind(self.mapped, self.kind.unwrap_or_default())
    }
}

impl Visitor for ArrayMap<'_> {
    fn visit_scalar(&mut self, value: &JsonValue) -> Descend {
        self.mapped.push((self.value_action)(value));
        Descend::Continue
    }

    fn visit_object(&mut self, object: &JsonObject) -> Descend {
        let mapped = map_object(object, self.value_action, self.key_action);
        if !mapped.is_empty() {
            self.mapped.push(JsonValue::Object(mapped));
        }
        Descend::Stop
    }

    fn visit_array(&mut self, array: &JsonArray) -> Descend {
        if self.kind.is_none() {
            self.kind = Some(array.kind());
            return Descend::Continue;
        }
        let mapped = map_array(array, self.value_action, self.key_action);
        if !mapped.is_empty() {
            self.mapped.push(JsonValue::Array(mapped));
        }
        Descend::Stop
    }
}

fn map_object(
    object: &JsonObject,
    value_action: ValueAction<'_>,
    key_action: KeyAction<'_>,
) -> JsonObject {
    let mut map = ObjectMap::new(value_action, key_action);
    object.accept(&mut map);
    map.finish()
}

fn map_array(
    array: &JsonArray,
    value_action: ValueAction<'_>,
    key_action: KeyAction<'_>,
) -> JsonArray {
    let mut map = ArrayMap::new(value_action, key_action);
    array.accept(&mut map);
    map.finish()
}

// ============================================================================
// Container API
// ============================================================================

impl JsonArray {
    /// Keep the scalars accepted by `value_predicate` and the non-empty
    /// results of filtering nested containers.
    ///
    /// `key_predicate` applies to scalar entries of objects nested in this
    /// array.
    ///
    /// ```
    /// use jsontree::{JsonArray, JsonObject, JsonValue};
    ///
    /// let students = JsonArray::new(vec!["Paulo".into(), "Filipe".into()]);
    /// let array = JsonArray::new(vec![
    ///     "Paulo".into(),
    ///     JsonObject::new([("Alunos", JsonValue::Array(students))]).into(),
    /// ]);
    /// let filtered = array.filter(|v| v.as_str() == Some("Paulo"), |k| k == "Alunos");
    /// assert_eq!(filtered.to_string(), r#"["Paulo", {"Alunos": ["Paulo"]}]"#);
    /// ```
    pub fn filter<V, K>(&self, value_predicate: V, key_predicate: K) -> JsonArray
    where
        V: Fn(&JsonValue) -> bool,
        K: Fn(&str) -> bool,
    {
        let filtered = filter_array(self, &value_predicate, &key_predicate);
        trace!(input = self.len(), output = filtered.len(), "filtered array");
        filtered
    }

    /// [`JsonArray::filter`] accepting every key.
    pub fn filter_values<V>(&self, value_predicate: V) -> JsonArray
    where
        V: Fn(&JsonValue) -> bool,
    {
        self.filter(value_predicate, |_| true)
    }

    /// Replace every scalar with `value_action(scalar)` and every object key
    /// with `key_action(key)`, dropping nested containers that map to empty.
    pub fn map<V, K>(&self, value_action: V, key_action: K) -> JsonArray
    where
        V: Fn(&JsonValue) -> JsonValue,
        K: Fn(&str) -> String,
    {
        let mapped = map_array(self, &value_action, &key_action);
        trace!(input = self.len(), output = mapped.len(), "mapped array");
        mapped
    }

    /// [`JsonArray::map`] keeping keys unchanged.
    pub fn map_values<V>(&self, value_action: V) -> JsonArray
    where
        V: Fn(&JsonValue) -> JsonValue,
    {
        self.map(value_action, str::to_string)
    }
}

impl JsonObject {
    /// Keep scalar entries accepted by both predicates and container entries
    /// whose filtered value is non-empty.
    ///
    /// Container entries keep their key without consulting `key_predicate`.
    pub fn filter<V, K>(&self, value_predicate: V, key_predicate: K) -> JsonObject
    where
        V: Fn(&JsonValue) -> bool,
        K: Fn(&str) -> bool,
    {
        let filtered = filter_object(self, &value_predicate, &key_predicate);
        trace!(input = self.len(), output = filtered.len(), "filtered object");
        filtered
    }

    /// [`JsonObject::filter`] accepting every key.
    pub fn filter_values<V>(&self, value_predicate: V) -> JsonObject
    where
        V: Fn(&JsonValue) -> bool,
    {
        self.filter(value_predicate, |_| true)
    }

    /// Map scalar entries to `(key_action(key), value_action(value))` and
    /// container entries to their mapped value under `key_action(key)`.
    ///
    /// A container entry whose mapped value is empty is dropped:
    ///
    /// ```
    /// use jsontree::{JsonArray, JsonObject, JsonValue};
    ///
    /// let object = JsonObject::new([
    ///     ("a", JsonValue::Array(JsonArray::new(vec!["x".into()]))),
    ///     ("b", JsonValue::Array(JsonArray::default())),
    /// ]);
    /// let mapped = object.map(JsonValue::clone, str::to_string);
    /// assert_eq!(mapped.to_string(), r#"{"a": ["x"]}"#);
    /// ```
    pub fn map<V, K>(&self, value_action: V, key_action: K) -> JsonObject
    where
        V: Fn(&JsonValue) -> JsonValue,
        K: Fn(&str) -> String,
    {
        let mapped = map_object(self, &value_action, &key_action);
        trace!(input = self.len(), output = mapped.len(), "mapped object");
        mapped
    }

    /// [`JsonObject::map`] keeping keys unchanged.
    pub fn map_values<V>(&self, value_action: V) -> JsonObject
    where
        V: Fn(&JsonValue) -> JsonValue,
    {
        self.map(value_action, str::to_string)
    }
}
