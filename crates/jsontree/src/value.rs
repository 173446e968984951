//! The JSON value tree: a closed variant type plus its two container kinds.
//!
//! Arrays and objects wrap a `Vec` directly. Objects keep entries in
//! insertion order as `(key, value)` pairs instead of depending on a map
//! crate, so a mutable object can hold a repeated key for the key-uniqueness
//! check to find. Construction and comparison index keys in a `HashMap`;
//! single-key lookups are linear.
//!
//! Both containers carry a [`ContainerKind`]. An immutable container is fixed
//! at construction; a mutable one accepts edits. The kind never affects
//! equality, rendering or queries.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::slice;

use crate::error::{JsonError, Result};
use crate::number::JsonNumber;

/// A JSON value.
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Boolean(bool),
    Number(JsonNumber),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

/// The variant of a [`JsonValue`], without its payload.
///
/// Two values have the same kind when they are the same variant; two arrays
/// are the same kind regardless of what they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

/// Whether a container accepts edits after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    #[default]
    Immutable,
    Mutable,
}

impl JsonValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Boolean(_) => ValueKind::Boolean,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// True for arrays and objects.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<JsonNumber> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Structural equality that refuses to compare different variants.
    ///
    /// Container kinds are ignored and numbers follow the representation
    /// coercion rule. The check recurses, so `[1]` against `["a"]` is an
    /// error rather than `false`. Arrays of different lengths and objects with
    /// different key sets are simply unequal; object entry order is not
    /// significant.
    pub fn try_eq(&self, other: &JsonValue) -> Result<bool> {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => Ok(true),
            (JsonValue::Boolean(a), JsonValue::Boolean(b)) => Ok(a == b),
            (JsonValue::Number(a), JsonValue::Number(b)) => Ok(a == b),
            (JsonValue::String(a), JsonValue::String(b)) => Ok(a == b),
            (JsonValue::Array(a), JsonValue::Array(b)) => a.try_eq(b),
            (JsonValue::Object(a), JsonValue::Object(b)) => a.try_eq(b),
            (a, b) => Err(JsonError::InvalidComparison {
                left: a.kind().name(),
                right: b.kind().name(),
            }),
        }
    }

    /// Ordering between two numbers, two strings or two booleans.
    ///
    /// Every other pairing, including two containers, is a
    /// [`JsonError::InvalidComparison`]. A NaN operand has no ordering and is
    /// reported the same way.
    pub fn try_cmp(&self, other: &JsonValue) -> Result<Ordering> {
        let ordering = match (self, other) {
            (JsonValue::Number(a), JsonValue::Number(b)) => a.partial_cmp(b),
            (JsonValue::String(a), JsonValue::String(b)) => Some(a.cmp(b)),
            (JsonValue::Boolean(a), JsonValue::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        };
        ordering.ok_or(JsonError::InvalidComparison {
            left: self.kind().name(),
            right: other.kind().name(),
        })
    }
}

/// Structural equality; different variants are unequal.
///
/// Use [`JsonValue::try_eq`] to treat a cross-variant comparison as an error.
impl PartialEq for JsonValue {
    fn eq(&self, other: &JsonValue) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Boolean(b)
    }
}

impl From<i32> for JsonValue {
    fn from(i: i32) -> Self {
        JsonValue::Number(JsonNumber::Int(i))
    }
}

impl From<i64> for JsonValue {
    fn from(l: i64) -> Self {
        JsonValue::Number(JsonNumber::Long(l))
    }
}

impl From<f64> for JsonValue {
    fn from(d: f64) -> Self {
        JsonValue::Number(JsonNumber::Double(d))
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(n: JsonNumber) -> Self {
        JsonValue::Number(n)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(a: JsonArray) -> Self {
        JsonValue::Array(a)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(o: JsonObject) -> Self {
        JsonValue::Object(o)
    }
}

// ============================================================================
// Arrays
// ============================================================================

/// An ordered sequence of values.
#[derive(Debug, Clone, Default)]
pub struct JsonArray {
    items: Vec<JsonValue>,
    kind: ContainerKind,
}

impl JsonArray {
    /// An immutable array holding `items`.
    pub fn new(items: Vec<JsonValue>) -> Self {
        Self::with_kind(items, ContainerKind::Immutable)
    }

    /// A mutable array holding `items`.
    pub fn mutable(items: Vec<JsonValue>) -> Self {
        Self::with_kind(items, ContainerKind::Mutable)
    }

    pub fn with_kind(items: Vec<JsonValue>, kind: ContainerKind) -> Self {
        Self { items, kind }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn is_mutable(&self) -> bool {
        self.kind == ContainerKind::Mutable
    }

    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, JsonValue> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[JsonValue] {
        &self.items
    }

    /// Copy of the elements in `range`, always as an immutable array.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    pub fn slice(&self, range: Range<usize>) -> JsonArray {
        JsonArray::new(self.items[range].to_vec())
    }

    /// The elements of `self` followed by those of `other`, with the kind of `self`.
    pub fn concat(&self, other: &JsonArray) -> JsonArray {
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items);
        JsonArray::with_kind(items, self.kind)
    }

    pub fn push(&mut self, value: JsonValue) -> Result<()> {
        self.ensure_mutable()?;
        self.items.push(value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<JsonValue> {
        self.ensure_mutable()?;
        if index >= self.items.len() {
            return Err(JsonError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_mutable()?;
        self.items.clear();
        Ok(())
    }

    pub fn into_mutable(self) -> JsonArray {
        JsonArray::with_kind(self.items, ContainerKind::Mutable)
    }

    pub fn into_immutable(self) -> JsonArray {
        JsonArray::with_kind(self.items, ContainerKind::Immutable)
    }

    pub fn into_vec(self) -> Vec<JsonValue> {
        self.items
    }

    /// Element-wise [`JsonValue::try_eq`].
    pub fn try_eq(&self, other: &JsonArray) -> Result<bool> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (x, y) in self.iter().zip(other.iter()) {
            if !x.try_eq(y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn ensure_mutable(&self) -> Result<()> {
        match self.kind {
            ContainerKind::Mutable => Ok(()),
            ContainerKind::Immutable => Err(JsonError::ImmutableContainer("array")),
        }
    }
}

impl PartialEq for JsonArray {
    fn eq(&self, other: &JsonArray) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonArray::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// Objects
// ============================================================================

/// String-keyed entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    entries: Vec<(String, JsonValue)>,
    kind: ContainerKind,
}

impl JsonObject {
    /// An immutable object built from `entries`.
    ///
    /// Repeated keys coalesce: the entry keeps the position of the first
    /// occurrence and the value of the last.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        Self::with_kind(entries, ContainerKind::Immutable)
    }

    /// A mutable object built from `entries`, coalescing repeated keys like [`JsonObject::new`].
    pub fn mutable<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        Self::with_kind(entries, ContainerKind::Mutable)
    }

    pub fn with_kind<K, I>(entries: I, kind: ContainerKind) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        let entries = entries.into_iter();
        let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.size_hint().0);
        let mut kept: Vec<(String, JsonValue)> = Vec::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            match index.entry(key.into()) {
                Entry::Occupied(slot) => kept[*slot.get()].1 = value,
                Entry::Vacant(slot) => {
                    kept.push((slot.key().clone(), value));
                    slot.insert(kept.len() - 1);
                }
            }
        }
        JsonObject {
            entries: kept,
            kind,
        }
    }

    /// Entries taken as given, repeated keys included.
    pub(crate) fn from_parts(entries: Vec<(String, JsonValue)>, kind: ContainerKind) -> Self {
        JsonObject { entries, kind }
    }

    /// An immutable object that rejects repeated keys instead of coalescing them.
    pub fn try_from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        let mut seen = HashSet::new();
        let mut object = JsonObject::default();
        for (key, value) in entries {
            let key = key.into();
            if !seen.insert(key.clone()) {
                return Err(JsonError::DuplicateKey(key));
            }
            object.entries.push((key, value));
        }
        Ok(object)
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn is_mutable(&self) -> bool {
        self.kind == ContainerKind::Mutable
    }

    /// The value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Set `key` to `value`, returning the previous value.
    ///
    /// An existing entry is replaced in place; a new key is appended.
    pub fn put(&mut self, key: impl Into<String>, value: JsonValue) -> Result<Option<JsonValue>> {
        self.ensure_mutable()?;
        Ok(self.insert(key.into(), value))
    }

    /// Append an entry without looking for an existing one.
    ///
    /// This is the only way to give an object two entries with the same key;
    /// [`JsonObject::has_unique_keys`](crate::JsonObject::has_unique_keys)
    /// reports such objects as invalid.
    pub fn push(&mut self, key: impl Into<String>, value: JsonValue) -> Result<()> {
        self.ensure_mutable()?;
        self.entries.push((key.into(), value));
        Ok(())
    }

    /// Remove every entry named `key`, returning the value of the first one.
    pub fn remove(&mut self, key: &str) -> Result<Option<JsonValue>> {
        self.ensure_mutable()?;
        let mut removed = None;
        let mut kept = Vec::with_capacity(self.entries.len());
        for (k, v) in self.entries.drain(..) {
            if k == key {
                removed.get_or_insert(v);
            } else {
                kept.push((k, v));
            }
        }
        self.entries = kept;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_mutable()?;
        self.entries.clear();
        Ok(())
    }

    pub fn into_mutable(self) -> JsonObject {
        JsonObject {
            entries: self.entries,
            kind: ContainerKind::Mutable,
        }
    }

    pub fn into_immutable(self) -> JsonObject {
        JsonObject {
            entries: self.entries,
            kind: ContainerKind::Immutable,
        }
    }

    /// Insert with coalescing, ignoring the container kind.
    fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Entry-wise [`JsonValue::try_eq`], independent of the order of distinct
    /// keys.
    ///
    /// Values under a repeated key are matched in the order they appear, so
    /// `{"a": 1, "a": 2}` equals `{"a": 1, "a": 2}` but not `{"a": 2, "a": 1}`
    /// or `{"a": 1, "a": 1}`.
    pub fn try_eq(&self, other: &JsonObject) -> Result<bool> {
        if self.len() != other.len() {
            return Ok(false);
        }
        let mut theirs: HashMap<&str, Vec<&JsonValue>> = HashMap::with_capacity(other.len());
        for (key, value) in other.iter() {
            theirs.entry(key).or_default().push(value);
        }
        let mut taken: HashMap<&str, usize> = HashMap::with_capacity(self.len());
        for (key, x) in self.iter() {
            let nth = taken.entry(key).or_insert(0);
            let Some(y) = theirs.get(key).and_then(|values| values.get(*nth)) else {
                return Ok(false);
            };
            *nth += 1;
            if !x.try_eq(y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn ensure_mutable(&self) -> Result<()> {
        match self.kind {
            ContainerKind::Mutable => Ok(()),
            ContainerKind::Immutable => Err(JsonError::ImmutableContainer("object")),
        }
    }
}

impl PartialEq for JsonObject {
    fn eq(&self, other: &JsonObject) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        JsonObject::new(iter)
    }
}
