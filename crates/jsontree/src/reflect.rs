//! Native value to tree conversion through `serde`.
//!
//! Any `T: Serialize` converts with [`to_tree`]. A derived `Serialize` impl is
//! the explicit field list of a record: struct fields become object keys in
//! declaration order. The conversion is one-way; there is no tree to native
//! path.
//!
//! | Native shape | Tree |
//! |---|---|
//! | `None`, `()` | `Null` |
//! | `bool` | `Boolean` |
//! | `i8`, `i16`, `i32`, `u8`, `u16` | `Number(Int)` |
//! | `i64`, `u32`, `u64` that fits `i64` | `Number(Long)` |
//! | larger `u64` | `Number(Double)` |
//! | `f32`, `f64` | `Number(Double)` |
//! | `char`, `str`, `String` | `String` |
//! | unit enum variant | `String` of the variant name |
//! | sequences, tuples, byte slices | `Array` |
//! | maps with string keys | `Object` |
//! | structs | `Object`, fields in declaration order |
//! | newtype structs | the wrapped value |
//!
//! Maps whose keys do not serialize to a string fail with
//! [`JsonError::InvalidKeyType`]. Shapes without a usable field list (unit
//! structs, tuple structs, data-carrying enum variants) and 128-bit integers
//! fail with [`JsonError::NotConvertible`].
//!
//! # Example
//!
//! ```
//! use jsontree::to_tree;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Course {
//!     name: String,
//!     credits: i32,
//! }
//!
//! let tree = to_tree(&Course { name: "PA".into(), credits: 6 }).unwrap();
//! assert_eq!(tree.render(false), r#"{"name": "PA", "credits": 6}"#);
//! ```

use serde::ser::{self, Impossible, Serialize};

use crate::error::{JsonError, Result};
use crate::number::JsonNumber;
use crate::value::{JsonArray, JsonObject, JsonValue};

/// Convert a native value into a tree.
pub fn to_tree<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue> {
    value.serialize(TreeSerializer)
}

/// Method form of [`to_tree`] for every `Serialize` type.
pub trait ToTree {
    fn to_tree(&self) -> Result<JsonValue>;
}

impl<T: Serialize + ?Sized> ToTree for T {
    fn to_tree(&self) -> Result<JsonValue> {
        to_tree(self)
    }
}

/// The `serde` serializer behind [`to_tree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSerializer;

fn not_convertible(what: &str, name: &str) -> JsonError {
    JsonError::NotConvertible(format!("{what} `{name}` has no named fields"))
}

impl ser::Serializer for TreeSerializer {
    type Ok = JsonValue;
    type Error = JsonError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = Impossible<JsonValue, JsonError>;
    type SerializeTupleVariant = Impossible<JsonValue, JsonError>;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = Impossible<JsonValue, JsonError>;

    fn serialize_bool(self, v: bool) -> Result<JsonValue> {
        Ok(JsonValue::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Int(i32::from(v))))
    }

    fn serialize_i16(self, v: i16) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Int(i32::from(v))))
    }

    fn serialize_i32(self, v: i32) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Int(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Long(v)))
    }

    fn serialize_i128(self, _v: i128) -> Result<JsonValue> {
        Err(JsonError::NotConvertible("128-bit integers are not supported".into()))
    }

    fn serialize_u8(self, v: u8) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Int(i32::from(v))))
    }

    fn serialize_u16(self, v: u16) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Int(i32::from(v))))
    }

    fn serialize_u32(self, v: u32) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Long(i64::from(v))))
    }

    fn serialize_u64(self, v: u64) -> Result<JsonValue> {
        let number = match i64::try_from(v) {
            Ok(l) => JsonNumber::Long(l),
            Err(_) => JsonNumber::Double(v as f64),
        };
        Ok(JsonValue::Number(number))
    }

    fn serialize_u128(self, _v: u128) -> Result<JsonValue> {
        Err(JsonError::NotConvertible("128-bit integers are not supported".into()))
    }

    fn serialize_f32(self, v: f32) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Double(f64::from(v))))
    }

    fn serialize_f64(self, v: f64) -> Result<JsonValue> {
        Ok(JsonValue::Number(JsonNumber::Double(v)))
    }

    fn serialize_char(self, v: char) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsonValue> {
        let items = v
            .iter()
            .map(|b| JsonValue::Number(JsonNumber::Int(i32::from(*b))))
            .collect();
        Ok(JsonValue::Array(JsonArray::new(items)))
    }

    fn serialize_none(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<JsonValue> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<JsonValue> {
        Err(not_convertible("unit struct", name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsonValue> {
        Ok(JsonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<JsonValue> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<JsonValue> {
        Err(not_convertible("enum variant", &format!("{name}::{variant}")))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_convertible("tuple struct", name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_convertible("enum variant", &format!("{name}::{variant}")))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapBuilder> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_convertible("enum variant", &format!("{name}::{variant}")))
    }
}

/// Collects sequence and tuple elements.
#[derive(Debug)]
pub struct SeqBuilder {
    items: Vec<JsonValue>,
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = JsonValue;
    type Error = JsonError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(to_tree(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(JsonArray::new(self.items)))
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = JsonValue;
    type Error = JsonError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<JsonValue> {
        ser::SerializeSeq::end(self)
    }
}

/// Collects map entries and struct fields, in the order they are serialized.
#[derive(Debug)]
pub struct MapBuilder {
    entries: Vec<(String, JsonValue)>,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = JsonValue;
    type Error = JsonError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        match to_tree(key)? {
            JsonValue::String(key) => {
                self.pending_key = Some(key);
                Ok(())
            }
            other => Err(JsonError::InvalidKeyType(other.kind().name().to_string())),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| JsonError::Serialize("map value serialized before its key".into()))?;
        self.entries.push((key, to_tree(value)?));
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(JsonObject::new(self.entries)))
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = JsonValue;
    type Error = JsonError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.entries.push((key.to_string(), to_tree(value)?));
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(JsonObject::new(self.entries)))
    }
}

// ============================================================================
// Trees as `Serialize` sources
// ============================================================================

impl Serialize for JsonNumber {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            JsonNumber::Int(i) => serializer.serialize_i32(i),
            JsonNumber::Long(l) => serializer.serialize_i64(l),
            JsonNumber::Double(d) => serializer.serialize_f64(d),
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Boolean(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => n.serialize(serializer),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(array) => array.serialize(serializer),
            JsonValue::Object(object) => object.serialize(serializer),
        }
    }
}

impl Serialize for JsonArray {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for JsonObject {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
