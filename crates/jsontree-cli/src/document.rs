//! JSON text to tree, keeping every object entry.
//!
//! Parsing into `serde_json::Value` first would collapse repeated keys before
//! `check` could report them, so the tree is built straight from the
//! deserializer's events. Objects are filled with `push` and frozen once
//! complete.

use std::fmt;

use jsontree::{JsonArray, JsonNumber, JsonObject, JsonValue};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// A parsed document.
pub struct Document(pub JsonValue);

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor).map(Document)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(JsonValue::Boolean(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(JsonValue::Number(JsonNumber::Long(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        let number = match i64::try_from(value) {
            Ok(l) => JsonNumber::Long(l),
            Err(_) => JsonNumber::Double(value as f64),
        };
        Ok(JsonValue::Number(number))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(JsonValue::Number(JsonNumber::Double(value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(JsonValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Document(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(JsonArray::new(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = JsonObject::mutable(Vec::<(String, JsonValue)>::new());
        while let Some((key, Document(value))) = map.next_entry::<String, Document>()? {
            object.push(key, value).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(JsonValue::Object(object.into_immutable()))
    }
}
