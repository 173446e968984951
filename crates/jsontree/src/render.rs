//! Tree to text.
//!
//! Compact mode writes every value on one line with `", "` between elements
//! and `": "` after keys. Strings are wrapped in double quotes verbatim:
//! embedded quotes, backslashes and control characters are not escaped, so
//! the output is only valid JSON for strings that need no escaping.
//!
//! Pretty mode only exists for objects. Each entry goes on its own line,
//! indented with one tab per nesting level, and nested object values are
//! pretty-printed one level deeper. Arrays and scalars ignore the flag and
//! render compact, including arrays nested inside a pretty object.
//!
//! # Example
//!
//! ```
//! use jsontree::{JsonObject, JsonValue};
//!
//! let object = JsonValue::Object(JsonObject::new([
//!     ("a", JsonValue::from(1)),
//!     ("b", JsonValue::from("x")),
//! ]));
//! assert_eq!(object.render(false), r#"{"a": 1, "b": "x"}"#);
//! assert_eq!(object.render(true), "{\n\t\"a\": 1,\n\t\"b\": \"x\"\n}");
//! ```

use std::fmt;

use crate::value::{JsonArray, JsonObject, JsonValue};

impl JsonValue {
    /// Render as text. `pretty` only changes the output of objects.
    pub fn render(&self, pretty: bool) -> String {
        let mut out = String::new();
        match self {
            JsonValue::Object(object) if pretty => write_pretty_object(object, 0, &mut out),
            value => write_compact(value, &mut out),
        }
        out
    }
}

impl JsonArray {
    /// Compact text; arrays have no pretty form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_compact_array(self, &mut out);
        out
    }
}

impl JsonObject {
    pub fn render(&self, pretty: bool) -> String {
        let mut out = String::new();
        if pretty {
            write_pretty_object(self, 0, &mut out);
        } else {
            write_compact_object(self, &mut out);
        }
        out
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

fn write_compact(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        JsonValue::Number(n) => out.push_str(&n.to_string()),
        JsonValue::String(s) => write_quoted(s, out),
        JsonValue::Array(array) => write_compact_array(array, out),
        JsonValue::Object(object) => write_compact_object(object, out),
    }
}

fn write_compact_array(array: &JsonArray, out: &mut String) {
    out.push('[');
    for (i, element) in array.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_compact(element, out);
    }
    out.push(']');
}

fn write_compact_object(object: &JsonObject, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_quoted(key, out);
        out.push_str(": ");
        write_compact(value, out);
    }
    out.push('}');
}

/// `depth` is the nesting level of the object's own braces.
fn write_pretty_object(object: &JsonObject, depth: usize, out: &mut String) {
    if object.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        push_indent(depth + 1, out);
        write_quoted(key, out);
        out.push_str(": ");
        match value {
            JsonValue::Object(nested) => write_pretty_object(nested, depth + 1, out),
            other => write_compact(other, out),
        }
    }
    out.push('\n');
    push_indent(depth, out);
    out.push('}');
}

// Verbatim: no escaping.
fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(s);
    out.push('"');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('\t');
    }
}
