/// Rendering tests: compact output for every variant and the object-only
/// pretty mode.
use jsontree::{JsonArray, JsonNumber, JsonObject, JsonValue};

fn obj(entries: Vec<(&str, JsonValue)>) -> JsonValue {
    JsonValue::Object(JsonObject::new(entries))
}

fn arr(items: Vec<JsonValue>) -> JsonValue {
    JsonValue::Array(JsonArray::new(items))
}

// ============================================================================
// 1. Compact scalars
// ============================================================================

#[test]
fn render_scalars() {
    assert_eq!(JsonValue::Null.render(false), "null");
    assert_eq!(JsonValue::from(true).render(false), "true");
    assert_eq!(JsonValue::from(false).render(false), "false");
    assert_eq!(JsonValue::from(42).render(false), "42");
    assert_eq!(JsonValue::from(-7i64).render(false), "-7");
    assert_eq!(JsonValue::from("x").render(false), "\"x\"");
}

#[test]
fn render_doubles_keep_fraction() {
    assert_eq!(JsonValue::from(0.2).render(false), "0.2");
    assert_eq!(JsonValue::from(6.0).render(false), "6.0");
    assert_eq!(JsonValue::from(-1.25).render(false), "-1.25");
}

#[test]
fn render_non_finite_doubles_as_null() {
    assert_eq!(JsonValue::from(f64::NAN).render(false), "null");
    assert_eq!(
        JsonValue::Number(JsonNumber::Double(f64::INFINITY)).render(false),
        "null"
    );
}

#[test]
fn render_strings_verbatim() {
    // No escaping: embedded quotes and control characters pass through.
    assert_eq!(JsonValue::from("say \"hi\"").render(false), "\"say \"hi\"\"");
    assert_eq!(JsonValue::from("a\nb").render(false), "\"a\nb\"");
}

// ============================================================================
// 2. Compact containers
// ============================================================================

#[test]
fn render_object_in_insertion_order() {
    let value = obj(vec![("a", 1.into()), ("b", "x".into())]);
    assert_eq!(value.render(false), r#"{"a": 1, "b": "x"}"#);
}

#[test]
fn render_array() {
    assert_eq!(arr(vec![1.into(), 2.into()]).render(false), "[1, 2]");
}

#[test]
fn render_empty_containers() {
    assert_eq!(obj(vec![]).render(false), "{}");
    assert_eq!(arr(vec![]).render(false), "[]");
}

#[test]
fn render_nested_containers() {
    let value = obj(vec![
        ("name", "PA".into()),
        ("tags", arr(vec!["a".into(), JsonValue::Null])),
        ("inner", obj(vec![("ok", true.into())])),
    ]);
    assert_eq!(
        value.render(false),
        r#"{"name": "PA", "tags": ["a", null], "inner": {"ok": true}}"#
    );
}

#[test]
fn display_is_compact() {
    let value = obj(vec![("a", arr(vec![1.into()]))]);
    assert_eq!(value.to_string(), r#"{"a": [1]}"#);
    assert_eq!(format!("{}", JsonValue::from(3)), "3");
}

// ============================================================================
// 3. Pretty mode
// ============================================================================

#[test]
fn pretty_object_puts_entries_on_lines() {
    let value = obj(vec![("a", 1.into()), ("b", "x".into())]);
    assert_eq!(value.render(true), "{\n\t\"a\": 1,\n\t\"b\": \"x\"\n}");
}

#[test]
fn pretty_nested_object_indents_one_level_deeper() {
    let value = obj(vec![
        ("name", "PA".into()),
        ("lecturer", obj(vec![("office", "D6.23".into())])),
    ]);
    let expected = "{\n\t\"name\": \"PA\",\n\t\"lecturer\": {\n\t\t\"office\": \"D6.23\"\n\t}\n}";
    assert_eq!(value.render(true), expected);
}

#[test]
fn pretty_leaves_arrays_compact() {
    let value = obj(vec![(
        "items",
        arr(vec![1.into(), obj(vec![("k", 2.into())])]),
    )]);
    assert_eq!(value.render(true), "{\n\t\"items\": [1, {\"k\": 2}]\n}");
}

#[test]
fn pretty_is_ignored_outside_objects() {
    let array = arr(vec![obj(vec![("k", 1.into())])]);
    assert_eq!(array.render(true), array.render(false));
    assert_eq!(JsonValue::from("x").render(true), "\"x\"");
    assert_eq!(JsonValue::Null.render(true), "null");
}

#[test]
fn pretty_empty_object() {
    assert_eq!(obj(vec![]).render(true), "{}");
}

#[test]
fn container_render_methods_match_value_render() {
    let object = JsonObject::new([("a", JsonValue::from(1))]);
    assert_eq!(object.render(true), JsonValue::Object(object.clone()).render(true));
    let array = JsonArray::new(vec![1.into()]);
    assert_eq!(array.render(), "[1]");
}
