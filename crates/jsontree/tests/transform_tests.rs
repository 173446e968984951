/// Filter and map tests.
///
/// Besides plain filtering and mapping, these pin the composition rules:
/// empty nested containers are pruned, key predicates only see scalar
/// entries, the result keeps the container kind of the input, and map drops
/// entries whose mapped container is empty.
use jsontree::{ContainerKind, JsonArray, JsonNumber, JsonObject, JsonValue};

fn obj(entries: Vec<(&str, JsonValue)>) -> JsonValue {
    JsonValue::Object(JsonObject::new(entries))
}

fn arr(items: Vec<JsonValue>) -> JsonValue {
    JsonValue::Array(JsonArray::new(items))
}

fn as_object(value: JsonValue) -> JsonObject {
    match value {
        JsonValue::Object(object) => object,
        other => panic!("expected an object, got {other}"),
    }
}

fn as_array(value: JsonValue) -> JsonArray {
    match value {
        JsonValue::Array(array) => array,
        other => panic!("expected an array, got {other}"),
    }
}

/// A course record with a nested lecturer object and an evaluation array.
fn course() -> JsonObject {
    as_object(obj(vec![
        ("grade", 20.into()),
        ("course", "PA".into()),
        ("approved", true.into()),
        ("delivery", JsonValue::Null),
        (
            "lecturer",
            obj(vec![
                ("name", "André".into()),
                ("age", JsonValue::Null),
                ("office", "D6.23".into()),
            ]),
        ),
        (
            "evaluation",
            arr(vec![
                obj(vec![("name", "quizzes".into()), ("weight", 0.2.into())]),
                obj(vec![("name", "project".into()), ("weight", 0.8.into())]),
            ]),
        ),
    ]))
}

fn is_string(value: &JsonValue) -> bool {
    value.as_str().is_some()
}

// ============================================================================
// 1. Filter over arrays
// ============================================================================

#[test]
fn filter_array_keeps_matching_scalars() {
    let array = as_array(arr(vec![1.into(), "a".into(), 2.into(), JsonValue::Null]));
    let filtered = array.filter_values(|v| v.as_number().is_some());
    assert_eq!(filtered, as_array(arr(vec![1.into(), 2.into()])));
}

#[test]
fn filter_nested_object_and_key_predicate() {
    let array = as_array(arr(vec![
        "Paulo".into(),
        obj(vec![("Alunos", arr(vec!["Paulo".into(), "Filipe".into()]))]),
    ]));
    let filtered = array.filter(|v| v.as_str() == Some("Paulo"), |k| k == "Alunos");
    assert_eq!(filtered.to_string(), r#"["Paulo", {"Alunos": ["Paulo"]}]"#);
}

#[test]
fn filter_array_prunes_emptied_nested_containers() {
    let array = as_array(arr(vec![
        "keep".into(),
        arr(vec![1.into(), 2.into()]),
        obj(vec![("n", 3.into())]),
        arr(vec!["also".into()]),
    ]));
    let filtered = array.filter_values(is_string);
    assert_eq!(filtered.to_string(), r#"["keep", ["also"]]"#);
}

#[test]
fn filter_array_everything_rejected_is_empty_not_error() {
    let array = as_array(arr(vec![1.into(), arr(vec![2.into()])]));
    let filtered = array.filter_values(|_| false);
    assert!(filtered.is_empty());
}

#[test]
fn filter_array_keeps_container_kind() {
    let mutable = JsonArray::mutable(vec![1.into(), "a".into()]);
    let filtered = mutable.filter_values(is_string);
    assert_eq!(filtered.kind(), ContainerKind::Mutable);

    let immutable = JsonArray::new(vec![1.into()]);
    assert_eq!(immutable.filter_values(|_| true).kind(), ContainerKind::Immutable);
}

// ============================================================================
// 2. Filter over objects
// ============================================================================

#[test]
fn filter_object_by_value_recurses() {
    let filtered = course().filter_values(is_string);
    assert_eq!(
        filtered.to_string(),
        r#"{"course": "PA", "lecturer": {"name": "André", "office": "D6.23"}, "evaluation": [{"name": "quizzes"}, {"name": "project"}]}"#
    );
}

#[test]
fn filter_object_key_predicate_applies_to_scalar_entries_only() {
    // "lecturer" fails the key predicate but is kept because its filtered
    // value is non-empty; only the scalar entries named "name" survive inside.
    let filtered = course().filter(|_| true, |k| k == "name");
    assert_eq!(
        filtered.to_string(),
        r#"{"lecturer": {"name": "André"}, "evaluation": [{"name": "quizzes"}, {"name": "project"}]}"#
    );
}

#[test]
fn filter_object_drops_container_entries_that_empty_out() {
    let object = as_object(obj(vec![
        ("a", 1.into()),
        ("numbers", arr(vec![1.into(), 2.into()])),
        ("nested", obj(vec![("x", 1.into())])),
    ]));
    let filtered = object.filter_values(is_string);
    assert!(filtered.is_empty());
    assert_eq!(filtered.to_string(), "{}");
}

#[test]
fn filter_always_true_preserves_tree_without_empty_containers() {
    let original = course();
    let filtered = original.filter(|_| true, |_| true);
    assert_eq!(filtered, original);
    assert_eq!(filtered.to_string(), original.to_string());
}

#[test]
fn filter_always_true_prunes_pre_existing_empty_containers() {
    let object = as_object(obj(vec![
        ("a", 1.into()),
        ("empty", arr(vec![])),
        ("nothing", obj(vec![])),
    ]));
    let filtered = object.filter(|_| true, |_| true);
    assert_eq!(filtered.to_string(), r#"{"a": 1}"#);
}

#[test]
fn filter_keeps_repeated_keys() {
    let mut object = JsonObject::mutable([("a", JsonValue::from(1))]);
    object.push("a", JsonValue::from(2)).unwrap();
    object.push("b", "x".into()).unwrap();

    let filtered = object.filter(|_| true, |_| true);
    assert_eq!(filtered, object);
    assert_eq!(filtered.to_string(), r#"{"a": 1, "a": 2, "b": "x"}"#);
    assert!(!filtered.has_unique_keys());

    let numbers = object.filter_values(|v| v.as_number().is_some());
    assert_eq!(numbers.to_string(), r#"{"a": 1, "a": 2}"#);
}

#[test]
fn filter_keeps_repeated_keys_in_nested_objects() {
    let mut inner = JsonObject::mutable([("k", JsonValue::from(1))]);
    inner.push("k", JsonValue::from(2)).unwrap();
    let array = JsonArray::new(vec![JsonValue::Object(inner)]);
    let filtered = array.filter_values(|_| true);
    assert_eq!(filtered.to_string(), r#"[{"k": 1, "k": 2}]"#);
    assert!(!filtered.has_unique_keys());
}

#[test]
fn map_still_coalesces_repeated_keys() {
    let mut object = JsonObject::mutable([("a", JsonValue::from(1))]);
    object.push("a", JsonValue::from(2)).unwrap();
    assert_eq!(object.map_values(JsonValue::clone).to_string(), r#"{"a": 2}"#);
}

#[test]
fn filter_object_keeps_container_kind() {
    let object = JsonObject::mutable([("a", JsonValue::from(1))]);
    let filtered = object.filter_values(|_| true);
    assert!(filtered.is_mutable());
    assert!(!course().filter_values(|_| true).is_mutable());
}

#[test]
fn filter_does_not_touch_input() {
    let original = course();
    let snapshot = original.clone();
    let _ = original.filter_values(|_| false);
    assert_eq!(original, snapshot);
    assert_eq!(original.to_string(), snapshot.to_string());
}

// ============================================================================
// 3. Map
// ============================================================================

fn increment(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Number(n) => JsonValue::Number(*n + JsonNumber::Int(1)),
        other => other.clone(),
    }
}

#[test]
fn map_array_transforms_scalars() {
    let array = as_array(arr(vec![1.into(), 2.into(), 3.into()]));
    let mapped = array.map_values(increment);
    assert_eq!(mapped, as_array(arr(vec![2.into(), 3.into(), 4.into()])));
}

#[test]
fn map_array_recurses_into_nested_containers() {
    let array = as_array(arr(vec![
        1.into(),
        arr(vec![2.into()]),
        obj(vec![("k", 3.into())]),
    ]));
    let mapped = array.map(increment, |k| k.to_uppercase());
    assert_eq!(mapped.to_string(), r#"[2, [3], {"K": 4}]"#);
}

#[test]
fn map_object_maps_keys_and_values() {
    let object = as_object(obj(vec![
        ("a", 1.into()),
        ("b", obj(vec![("c", 2.into())])),
    ]));
    let mapped = object.map(increment, |k| format!("{k}_"));
    assert_eq!(mapped.to_string(), r#"{"a_": 2, "b_": {"c_": 3}}"#);
}

#[test]
fn map_identity_drops_entries_with_empty_containers() {
    // Map is not shape-preserving: "b" maps to an empty array and disappears.
    let object = as_object(obj(vec![
        ("a", arr(vec!["x".into()])),
        ("b", arr(vec![])),
    ]));
    let mapped = object.map(JsonValue::clone, str::to_string);
    assert_eq!(mapped.to_string(), r#"{"a": ["x"]}"#);
    assert!(!mapped.contains_key("b"));
}

#[test]
fn map_identity_drops_empty_elements_from_arrays() {
    let array = as_array(arr(vec![1.into(), arr(vec![]), obj(vec![])]));
    assert_eq!(array.map_values(JsonValue::clone).to_string(), "[1]");
}

#[test]
fn map_key_collisions_keep_last_value() {
    let object = as_object(obj(vec![("a", 1.into()), ("b", 2.into())]));
    let mapped = object.map(JsonValue::clone, |_| "k".to_string());
    assert_eq!(mapped.to_string(), r#"{"k": 2}"#);
}

#[test]
fn map_can_replace_scalars_with_containers() {
    let array = as_array(arr(vec![1.into()]));
    let mapped = array.map_values(|v| arr(vec![v.clone(), v.clone()]));
    assert_eq!(mapped.to_string(), "[[1, 1]]");
}

#[test]
fn map_keeps_container_kind() {
    let array = JsonArray::mutable(vec![1.into()]);
    assert!(array.map_values(increment).is_mutable());
    let object = JsonObject::mutable([("a", JsonValue::from(1))]);
    assert!(object.map_values(increment).is_mutable());
}

#[test]
fn map_does_not_touch_input() {
    let original = course();
    let snapshot = original.clone();
    let _ = original.map(|_| JsonValue::Null, |k| k.to_uppercase());
    assert_eq!(original.to_string(), snapshot.to_string());
}
