use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsontree::{JsonArray, JsonNumber, JsonObject, JsonValue};
use std::hint::black_box;

/// An object with `records` course-like records, each with a nested lecturer
/// object and an evaluation array.
fn catalogue(records: usize) -> JsonObject {
    let items = (0..records)
        .map(|i| {
            JsonValue::Object(JsonObject::new([
                ("name", JsonValue::from(format!("course-{i}"))),
                ("credits", JsonValue::from(6)),
                ("approved", JsonValue::from(i % 2 == 0)),
                ("delivery", JsonValue::Null),
                (
                    "lecturer",
                    JsonValue::Object(JsonObject::new([
                        ("name", JsonValue::from("André")),
                        ("office", JsonValue::from("D6.23")),
                    ])),
                ),
                (
                    "evaluation",
                    JsonValue::Array(JsonArray::new(vec![
                        JsonValue::from(0.2),
                        JsonValue::from(0.8),
                        JsonValue::from(i as i64),
                    ])),
                ),
            ]))
        })
        .collect();
    JsonObject::new([("courses", JsonValue::Array(JsonArray::new(items)))])
}

fn increment(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Number(n) => JsonValue::Number(*n + JsonNumber::Int(1)),
        other => other.clone(),
    }
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for records in [10, 100, 1000] {
        let tree = catalogue(records);

        group.bench_with_input(BenchmarkId::new("filter", records), &tree, |b, tree| {
            b.iter(|| black_box(tree).filter_values(|v| v.as_str().is_some()))
        });
        group.bench_with_input(BenchmarkId::new("map", records), &tree, |b, tree| {
            b.iter(|| black_box(tree).map(increment, str::to_uppercase))
        });
        group.bench_with_input(BenchmarkId::new("unique_keys", records), &tree, |b, tree| {
            b.iter(|| black_box(tree).has_unique_keys())
        });
        group.bench_with_input(BenchmarkId::new("render", records), &tree, |b, tree| {
            b.iter(|| black_box(tree).render(true))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
