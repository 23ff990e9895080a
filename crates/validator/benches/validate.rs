// Benchmarks for rulebook-validator
// Run with: cargo bench --bench validate

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rulebook_validator::{FieldRules, MessageOverrides, RuleSet, Validator};
use rulebook_value::Value;
use serde_json::json;

// ================================
// Parser Benchmarks
// ================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules/parse");

    group.bench_function("single", |b| b.iter(|| RuleSet::parse(black_box("required"))));

    group.bench_function("pipeline", |b| {
        b.iter(|| RuleSet::parse(black_box("required|string|min:3|max:255|in:a,b,c,d")))
    });

    group.finish();
}

// ================================
// Engine Benchmarks
// ================================

fn signup() -> (Value, FieldRules) {
    let data = Value::from(json!({
        "user": {
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "age": 36,
            "role": "admin",
        },
        "password": "correct horse battery staple",
        "password_confirmation": "correct horse battery staple",
        "homepage": "https://example.com",
    }));
    let rules = FieldRules::new()
        .field("user.email", "required|email|max:254")
        .field("user.name", "required|string|min:2|max:100")
        .field("user.age", "required|numeric|min:18|max:130")
        .field("user.role", "in:admin,editor,viewer")
        .field("password", "required|min:12")
        .field("password_confirmation", "same:password")
        .field("homepage", "nullable|url|safe");
    (data, rules)
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let validator = Validator::new();
    let messages = MessageOverrides::new();

    let (data, rules) = signup();
    group.bench_function("signup_form", |b| {
        b.iter(|| validator.validate(black_box(&data), black_box(&rules), &messages))
    });

    for fields in [10_usize, 100, 1000] {
        let data: Value = (0..fields)
            .map(|i| (format!("field_{i}"), Value::from(format!("value {i}"))))
            .collect();
        let rules: FieldRules = (0..fields)
            .map(|i| (format!("field_{i}"), "required|string|min:3"))
            .collect();

        group.throughput(Throughput::Elements(fields as u64));
        group.bench_with_input(BenchmarkId::new("flat_fields", fields), &fields, |b, _| {
            b.iter(|| validator.validate(black_box(&data), black_box(&rules), &messages))
        });
    }

    group.finish();
}

fn benchmark_custom_rule(c: &mut Criterion) {
    let mut validator = Validator::new();
    validator.extend("even", |_, value, _, _| {
        value.as_f64().is_some_and(|n| n % 2.0 == 0.0)
    });
    let data = Value::from(json!({"n": 42}));
    let rules = FieldRules::new().field("n", "even");
    let messages = MessageOverrides::new();

    c.bench_function("validate/custom_rule", |b| {
        b.iter(|| validator.validate(black_box(&data), black_box(&rules), &messages))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_validate,
    benchmark_custom_rule
);
criterion_main!(benches);
