//! Validator performance benchmarks.
//!
//! Measures full-document validation on generated sparse and dense tables.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use biom_validator::{BiomValidator, Document, FORMAT, FORMAT_URL, valid_biom};

/// Table sizes (rows, columns) to benchmark.
const SIZES: &[(usize, usize)] = &[(10, 10), (100, 50), (500, 200)];

fn entries(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"id": format!("{prefix}{i}"), "metadata": {"index": i}}))
        .collect()
}

fn table(rows: usize, cols: usize, matrix_type: &str, data: Value) -> Document {
    Document::from_value(json!({
        "id": null,
        "format": FORMAT,
        "format_url": FORMAT_URL,
        "type": "OTU table",
        "generated_by": "criterion",
        "date": "2011-12-19T19:00:00",
        "rows": entries("OTU_", rows),
        "columns": entries("Sample", cols),
        "matrix_type": matrix_type,
        "matrix_element_type": "int",
        "shape": [rows, cols],
        "data": data,
    }))
    .expect("generated table is an object")
}

/// Sparse table with roughly one in three cells populated.
fn sparse_table(rows: usize, cols: usize) -> Document {
    let data: Vec<Value> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|(r, c)| (r + c) % 3 == 0)
        .map(|(r, c)| json!([r, c, r * c + 1]))
        .collect();
    table(rows, cols, "sparse", Value::from(data))
}

fn dense_table(rows: usize, cols: usize) -> Document {
    let data: Vec<Value> = (0..rows)
        .map(|r| Value::from((0..cols).map(|c| (r * c) as i64).collect::<Vec<_>>()))
        .collect();
    table(rows, cols, "dense", Value::from(data))
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_biom_sparse");
    for &(rows, cols) in SIZES {
        let doc = sparse_table(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &doc,
            |b, doc| b.iter(|| valid_biom(black_box(doc))),
        );
    }
    group.finish();
}

fn bench_sparse_strict(c: &mut Criterion) {
    let validator = BiomValidator::new().strict(true);
    let mut group = c.benchmark_group("valid_biom_sparse_strict");
    for &(rows, cols) in SIZES {
        let doc = sparse_table(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &doc,
            |b, doc| b.iter(|| validator.validate(black_box(doc))),
        );
    }
    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_biom_dense");
    for &(rows, cols) in SIZES {
        let doc = dense_table(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &doc,
            |b, doc| b.iter(|| valid_biom(black_box(doc))),
        );
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let validator = BiomValidator::new();
    let doc = sparse_table(100, 50);
    c.bench_function("report_sparse_100x50", |b| {
        b.iter(|| validator.report(black_box(&doc)))
    });
}

criterion_group!(benches, bench_sparse, bench_sparse_strict, bench_dense, bench_report);
criterion_main!(benches);
