//! Criterion benchmarks for rust_log_formatter

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_log_formatter::prelude::*;

fn entry_with_fields(count: usize) -> Entry {
    let mut entry = Entry::new(Level::Info, "Request processed")
        .with_field("level", 1)
        .with_field("msg", "user supplied");
    for i in 0..count {
        entry = entry.with_field(format!("field_{}", i), i);
    }
    entry
}

// ============================================================================
// Clash Resolution Benchmarks
// ============================================================================

fn bench_clash_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("clash_resolution");
    group.throughput(Throughput::Elements(1));

    for count in [0, 8, 64] {
        let fields = entry_with_fields(count).fields;
        group.bench_with_input(BenchmarkId::from_parameter(count), &fields, |b, fields| {
            b.iter(|| {
                let mut fields = fields.clone();
                prefix_field_clashes(black_box(&mut fields));
                black_box(fields)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(1));

    let entry = entry_with_fields(8);
    let text = TextFormatter::new();
    let text_sorted = TextFormatter::new().with_sort_keys(true);
    let json = JsonFormatter::new();

    group.bench_function("text", |b| {
        b.iter(|| black_box(text.format(black_box(&entry))));
    });

    group.bench_function("text_sorted", |b| {
        b.iter(|| black_box(text_sorted.format(black_box(&entry))));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(json.format(black_box(&entry))));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_clash_resolution, bench_formatters);

criterion_main!(benches);
