//! Criterion micro-benchmarks for hex and binary rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tessel_bench::PAYLOAD_SIZES;
use tessel_core::ByteView;
use tessel_test_utils::fixtures::ramp;
use tessel_text::{
    bin_from_sequence, bin_from_view, hex_from_sequence, hex_from_view, hex_from_view_into,
    hex_len, DEFAULT_MAX_BYTES,
};

/// Benchmark: capped hex rendering into a fresh `String`.
fn bench_hex_from_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_from_view");
    for len in PAYLOAD_SIZES {
        let data = ramp(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| {
                let text = hex_from_view(ByteView::new(black_box(data)), DEFAULT_MAX_BYTES);
                black_box(text);
            });
        });
    }
    group.finish();
}

/// Benchmark: capped hex rendering into a reused stack buffer.
fn bench_hex_from_view_into(c: &mut Criterion) {
    let data = ramp(DEFAULT_MAX_BYTES);
    let mut buf = [0u8; hex_len(DEFAULT_MAX_BYTES, DEFAULT_MAX_BYTES)];
    c.bench_function("hex_from_view_into_500", |b| {
        b.iter(|| {
            let view = ByteView::new(black_box(&data));
            let text = hex_from_view_into(view, &mut buf, DEFAULT_MAX_BYTES);
            black_box(text.map(str::len).unwrap_or(0));
        });
    });
}

/// Benchmark: uncapped hex over an iterator, with and without a reused builder.
fn bench_hex_from_sequence(c: &mut Criterion) {
    let data = ramp(4096);
    let mut group = c.benchmark_group("hex_from_sequence_4096");
    group.bench_function("fresh", |b| {
        b.iter(|| black_box(hex_from_sequence(black_box(&data).iter().copied(), None)));
    });
    let mut builder = String::new();
    group.bench_function("reused_builder", |b| {
        b.iter(|| {
            black_box(hex_from_sequence(
                black_box(&data).iter().copied(),
                Some(&mut builder),
            ))
        });
    });
    group.finish();
}

/// Benchmark: binary rendering from a view and from an iterator.
fn bench_bin(c: &mut Criterion) {
    let data = ramp(1024);
    let mut group = c.benchmark_group("bin_1024");
    group.bench_function("view", |b| {
        b.iter(|| black_box(bin_from_view(ByteView::new(black_box(&data)), None)));
    });
    group.bench_function("sequence", |b| {
        b.iter(|| black_box(bin_from_sequence(black_box(&data).iter().copied(), None)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hex_from_view,
    bench_hex_from_view_into,
    bench_hex_from_sequence,
    bench_bin
);
criterion_main!(benches);
