//! Benchmark for set operators.
//!
//! Set operators compare elements pairwise so they work with any
//! `PartialEq` type. This measures that cost on integer inputs with a
//! bounded number of distinct values, next to the `*_hashed` forms.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sequery::prelude::*;
use std::hint::black_box;

fn numbers(size: u32, distinct: u32) -> Sequence<u32> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761) % distinct)
        .collect()
}

// =============================================================================
// Distinct Benchmark
// =============================================================================

fn benchmark_distinct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct");

    for size in [100, 1000, 10000] {
        let source = numbers(size, 64);

        group.bench_with_input(BenchmarkId::new("distinct", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.distinct()));
        });

        group.bench_with_input(BenchmarkId::new("distinct_by", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.distinct_by(|value| value % 16)));
        });

        group.bench_with_input(BenchmarkId::new("distinct_hashed", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.distinct_hashed()));
        });
    }

    group.finish();
}

// =============================================================================
// Binary Operators Benchmark
// =============================================================================

fn benchmark_binary_operators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary_operators");

    for size in [100, 1000, 10000] {
        let left = numbers(size, 64);
        let right = numbers(size / 2, 48);

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(&right)));
        });

        group.bench_with_input(BenchmarkId::new("intersect", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersect(&right)));
        });

        group.bench_with_input(BenchmarkId::new("except", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.except(&right)));
        });

        group.bench_with_input(BenchmarkId::new("union_hashed", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union_hashed(&right)));
        });

        group.bench_with_input(BenchmarkId::new("except_hashed", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.except_hashed(&right)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_distinct, benchmark_binary_operators);

criterion_main!(benches);
