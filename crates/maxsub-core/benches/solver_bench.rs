//! # Solver Benchmarks
//!
//! Performance benchmarks for maxsub-core.
//!
//! Run with: `cargo bench -p maxsub-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use maxsub_core::{PrefixSums, Segmenter, largest_gap, max_subarray_sum};
use std::hint::black_box;

/// Alternating `[1, -1, ...]`: every pair merges, the worst case for the loop.
fn create_cascading(size: usize) -> Vec<i64> {
    (0..size).map(|i| if i % 2 == 0 { 1 } else { -1 }).collect()
}

/// `x, -x` pairs with `x` decreasing, then a large tail: merges cascade
/// leftward from the right end, one new pair at a time.
fn create_right_cascade(size: usize) -> Vec<i64> {
    let pairs = (size.saturating_sub(1) / 2) as i64;
    let mut values: Vec<i64> = (1..=pairs).rev().flat_map(|x| [x, -x]).collect();
    values.push(1_000_000_000);
    values
}

/// Runs separated by gaps too deep to absorb: a single scan, no merges.
fn create_blocked(size: usize) -> Vec<i64> {
    (0..size)
        .map(|i| if i % 2 == 0 { 3 } else { -100 })
        .collect()
}

/// Deterministic pseudo-random mix of signs.
fn create_mixed(size: usize) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 201) as i64 - 100
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for size in [100, 1000, 10000].iter() {
        let values = create_mixed(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let prefix = PrefixSums::new(values);
                black_box(Segmenter::segment(values, &prefix))
            });
        });
    }

    group.finish();
}

fn bench_solve_cascading(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_cascading");

    for size in [100, 1000, 4000].iter() {
        let values = create_cascading(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(max_subarray_sum(values)));
        });
    }

    group.finish();
}

fn bench_solve_right_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_right_cascade");

    for size in [1000, 10000, 100000].iter() {
        let values = create_right_cascade(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(max_subarray_sum(values)));
        });
    }

    group.finish();
}

fn bench_solve_blocked(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_blocked");

    for size in [100, 1000, 10000].iter() {
        let values = create_blocked(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(max_subarray_sum(values)));
        });
    }

    group.finish();
}

fn bench_solve_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_mixed");

    for size in [100, 1000, 10000].iter() {
        let values = create_mixed(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(max_subarray_sum(values)));
        });
    }

    group.finish();
}

fn bench_largest_gap(c: &mut Criterion) {
    let values = create_mixed(10000);
    c.bench_function("largest_gap_10000", |b| {
        b.iter(|| black_box(largest_gap(&values)));
    });
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_solve_cascading,
    bench_solve_right_cascade,
    bench_solve_blocked,
    bench_solve_mixed,
    bench_largest_gap,
);
criterion_main!(benches);
