//! Container algebra benchmarks.
//!
//! Measures the traversal core (map/filter), flatten recursion, and the
//! aggregate core over sequences of increasing size. Input sequences are
//! pre-generated once per size and reused across iterations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use argentum::prelude::*;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn generate_sequence(size: usize) -> Sequence<i64> {
    (0..size as i64).collect()
}

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_map");

    for size in SIZES {
        let sequence = generate_sequence(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(sequence.map(|element, _| element * 2)));
        });
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_filter");

    for size in SIZES {
        let sequence = generate_sequence(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(sequence.filter(|element, _| element % 2 == 0)));
        });
    }

    group.finish();
}

fn benchmark_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_sum");

    for size in SIZES {
        let sequence = generate_sequence(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(sequence.sum()));
        });
    }

    group.finish();
}

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_flatten");

    for size in SIZES {
        // `size` elements spread over chunks of 10, nested one level deep.
        let nested = Sequence::from(
            (0..size as i64)
                .collect::<Vec<_>>()
                .chunks(10)
                .map(|chunk| {
                    Nested::from(Sequence::from(
                        chunk.iter().copied().map(Nested::Scalar).collect::<Vec<_>>(),
                    ))
                })
                .collect::<Vec<_>>(),
        );
        group.bench_with_input(BenchmarkId::from_parameter(size), &nested, |bencher, nested| {
            bencher.iter(|| black_box(nested.flatten()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_filter,
    benchmark_sum,
    benchmark_flatten
);
criterion_main!(benches);
