//! Rate estimator benchmarks.
//!
//! Run with: `cargo bench --package startrit-bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use startrit_bench::{sample_forms, sample_inputs};
use startrit_lib::prelude::*;
use std::hint::black_box;

fn calculate_benchmark(c: &mut Criterion) {
    let estimator = RateEstimator::global();
    let mut group = c.benchmark_group("calculate_rate");

    for (name, input) in sample_inputs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| estimator.calculate_rate(black_box(input)));
        });
    }

    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    let estimator = RateEstimator::global();
    let mut group = c.benchmark_group("normalize_and_calculate");

    for (name, form) in sample_forms() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &form, |b, form| {
            b.iter(|| estimator.calculate_rate(&black_box(form).normalize()));
        });
    }

    group.finish();
}

criterion_group!(benches, calculate_benchmark, normalize_benchmark);
criterion_main!(benches);
