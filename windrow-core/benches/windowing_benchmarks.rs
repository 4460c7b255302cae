//! Throughput benchmarks for the windowing policies

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use windrow_core::{FixedWindows, Pair, PairSequence, SlidingWindows, VariableWindows};

/// Generate a pair source of the requested length
fn generate_pairs(len: usize) -> Vec<Pair<usize, f64>> {
    (0..len).map(|i| Pair::new(i, (i % 17) as f64)).collect()
}

fn bench_fixed_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_windows");

    for len in [1_000usize, 10_000, 100_000] {
        let data = generate_pairs(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            let windows = FixedWindows::new(data, 16).unwrap();
            b.iter(|| {
                let emitted: usize = windows.cursor().map(|w| w.value.len()).sum();
                black_box(emitted)
            });
        });
    }

    group.finish();
}

fn bench_sliding_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_windows");

    for period in [4usize, 16, 64] {
        let data = generate_pairs(10_000);
        group.throughput(Throughput::Elements(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(period), &data, |b, data| {
            let windows = SlidingWindows::new(data, period).unwrap();
            b.iter(|| {
                let total: f64 = windows
                    .cursor()
                    .map(|w| w.value.values().sum::<f64>())
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_variable_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("variable_windows");

    for len in [1_000usize, 10_000, 100_000] {
        let data = generate_pairs(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            let windows =
                VariableWindows::new(data, |a: &f64, b: &f64| (*a - *b).abs() < 3.0);
            b.iter(|| {
                let runs: usize = windows.cursor().count();
                black_box(runs)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fixed_windows,
    bench_sliding_windows,
    bench_variable_windows
);
criterion_main!(benches);
