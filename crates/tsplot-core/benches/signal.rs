//! Benchmarks for the signal pipeline
//!
//! The DFT is O(N²), so these show how trace length drives latency.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsplot_core::signal::{cepstrum, dft, idft, moving_average, LogType};

/// Create a smooth test trace with some ripple
fn create_trace(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64 / n as f64;
            1.0 - 0.5 * x + 0.05 * (40.0 * x).sin()
        })
        .collect()
}

fn bench_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft");

    for n in [64, 201, 512, 1601].iter() {
        let trace = create_trace(*n);
        let id = BenchmarkId::from_parameter(n);

        group.bench_with_input(id, n, |b, _| b.iter(|| black_box(dft(&trace))));
    }

    group.finish();
}

fn bench_idft(c: &mut Criterion) {
    let mut group = c.benchmark_group("idft");

    for n in [64, 201, 512, 1601].iter() {
        let spectrum = dft(&create_trace(*n));
        let id = BenchmarkId::from_parameter(n);

        group.bench_with_input(id, n, |b, _| {
            b.iter(|| black_box(idft(&spectrum.re, &spectrum.im)))
        });
    }

    group.finish();
}

fn bench_cepstrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("cepstrum");

    for n in [64, 201, 512].iter() {
        let trace = create_trace(*n);
        let id = BenchmarkId::from_parameter(n);

        group.bench_with_input(id, n, |b, _| {
            b.iter(|| black_box(cepstrum(&trace, LogType::Ln)))
        });
    }

    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    let trace = create_trace(1601);

    for window in [2, 11, 50].iter() {
        let id = BenchmarkId::from_parameter(window);

        group.bench_with_input(id, window, |b, &w| {
            b.iter(|| black_box(moving_average(&trace, w)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dft,
    bench_idft,
    bench_cepstrum,
    bench_moving_average
);
criterion_main!(benches);
