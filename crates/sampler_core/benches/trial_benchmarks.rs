//! Trial throughput benchmarks.
//!
//! Run with `cargo bench -p sampler_core`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sampler_core::run_trial;

fn bench_run_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_trial");

    for n in [10_i64, 1_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| run_trial(black_box(n), black_box(345)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_trial);
criterion_main!(benches);
