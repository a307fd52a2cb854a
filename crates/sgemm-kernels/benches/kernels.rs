//! Throughput benchmarks for the dispatched kernels against the reference.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sgemm_kernels::{multiply_accumulate, sgemm_reference, KernelVariant};

fn operands(m: usize, k: usize, n: usize) -> (Vec<f32>, Vec<f32>) {
    let a: Vec<f32> = (0..m * k).map(|i| ((i % 1000) as f32) * 0.01).collect();
    let b: Vec<f32> = (0..k * n)
        .map(|i| (((i + 500) % 1000) as f32) * 0.01)
        .collect();
    (a, b)
}

fn bench_dispatched(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatched");

    for variant in [KernelVariant::N16, KernelVariant::N24] {
        for size in [64usize, 256, 512] {
            let (m, k, n) = (size, size, variant.n());
            let (a, b) = operands(m, k, n);
            let mut out = vec![0.0f32; m * n];

            group.throughput(Throughput::Elements((2 * m * k * n) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("n{n}"), size),
                &size,
                |bench, _| {
                    bench.iter(|| {
                        multiply_accumulate(variant, &a, &b, black_box(&mut out), m, k);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference");

    for size in [64usize, 256] {
        let (m, k, n) = (size, size, 24);
        let (a, b) = operands(m, k, n);
        let mut out = vec![0.0f32; m * n];

        group.throughput(Throughput::Elements((2 * m * k * n) as u64));
        group.bench_with_input(BenchmarkId::new("n24", size), &size, |bench, _| {
            bench.iter(|| {
                sgemm_reference(&a, &b, black_box(&mut out), m, n, k);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatched, bench_reference);
criterion_main!(benches);
