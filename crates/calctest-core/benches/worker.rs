//! Criterion benchmarks for the worker loop.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use calctest_core::calculator::Calculator;
use calctest_core::calculators::{NativeCalculator, NoisyCalculator, SinglePrecisionCalculator};
use calctest_core::equation::{generate_equations, Equation, OperandSampler};
use calctest_core::worker::WorkerTask;

fn batch(count: usize) -> Arc<[Equation]> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    generate_equations(count, 0.0, 10.0, OperandSampler::Uniform, &mut rng).into()
}

fn bench_workers(c: &mut Criterion) {
    let calculators: Vec<Arc<dyn Calculator>> = vec![
        Arc::new(NativeCalculator::new("native")),
        Arc::new(SinglePrecisionCalculator::new("f32")),
        Arc::new(NoisyCalculator::new("noisy", 0.25, 0)),
    ];

    let counts: Vec<usize> = vec![20, 1_000, 10_000];

    for calc in &calculators {
        let mut group = c.benchmark_group(calc.name().to_string());
        for &count in &counts {
            let equations = batch(count);
            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
                b.iter(|| WorkerTask::new(Arc::clone(calc), Arc::clone(&equations), count).run());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_workers);
criterion_main!(benches);
