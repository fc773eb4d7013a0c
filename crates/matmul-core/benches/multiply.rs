//! Criterion benchmarks for the matrix multiplication algorithms.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matmul_core::bigint::BigInt;
use matmul_core::matrix::Matrix;
use matmul_core::multiplier::{MatrixMultiplier, Multiplier};
use matmul_core::naive::NaiveMultiplier;
use matmul_core::strassen::StrassenMultiplier;
use matmul_core::winograd::WinogradMultiplier;
use matmul_core::DEFAULT_MAX_VALUE;

fn operands(dim: usize) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(dim as u64);
    let a = Matrix::random_filled(dim, dim, DEFAULT_MAX_VALUE, &mut rng).unwrap();
    let b = Matrix::random_filled(dim, dim, DEFAULT_MAX_VALUE, &mut rng).unwrap();
    (a, b)
}

fn bench_algorithms(c: &mut Criterion) {
    let multipliers: Vec<(&str, Arc<dyn Multiplier<BigInt>>)> = vec![
        (
            "Naive",
            Arc::new(MatrixMultiplier::<BigInt>::new(Arc::new(NaiveMultiplier::new()))),
        ),
        (
            "Strassen",
            Arc::new(MatrixMultiplier::<BigInt>::new(Arc::new(StrassenMultiplier::new()))),
        ),
        (
            "StrassenCutoff16",
            Arc::new(MatrixMultiplier::<BigInt>::new(Arc::new(
                StrassenMultiplier::with_cutoff(16),
            ))),
        ),
        (
            "Winograd",
            Arc::new(MatrixMultiplier::<BigInt>::new(Arc::new(WinogradMultiplier::new()))),
        ),
    ];

    let dims: Vec<usize> = vec![4, 10, 16, 32];

    for (name, multiplier) in &multipliers {
        let mut group = c.benchmark_group(*name);
        for &dim in &dims {
            let (a, b) = operands(dim);
            group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |bench, _| {
                bench.iter(|| multiplier.multiply(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
