//! Benchmarks for fondra-math kernels.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fondra_math::{StandardScaler, ols, sample_covariance, symmetric_eigen};
use fondra_traits::FeatureTransform;
use ndarray::{Array1, Array2};
use rand::Rng;

fn random_array(n: usize) -> Array1<f64> {
    let mut rng = rand::thread_rng();
    Array1::from_iter((0..n).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0))
}

fn random_matrix(rows: usize, cols: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((rows, cols), |_| rng.r#gen::<f64>() * 2.0 - 1.0)
}

fn random_symmetric(n: usize) -> Array2<f64> {
    let m = random_matrix(n, n);
    (&m + &m.t()) / 2.0
}

fn bench_sample_covariance(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_covariance");

    for size in [252, 1260, 5040] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let a = random_array(size);
            let bb = random_array(size);
            b.iter(|| sample_covariance(black_box(&a), black_box(&bb)).unwrap());
        });
    }

    group.finish();
}

fn bench_ols(c: &mut Criterion) {
    let mut group = c.benchmark_group("ols");

    for (rows, cols) in [(252, 2), (1260, 2), (1260, 5)] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(
            BenchmarkId::new("shape", format!("{rows}x{cols}")),
            &(rows, cols),
            |b, &(rows, cols)| {
                let x = random_matrix(rows, cols);
                let y = random_array(rows);
                b.iter(|| ols(black_box(&y), black_box(&x)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_symmetric_eigen(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetric_eigen");

    for size in [2, 5, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let a = random_symmetric(size);
            b.iter(|| symmetric_eigen(black_box(&a)).unwrap());
        });
    }

    group.finish();
}

fn bench_standard_scaler(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_scaler");

    for rows in [252, 1260, 5040] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let x = random_matrix(rows, 5);
            b.iter(|| {
                let mut scaler = StandardScaler::new();
                scaler.fit_transform(black_box(&x)).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sample_covariance,
    bench_ols,
    bench_symmetric_eigen,
    bench_standard_scaler
);
criterion_main!(benches);
