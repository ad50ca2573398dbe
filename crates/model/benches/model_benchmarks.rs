//! Benchmarks for the fondra-model pipeline stages.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fondra_model::{Pca, train_test_split};
use fondra_traits::FeatureTransform;
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

fn random_features(rows: usize, cols: usize) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(1);
    let normal = Normal::new(0.0, 1.0).unwrap();
    Array2::from_shape_fn((rows, cols), |_| normal.sample(&mut rng))
}

fn random_targets(rows: usize) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(2);
    Array1::from_iter((0..rows).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0))
}

fn bench_train_test_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_test_split");

    for rows in [252, 1260, 5040] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let x = random_features(rows, 5);
            let y = random_targets(rows);
            b.iter(|| train_test_split(black_box(&x), black_box(&y), 0.2, 0).unwrap());
        });
    }

    group.finish();
}

fn bench_pca_fit_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("pca_fit_transform");

    for (rows, cols) in [(252, 5), (1260, 5), (1260, 10)] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(
            BenchmarkId::new("shape", format!("{rows}x{cols}")),
            &(rows, cols),
            |b, &(rows, cols)| {
                let x = random_features(rows, cols);
                b.iter(|| {
                    let mut pca = Pca::new(2);
                    pca.fit_transform(black_box(&x)).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_train_test_split, bench_pca_fit_transform);
criterion_main!(benches);
