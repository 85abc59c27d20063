// benches/vector_ops.rs
//! Benchmark: vec_engine vectors vs nalgebra for the same operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::{DVector, Vector3};
use vec_engine::nd::types::Scalar;
use vec_engine::{Vec3, VecN};

const BATCH_SIZE: usize = 1_000;
const DIMS: usize = 16;

fn sample(dims: usize, offset: Scalar) -> Vec<Scalar> {
    (0..dims).map(|i| i as Scalar + offset).collect()
}

/// Dot product on 16-dimensional vectors.
fn bench_dot(c: &mut Criterion) {
    let a = VecN::new(sample(DIMS, 1.0));
    let b = VecN::new(sample(DIMS, 2.0));
    let na = DVector::from_vec(sample(DIMS, 1.0));
    let nb = DVector::from_vec(sample(DIMS, 2.0));

    let mut group = c.benchmark_group("dot_16d");
    group.bench_function("vecn_dot_1000_batch", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0;
            for _ in 0..BATCH_SIZE {
                acc += black_box(&a).dot(black_box(&b)).unwrap_or_default();
            }
            black_box(acc)
        })
    });
    group.bench_function("nalgebra_dvector_dot_1000_batch", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0;
            for _ in 0..BATCH_SIZE {
                acc += black_box(&na).dot(black_box(&nb));
            }
            black_box(acc)
        })
    });
    group.finish();
}

/// Summing several addends at once.
fn bench_add_all(c: &mut Criterion) {
    let a = VecN::new(sample(DIMS, 1.0));
    let addends: Vec<VecN> = (0..4).map(|k| VecN::new(sample(DIMS, k as Scalar))).collect();

    c.bench_function("vecn_add_all_4x16d", |bencher| {
        bencher.iter(|| black_box(&a).add_all(black_box(&addends)))
    });
}

/// Ratio-based collinearity on a long collinear pair (worst case: full scan).
fn bench_collinear(c: &mut Criterion) {
    let a = VecN::new(sample(DIMS, 1.0));
    let b = a.scale(-3.0);

    c.bench_function("vecn_anticollinear_16d", |bencher| {
        bencher.iter(|| black_box(&a).anticollinear(black_box(&b)))
    });
}

/// 3D cross product and scalar triple product.
fn bench_cross(c: &mut Criterion) {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    let w = Vec3::new(7.0, 8.0, 10.0);
    let na = Vector3::new(1.0, 2.0, 3.0);
    let nb = Vector3::new(4.0, 5.0, 6.0);

    let mut group = c.benchmark_group("cross_3d");
    group.bench_function("vec3_cross_prod", |bencher| {
        bencher.iter(|| black_box(&a).cross_prod(black_box(&b)))
    });
    group.bench_function("vec3_mixed_prod", |bencher| {
        bencher.iter(|| black_box(&w).mixed_prod(black_box(&a), black_box(&b)))
    });
    group.bench_function("nalgebra_vector3_cross", |bencher| {
        bencher.iter(|| black_box(&na).cross(black_box(&nb)))
    });
    group.finish();
}

criterion_group!(benches, bench_dot, bench_add_all, bench_collinear, bench_cross);
criterion_main!(benches);
