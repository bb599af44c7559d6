//! Benchmarks for zeus-rs math kernels.
//!
//! Run with: `cargo bench -p zeus-bench`
//! Force a path with `ZEUS_BACKEND=scalar` or `ZEUS_BACKEND=simd`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zeus_bench::{sample_boxes, sample_matrices, sample_quats};
use zeus_math::{
    fast_cos, fast_inv_sqrt_with, fast_sin, Backend, Frustum, Mat3, Mat4, Quat, Vec3,
};

/// Benchmark both transpose paths.
fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    let mats = sample_matrices(1024);
    let mats3: Vec<Mat3> = sample_quats(1024).into_iter().map(Mat3::from_quat).collect();
    group.throughput(Throughput::Elements(mats.len() as u64));

    for backend in [Backend::Scalar, Backend::Simd] {
        group.bench_with_input(BenchmarkId::new("mat4", backend), &mats, |b, m| {
            b.iter(|| {
                m.iter()
                    .map(|m| black_box(m).transposed_with(backend))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("mat3", backend), &mats3, |b, m| {
            b.iter(|| {
                m.iter()
                    .map(|m| black_box(m).transposed_with(backend))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark fast-math kernels against std.
fn bench_fast_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_math");
    let values: Vec<f64> = (1..=10000).map(|i| i as f64 * 0.01).collect();
    let angles: Vec<f32> = (0..10000).map(|i| i as f32 * 0.001 - 5.0).collect();
    group.throughput(Throughput::Elements(10000));

    for backend in [Backend::Scalar, Backend::Simd] {
        group.bench_with_input(BenchmarkId::new("inv_sqrt", backend), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| fast_inv_sqrt_with(black_box(x), backend))
                    .sum::<f64>()
            })
        });
    }

    group.bench_function("std_inv_sqrt", |b| {
        b.iter(|| values.iter().map(|&x| 1.0 / black_box(x).sqrt()).sum::<f64>())
    });

    group.bench_function("fast_sin_cos", |b| {
        b.iter(|| {
            angles
                .iter()
                .map(|&x| fast_sin(black_box(x)) + fast_cos(black_box(x)))
                .sum::<f32>()
        })
    });

    group.bench_function("std_sin_cos", |b| {
        b.iter(|| {
            angles
                .iter()
                .map(|&x| black_box(x).sin() + black_box(x).cos())
                .sum::<f32>()
        })
    });

    group.finish();
}

/// Benchmark quaternion composition and interpolation.
fn bench_quat(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat");
    let quats = sample_quats(1024);
    group.throughput(Throughput::Elements(quats.len() as u64));

    group.bench_function("mul", |b| {
        b.iter(|| quats.iter().fold(Quat::IDENTITY, |acc, &q| (acc * black_box(q)).normalized()))
    });

    group.bench_function("rotate", |b| {
        let v = Vec3::new(1.0, 2.0, 3.0);
        b.iter(|| {
            quats
                .iter()
                .map(|&q| Quat::rotate(black_box(q), v))
                .collect::<Vec<_>>()
        })
    });

    for (name, f) in [
        ("lerp", Quat::lerp as fn(Quat, Quat, f32) -> Quat),
        ("nlerp", Quat::nlerp),
        ("slerp", Quat::slerp),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                quats
                    .windows(2)
                    .map(|w| f(w[0], w[1], black_box(0.37)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark frustum culling of box batches.
fn bench_frustum(c: &mut Criterion) {
    let mut group = c.benchmark_group("frustum");

    let view = Mat4::look_at(Vec3::new(0.0, 5.0, 40.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(1.0, 16.0 / 9.0, 0.1, 200.0);
    let mut frustum = Frustum::new();
    frustum.update_planes(&view, &proj);

    for size in [1000, 10000, 100000] {
        let boxes = sample_boxes(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &boxes, |b, boxes| {
            b.iter(|| boxes.iter().filter(|bx| frustum.aabb_frustum_test(bx)).count())
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &boxes, |b, boxes| {
            b.iter(|| frustum.cull_aabbs(black_box(boxes)).len())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transpose,
    bench_fast_math,
    bench_quat,
    bench_frustum,
);

criterion_main!(benches);
