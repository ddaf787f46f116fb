//! Benchmarks for CCT conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;

use cct_optim::{Method, OptimisationSettings};
use cct_spectral::BlackbodyIntegrator;
use cct_temperature::planck1900::{cct_to_uv_scalar, uv_to_cct_scalar};
use cct_temperature::{cct_to_uv_planck1900, uv_to_cct_planck1900};

/// Benchmark blackbody integration and the scalar locus.
fn bench_locus(c: &mut Criterion) {
    let mut group = c.benchmark_group("locus");
    let integrator = BlackbodyIntegrator::default();

    group.bench_function("blackbody_xyz", |b| {
        b.iter(|| integrator.xyz(black_box(6500.0)))
    });
    group.bench_function("cct_to_uv_scalar", |b| {
        b.iter(|| cct_to_uv_scalar(black_box(6500.0)))
    });

    group.finish();
}

/// Benchmark batch forward conversion.
fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("cct_to_uv");

    for size in [100, 1000, 10000].iter() {
        let cct = Array1::linspace(1000.0, 25000.0, *size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("planck1900", size), &cct, |b, cct| {
            b.iter(|| cct_to_uv_planck1900(black_box(cct)))
        });
    }

    group.finish();
}

/// Benchmark inverse conversion with both minimisers.
fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_to_cct");
    let uv = cct_to_uv_scalar(4000.0);

    for method in [Method::NelderMead, Method::Brent] {
        let settings = OptimisationSettings::from(method);
        group.bench_with_input(
            BenchmarkId::new("scalar", method),
            &settings,
            |b, settings| b.iter(|| uv_to_cct_scalar(black_box(uv), Some(settings))),
        );
    }

    for size in [10, 100, 1000].iter() {
        let cct = Array1::linspace(1000.0, 25000.0, *size);
        let uv = cct_to_uv_planck1900(&cct).unwrap();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("batch", size), &uv, |b, uv| {
            b.iter(|| uv_to_cct_planck1900(black_box(uv), None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locus, bench_forward, bench_inverse);
criterion_main!(benches);
