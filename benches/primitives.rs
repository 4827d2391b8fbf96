//! Benchmarks for the hot primitives on the host backend

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lacore::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn client() -> HostClient {
    HostRuntime::default_client(&HostRuntime::default_device())
}

fn random_matrix(n: usize, seed: u64, c: &HostClient) -> Matrix<f64, HostRuntime> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..n * n).map(|_| rng.random_range(-1.0..1.0)).collect();
    Matrix::from_slice(&data, n, n, c)
}

fn random_spd(n: usize, seed: u64, c: &HostClient) -> Matrix<f64, HostRuntime> {
    let base = random_matrix(n, seed, c);
    let mut out = Matrix::zeros(n, n, c);
    c.gemm(Trans::No, Trans::Trans, 1.0, &base, &base, 0.0, &mut out);
    let mut shift = Vector::zeros(n, c);
    let ones: Vec<f64> = vec![n as f64; n];
    shift.copy_from_slice(&ones);
    let mut diag = out.diagonal();
    c.axpy(1.0, &shift, &mut diag, false);
    out
}

fn bench_gemm(crit: &mut Criterion) {
    let c = client();
    let mut group = crit.benchmark_group("gemm");
    for n in [32usize, 128, 256] {
        let a = random_matrix(n, 1, &c);
        let b = random_matrix(n, 2, &c);
        let mut out = Matrix::zeros(n, n, &c);
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                c.gemm(Trans::No, Trans::No, 1.0, &a, &b, 0.0, &mut out);
            });
        });
    }
    group.finish();
}

fn bench_gemv(crit: &mut Criterion) {
    let c = client();
    let mut group = crit.benchmark_group("gemv");
    for n in [64usize, 512] {
        let a = random_matrix(n, 3, &c);
        let x = Vector::from_slice(&vec![1.0f64; n], &c);
        let mut y = Vector::zeros(n, &c);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                c.gemv(Trans::No, 1.0, &a, &x, 0.0, &mut y);
            });
        });
    }
    group.finish();
}

fn bench_chol(crit: &mut Criterion) {
    let c = client();
    let mut group = crit.benchmark_group("chol");
    for n in [16usize, 64, 128] {
        let a = random_spd(n, 4, &c);
        let mut l = Matrix::zeros(n, n, &c);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                c.chol(&a, &mut l, Uplo::Lower, CholeskyStrategy::AdjustDiagonal)
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_ch1up(crit: &mut Criterion) {
    let c = client();
    let mut group = crit.benchmark_group("ch1up");
    for n in [16usize, 64, 128] {
        let a = random_spd(n, 5, &c);
        let mut u = Matrix::zeros(n, n, &c);
        c.chol(&a, &mut u, Uplo::Upper, CholeskyStrategy::AdjustDiagonal)
            .unwrap();
        let v: Vec<f64> = (0..n).map(|i| 1e-3 * (i as f64 + 1.0)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                let mut va = Vector::from_slice(&v, &c);
                let mut wb = Vector::zeros(n, &c);
                c.ch1up(&mut u, &mut va, &mut wb);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gemm, bench_gemv, bench_chol, bench_ch1up);
criterion_main!(benches);
