//! Criterion benchmarks for the partial set covering solver.
//!
//! Uses seeded random instances so runs are comparable across machines
//! and code changes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_setcover::constructive::greedy_construct;
use u_setcover::models::{BitSet, Instance};
use u_setcover::vns::{VnsConfig, VnsRunner};

/// Builds a random instance where each set covers each point with the
/// given probability.
fn random_instance(n_sets: usize, n_points: usize, density: f64, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let coverage = (0..n_sets)
        .map(|_| {
            let mut set = BitSet::new(n_points);
            for p in 0..n_points {
                if rng.random_bool(density) {
                    set.insert(p);
                }
            }
            set
        })
        .collect();
    Instance::new(format!("random-{n_sets}x{n_points}"), n_sets, n_points, coverage)
}

fn bench_constructive(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_construct");
    for &(n_sets, n_points) in &[(50, 200), (100, 500), (200, 1000)] {
        let instance = random_instance(n_sets, n_points, 0.05, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{n_sets}x{n_points}")),
            &instance,
            |b, instance| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    black_box(greedy_construct(instance, &mut rng))
                })
            },
        );
    }
    group.finish();
}

fn bench_vns(c: &mut Criterion) {
    let mut group = c.benchmark_group("vns_run");
    group.sample_size(10);
    for &(n_sets, n_points) in &[(50, 200), (100, 500)] {
        let instance = random_instance(n_sets, n_points, 0.05, 7);
        let config = VnsConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{n_sets}x{n_points}")),
            &instance,
            |b, instance| b.iter(|| black_box(VnsRunner::run(instance, &config))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_constructive, bench_vns);
criterion_main!(benches);
