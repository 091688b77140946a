//! Benchmarks for galaxy generation and the per-frame integrator.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use whorl::{galaxy, physics, GalaxyParams};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let params = GalaxyParams {
                count,
                ..GalaxyParams::default()
            };
            let mut rng = SmallRng::seed_from_u64(42);
            b.iter(|| black_box(galaxy::generate(&params, &mut rng)))
        });
    }

    group.finish();
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    for count in [10_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let params = GalaxyParams {
                count,
                ..GalaxyParams::default()
            };
            let mut rng = SmallRng::seed_from_u64(42);
            let mut buffer = galaxy::generate(&params, &mut rng);
            let mut velocities = vec![0.0f32; buffer.positions.len()];
            let target = Vec3::new(1.0, 0.0, 1.0);
            b.iter(|| {
                physics::integrate(
                    black_box(&mut buffer.positions),
                    black_box(&mut velocities),
                    target,
                    1.0,
                    1.0,
                );
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_integrate);
criterion_main!(benches);
