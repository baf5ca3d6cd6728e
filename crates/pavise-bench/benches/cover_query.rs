//! Criterion micro-benchmarks for end-to-end cover queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pavise_bench::{siege_profile, skirmish_profile, Profile};
use pavise_engine::{compute_cover, EngineConfig, OriginSampling};

fn run(profile: &Profile) {
    let result = compute_cover(
        &profile.observer,
        &profile.target,
        &profile.tiers,
        &profile.obstacles,
        &profile.config,
    )
    .unwrap();
    black_box(result);
}

/// Benchmark: light map, center sampling (the interactive hot path).
fn bench_skirmish_center(c: &mut Criterion) {
    let profile = skirmish_profile(EngineConfig::default());
    c.bench_function("cover_skirmish_center", |b| b.iter(|| run(&profile)));
}

/// Benchmark: light map, corner sampling.
fn bench_skirmish_corners(c: &mut Criterion) {
    let profile = skirmish_profile(EngineConfig {
        origin_sampling: OriginSampling::Corners,
        ..EngineConfig::default()
    });
    c.bench_function("cover_skirmish_corners", |b| b.iter(|| run(&profile)));
}

/// Benchmark: dense lattice map, corner sampling (worst case).
fn bench_siege_corners(c: &mut Criterion) {
    let profile = siege_profile(EngineConfig {
        origin_sampling: OriginSampling::Corners,
        ..EngineConfig::default()
    });
    c.bench_function("cover_siege_corners", |b| b.iter(|| run(&profile)));
}

/// Benchmark: rebuilding the obstacle registry for the dense map, the
/// per-map-change cost callers pay outside queries.
fn bench_siege_rebuild(c: &mut Criterion) {
    use pavise_geom::ObstacleSet;
    use pavise_test_utils::wall_between;

    let config = EngineConfig::default();
    let walls: Vec<_> = (0..40)
        .map(|i| wall_between(i, 25.0 * i as f64, 0.0, 25.0 * i as f64, 1000.0))
        .collect();

    c.bench_function("obstacle_set_rebuild_40_walls", |b| {
        b.iter(|| {
            let set = ObstacleSet::build(&[], &[], &walls, 3, config.padding_px());
            black_box(set);
        });
    });
}

criterion_group!(
    benches,
    bench_skirmish_center,
    bench_skirmish_corners,
    bench_siege_corners,
    bench_siege_rebuild
);
criterion_main!(benches);
