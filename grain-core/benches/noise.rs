#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{DVec2, DVec3};
use grain_core::{FractalNoise, NoiseSettings, eval2, eval3, eval4, flow3, noise3};
use std::hint::black_box;

/// Walk a 64x64 grid with a non-integer step so samples land inside cells.
fn sample_grid(mut sample: impl FnMut(f64, f64) -> f64) -> f64 {
    let mut sum = 0.0;
    for i in 0..64 {
        for j in 0..64 {
            sum += sample(f64::from(i) * 0.173, f64::from(j) * 0.173);
        }
    }
    sum
}

// ── Raw evaluators ──────────────────────────────────────────────────────────

fn bench_evaluators(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_grid");

    group.bench_function("eval2", |b| {
        b.iter(|| sample_grid(|x, y| eval2(black_box(x), black_box(y), 1, None)));
    });
    group.bench_function("eval3", |b| {
        b.iter(|| sample_grid(|x, y| eval3(black_box(x), black_box(y), 0.5, 1, None)));
    });
    group.bench_function("eval4", |b| {
        b.iter(|| sample_grid(|x, y| eval4(black_box(x), black_box(y), 0.5, 0.25, 1, None)));
    });
    group.bench_function("eval3_with_derivative", |b| {
        b.iter(|| {
            sample_grid(|x, y| {
                let mut d = DVec3::ZERO;
                eval3(black_box(x), black_box(y), 0.5, 1, Some(&mut d)) + d.x
            })
        });
    });
    group.bench_function("flow3", |b| {
        b.iter(|| sample_grid(|x, y| flow3(black_box(x), black_box(y), 0.5, 0.8, 1, None)));
    });
    group.bench_function("noise3", |b| {
        b.iter(|| {
            sample_grid(|x, y| noise3(DVec3::new(black_box(x), black_box(y), 0.5), 1, None).x)
        });
    });

    group.finish();
}

// ── Fractal sampler ─────────────────────────────────────────────────────────

fn bench_fractal_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractal_grid");
    for octaves in [1, 4, 8] {
        let noise = FractalNoise::new(&NoiseSettings {
            octaves,
            frequency: 0.05,
            ..NoiseSettings::default()
        })
        .expect("valid settings");

        group.bench_with_input(BenchmarkId::from_parameter(octaves), &noise, |b, noise| {
            b.iter(|| sample_grid(|x, y| noise.sample_2d(black_box(DVec2::new(x, y)))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluators, bench_fractal_octaves);
criterion_main!(benches);
