//! Statistical and cross-thread properties of the noise engine.
//!
//! Sample points come from the crate's own lattice hash, so every run sees the
//! same inputs without depending on an RNG.

use glam::{DVec2, DVec3, DVec4};
use grain_core::{FractalNoise, NoiseSettings, eval2, eval3, eval4, fbm2, noise3};
use grain_utils::hash::hash2;
use rayon::prelude::*;

const SAMPLES: i32 = 100_000;

/// Deterministic coordinate in `[-range, range)` for sample `index`.
fn coord(index: i32, axis: i32, range: f64) -> f64 {
    f64::from(hash2(index, axis, 0x5EED)) / 4_294_967_296.0 * 2.0 * range - range
}

fn point3(index: i32) -> DVec3 {
    DVec3::new(
        coord(index, 0, 100.0),
        coord(index, 1, 100.0),
        coord(index, 2, 100.0),
    )
}

fn point4(index: i32) -> DVec4 {
    DVec4::new(
        coord(index, 0, 100.0),
        coord(index, 1, 100.0),
        coord(index, 2, 100.0),
        coord(index, 3, 100.0),
    )
}

fn assert_mostly_bounded(name: &str, sample: impl Fn(i32) -> f64 + Sync) {
    let outside = (0..SAMPLES)
        .into_par_iter()
        .filter(|&n| sample(n).abs() > 1.2)
        .count();
    // At least 99.9% within [-1.2, 1.2].
    assert!(
        outside * 1000 <= SAMPLES as usize,
        "{name}: {outside} of {SAMPLES} samples outside [-1.2, 1.2]"
    );
}

#[test]
fn evaluators_stay_in_range() {
    assert_mostly_bounded("eval2", |n| {
        eval2(coord(n, 0, 100.0), coord(n, 1, 100.0), 7, None)
    });
    assert_mostly_bounded("eval3", |n| {
        let p = point3(n);
        eval3(p.x, p.y, p.z, 7, None)
    });
    assert_mostly_bounded("eval4", |n| {
        let p = point4(n);
        eval4(p.x, p.y, p.z, p.w, 7, None)
    });
}

#[test]
fn distinct_seeds_are_uncorrelated() {
    let pairs: Vec<(f64, f64)> = (0..SAMPLES)
        .into_par_iter()
        .map(|n| {
            let p = point3(n);
            (eval3(p.x, p.y, p.z, 1, None), eval3(p.x, p.y, p.z, 2, None))
        })
        .collect();

    let count = f64::from(SAMPLES);
    let mean_a = pairs.iter().map(|&(a, _)| a).sum::<f64>() / count;
    let mean_b = pairs.iter().map(|&(_, b)| b).sum::<f64>() / count;
    let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
    for &(a, b) in &pairs {
        cov += (a - mean_a) * (b - mean_b);
        var_a += (a - mean_a) * (a - mean_a);
        var_b += (b - mean_b) * (b - mean_b);
    }
    let r = cov / (var_a * var_b).sqrt();
    assert!(r.abs() < 0.05, "seed correlation {r}");
}

#[test]
fn parallel_sampling_matches_sequential() {
    let noise = FractalNoise::new(&NoiseSettings {
        seed: -31,
        frequency: 0.02,
        octaves: 7,
        ..NoiseSettings::default()
    })
    .expect("valid settings");

    let sequential: Vec<u64> = (0..10_000)
        .map(|n| noise.sample_4d(point4(n)).to_bits())
        .collect();
    let parallel: Vec<u64> = (0..10_000)
        .into_par_iter()
        .rev()
        .map(|n| noise.sample_4d(point4(n)).to_bits())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn fbm_is_bounded_by_its_amplitudes() {
    // Amplitudes 0.5 + 0.25 + ... stay below 1 for gain 0.5.
    let worst = (0..20_000)
        .into_par_iter()
        .map(|n| {
            let p = DVec2::new(coord(n, 0, 100.0), coord(n, 1, 100.0));
            fbm2(p, 3, 8, 2.0, 0.5, None).abs()
        })
        .reduce(|| 0.0, f64::max);
    assert!(worst <= 1.2, "fbm peak {worst}");
    assert!(worst > 0.1, "fbm should not be flat, peak {worst}");
}

#[test]
fn vector_noise_channels_differ() {
    let differing = (0..1000)
        .filter(|&n| {
            let out = noise3(point3(n), 12, None);
            (out.x - out.y).abs() > 1e-12 && (out.y - out.z).abs() > 1e-12
        })
        .count();
    assert!(differing > 990, "only {differing} of 1000 outputs had distinct channels");
}

#[test]
fn loads_settings_from_json5_asset() {
    let text = include_str!("../test_assets/terrain.json5");
    let settings = NoiseSettings::from_json5(text).expect("Failed to parse terrain.json5");
    assert_eq!(settings.seed, 8_275_105);
    assert_eq!(settings.octaves, 6);

    let noise = FractalNoise::new(&settings).expect("valid settings");
    let (value, deriv) = noise.sample_2d_with_derivative(DVec2::new(250.0, -75.0));
    assert!(value.is_finite());
    assert!(deriv.is_finite());
}
