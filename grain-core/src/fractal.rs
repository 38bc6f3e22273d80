//! Fractal Brownian motion over the simplex evaluators.
//!
//! Each octave samples the base field at `coord * frequency` and weights it by
//! `amplitude`. The first octave uses frequency `1` and amplitude `0.5`; after
//! every octave the frequency is multiplied by `lacunarity` and the amplitude
//! by `gain`. All octaves share the same seed.
//!
//! Two derivative conventions are offered. [`fbm`] sums each octave's slope
//! weighted by its amplitude alone, as measured in that octave's own scaled
//! space. [`fbm_spatial`] also applies the octave frequency, giving the true
//! gradient with respect to `coord`. Both return the same value.

use glam::{DVec2, DVec3, DVec4};
use grain_utils::noise::SimplexPoint;

/// Amplitude of the first octave.
pub const FIRST_AMPLITUDE: f64 = 0.5;

/// Sums `octaves` octaves of simplex noise at `coord`.
///
/// With `deriv` set, it receives the sum of every octave's derivative scaled
/// by that octave's amplitude. Zero octaves yield `0` and a zero derivative.
#[must_use]
pub fn fbm<P: SimplexPoint>(
    coord: P,
    seed: i32,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    deriv: Option<&mut P>,
) -> f64 {
    accumulate(coord, seed, octaves, lacunarity, gain, deriv, false)
}

/// Same value as [`fbm`], with `deriv` receiving the gradient with respect to
/// `coord` (each octave's slope scaled by `amplitude * frequency`).
#[must_use]
pub fn fbm_spatial<P: SimplexPoint>(
    coord: P,
    seed: i32,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    deriv: Option<&mut P>,
) -> f64 {
    accumulate(coord, seed, octaves, lacunarity, gain, deriv, true)
}

fn accumulate<P: SimplexPoint>(
    coord: P,
    seed: i32,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    deriv: Option<&mut P>,
    spatial: bool,
) -> f64 {
    let mut frequency = 1.0;
    let mut amplitude = FIRST_AMPLITUDE;
    let mut sum = 0.0;
    let mut slope = P::ZERO;

    for _ in 0..octaves {
        let scaled = coord * frequency;
        if deriv.is_some() {
            let mut octave_slope = P::ZERO;
            sum += scaled.sample(seed, Some(&mut octave_slope)) * amplitude;
            let weight = if spatial {
                amplitude * frequency
            } else {
                amplitude
            };
            slope = slope + octave_slope * weight;
        } else {
            sum += scaled.sample(seed, None) * amplitude;
        }
        frequency *= lacunarity;
        amplitude *= gain;
    }

    if let Some(out) = deriv {
        *out = slope;
    }
    sum
}

/// 2D fbm. See [`fbm`].
#[must_use]
pub fn fbm2(
    coord: DVec2,
    seed: i32,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    deriv: Option<&mut DVec2>,
) -> f64 {
    fbm(coord, seed, octaves, lacunarity, gain, deriv)
}

/// 3D fbm. See [`fbm`].
#[must_use]
pub fn fbm3(
    coord: DVec3,
    seed: i32,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    deriv: Option<&mut DVec3>,
) -> f64 {
    fbm(coord, seed, octaves, lacunarity, gain, deriv)
}

/// 4D fbm. See [`fbm`].
#[must_use]
pub fn fbm4(
    coord: DVec4,
    seed: i32,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    deriv: Option<&mut DVec4>,
) -> f64 {
    fbm(coord, seed, octaves, lacunarity, gain, deriv)
}
