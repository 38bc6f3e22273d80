//! Seeded simplex noise in two, three and four dimensions.
//!
//! Gradients come from hashing each corner's lattice coordinates with the seed,
//! so there is no permutation table to build and any `i32` seed works.

use std::array;

use glam::{DVec2, DVec3, DVec4};

use super::Accumulator;
use super::gradient::{SIMPLEX4_RANK, gradient2, gradient3, gradient4};
use crate::math::floor;

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
#[allow(clippy::unreadable_literal)]
const SQRT_5: f64 = 2.23606797749979;

/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;
/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
const F4: f64 = (SQRT_5 - 1.0) / 4.0;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
const G4: f64 = (5.0 - SQRT_5) / 20.0;

// Normalization so the extremes of each field sit near `±1`.
pub(super) const SCALE_2: f64 = 70.0;
#[allow(clippy::unreadable_literal)]
pub(super) const SCALE_3: f64 = 67.79816627147162;
#[allow(clippy::unreadable_literal)]
const SCALE_4: f64 = 62.77772078955791;

/// Sample 2D simplex noise.
///
/// Returns a value typically in `[-1, 1]`. With `deriv` set, the partial
/// derivatives with respect to `x` and `y` are written to it.
///
/// Any lattice vertex (including the origin) evaluates to exactly `0`.
#[must_use]
pub fn eval2(x: f64, y: f64, seed: i32, deriv: Option<&mut DVec2>) -> f64 {
    simplex2(x, y, SCALE_2, |cell| gradient2(cell, seed), deriv)
}

/// Sample 3D simplex noise.
///
/// Returns a value typically in `[-1, 1]`. With `deriv` set, the partial
/// derivatives with respect to `x`, `y` and `z` are written to it.
#[must_use]
pub fn eval3(x: f64, y: f64, z: f64, seed: i32, deriv: Option<&mut DVec3>) -> f64 {
    simplex3(x, y, z, SCALE_3, |cell| gradient3(cell, seed), deriv)
}

/// Sample 4D simplex noise.
///
/// Returns a value typically in `[-1, 1]`. With `deriv` set, the four partial
/// derivatives are written to it.
#[must_use]
pub fn eval4(x: f64, y: f64, z: f64, w: f64, seed: i32, deriv: Option<&mut DVec4>) -> f64 {
    let s = (x + y + z + w) * F4;
    let i = floor(x + s);
    let j = floor(y + s);
    let k = floor(z + s);
    let l = floor(w + s);
    let t = (f64::from(i) + f64::from(j) + f64::from(k) + f64::from(l)) * G4;
    let p0 = DVec4::new(
        x - (f64::from(i) - t),
        y - (f64::from(j) - t),
        z - (f64::from(k) - t),
        w - (f64::from(l) - t),
    );

    // Rank the offset components to find which of the 24 simplices we're in
    let pattern = (usize::from(p0.x > p0.y) << 5)
        | (usize::from(p0.x > p0.z) << 4)
        | (usize::from(p0.y > p0.z) << 3)
        | (usize::from(p0.x > p0.w) << 2)
        | (usize::from(p0.y > p0.w) << 1)
        | usize::from(p0.z > p0.w);
    let rank = SIMPLEX4_RANK[pattern];

    let origin = [i, j, k, l];
    let mut acc = Accumulator::new(deriv.is_some());
    acc.add_corner(p0, || gradient4(origin, seed));

    // Corners 1..=3 step along every axis ranked at least `4 - n`
    for n in 1..=3u8 {
        let step = rank.map(|r| i32::from(r >= 4 - n));
        let offset = p0 - step_vec4(step) + DVec4::splat(f64::from(n) * G4);
        acc.add_corner(offset, || gradient4(add_cell(origin, step), seed));
    }

    let last = p0 - DVec4::ONE + DVec4::splat(4.0 * G4);
    acc.add_corner(last, || gradient4(add_cell(origin, [1; 4]), seed));

    acc.finish(SCALE_4, deriv)
}

/// Shared 2D traversal. `pick` maps a corner's lattice cell to its gradient.
#[inline]
pub(super) fn simplex2(
    x: f64,
    y: f64,
    scale: f64,
    pick: impl Fn([i32; 2]) -> DVec2,
    deriv: Option<&mut DVec2>,
) -> f64 {
    let s = (x + y) * F2;
    let i = floor(x + s);
    let j = floor(y + s);
    let t = (f64::from(i) + f64::from(j)) * G2;
    let x0 = x - (f64::from(i) - t);
    let y0 = y - (f64::from(j) - t);

    // Determine which simplex triangle we're in
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let p0 = DVec2::new(x0, y0);
    let p1 = DVec2::new(x0 - f64::from(i1) + G2, y0 - f64::from(j1) + G2);
    let p2 = DVec2::new(x0 - 1.0 + 2.0 * G2, y0 - 1.0 + 2.0 * G2);

    let mut acc = Accumulator::new(deriv.is_some());
    acc.add_corner(p0, || pick([i, j]));
    acc.add_corner(p1, || pick([i.wrapping_add(i1), j.wrapping_add(j1)]));
    acc.add_corner(p2, || pick([i.wrapping_add(1), j.wrapping_add(1)]));
    acc.finish(scale, deriv)
}

/// Shared 3D traversal. `pick` maps a corner's lattice cell to its gradient.
#[inline]
pub(super) fn simplex3(
    x: f64,
    y: f64,
    z: f64,
    scale: f64,
    pick: impl Fn([i32; 3]) -> DVec3,
    deriv: Option<&mut DVec3>,
) -> f64 {
    let s = (x + y + z) * F3;
    let i = floor(x + s);
    let j = floor(y + s);
    let k = floor(z + s);
    let t = (f64::from(i) + f64::from(j) + f64::from(k)) * G3;
    let p0 = DVec3::new(
        x - (f64::from(i) - t),
        y - (f64::from(j) - t),
        z - (f64::from(k) - t),
    );

    // Determine which simplex tetrahedron we're in
    let (first, second) = if p0.x >= p0.y {
        if p0.y >= p0.z {
            ([1, 0, 0], [1, 1, 0])
        } else if p0.x >= p0.z {
            ([1, 0, 0], [1, 0, 1])
        } else {
            ([0, 0, 1], [1, 0, 1])
        }
    } else if p0.y < p0.z {
        ([0, 0, 1], [0, 1, 1])
    } else if p0.x < p0.z {
        ([0, 1, 0], [0, 1, 1])
    } else {
        ([0, 1, 0], [1, 1, 0])
    };

    let p1 = p0 - step_vec3(first) + DVec3::splat(G3);
    let p2 = p0 - step_vec3(second) + DVec3::splat(2.0 * G3);
    let p3 = p0 - DVec3::ONE + DVec3::splat(3.0 * G3);

    let origin = [i, j, k];
    let mut acc = Accumulator::new(deriv.is_some());
    acc.add_corner(p0, || pick(origin));
    acc.add_corner(p1, || pick(add_cell(origin, first)));
    acc.add_corner(p2, || pick(add_cell(origin, second)));
    acc.add_corner(p3, || pick(add_cell(origin, [1; 3])));
    acc.finish(scale, deriv)
}

#[inline]
fn add_cell<const N: usize>(origin: [i32; N], step: [i32; N]) -> [i32; N] {
    array::from_fn(|axis| origin[axis].wrapping_add(step[axis]))
}

#[inline]
fn step_vec3(step: [i32; 3]) -> DVec3 {
    DVec3::new(f64::from(step[0]), f64::from(step[1]), f64::from(step[2]))
}

#[inline]
fn step_vec4(step: [i32; 4]) -> DVec4 {
    DVec4::new(
        f64::from(step[0]),
        f64::from(step[1]),
        f64::from(step[2]),
        f64::from(step[3]),
    )
}
