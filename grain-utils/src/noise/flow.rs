//! Flow noise: simplex noise whose gradients all turn by a shared angle.
//!
//! Sweeping the angle over time animates the field without any positional
//! discontinuity, which suits swirling or flowing effects. Only 2D and 3D
//! variants exist.

use glam::{DVec2, DVec3};

use super::gradient::{Rotation, gradient2_rotated, gradient3_rotated};
use super::simplex::{SCALE_2, SCALE_3, simplex2, simplex3};

/// Sample 2D flow noise with every gradient rotated by `angle` radians.
///
/// At `angle == 0` this is exactly [`eval2`](super::eval2).
#[must_use]
pub fn flow2(x: f64, y: f64, angle: f64, seed: i32, deriv: Option<&mut DVec2>) -> f64 {
    let rotation = Rotation::from_angle(angle);
    simplex2(
        x,
        y,
        SCALE_2,
        |cell| gradient2_rotated(cell, seed, rotation),
        deriv,
    )
}

/// Sample 3D flow noise.
///
/// Each corner's gradient is `cos(angle) * u + sin(angle) * v` for a hashed,
/// orthogonal basis pair `(u, v)`, so gradients trace circles as `angle` grows.
#[must_use]
pub fn flow3(x: f64, y: f64, z: f64, angle: f64, seed: i32, deriv: Option<&mut DVec3>) -> f64 {
    let rotation = Rotation::from_angle(angle);
    simplex3(
        x,
        y,
        z,
        SCALE_3,
        |cell| gradient3_rotated(cell, seed, rotation),
        deriv,
    )
}
