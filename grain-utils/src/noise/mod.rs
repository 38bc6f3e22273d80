//! Simplex-lattice gradient noise with analytic derivatives.
//!
//! - [`eval2`], [`eval3`], [`eval4`] - Seeded simplex noise
//! - [`flow2`], [`flow3`] - Simplex noise with gradients rotated by a shared angle
//! - [`SimplexPoint`] - Dispatch from a `glam` vector to the matching evaluator
//!
//! Every evaluator is a pure function of its arguments. The gradient tables are
//! constants, so any number of threads may sample concurrently.
//!
//! Derivatives are opt-in: pass `Some(&mut out)` to receive the gradient of the
//! field at the sample point, or `None` to skip that work.

mod flow;
pub mod gradient;
mod simplex;

use glam::{DVec2, DVec3, DVec4};

use crate::vector::NoiseVector;

pub use flow::{flow2, flow3};
pub use gradient::Rotation;
pub use simplex::{eval2, eval3, eval4};

/// Squared radius of each corner's falloff kernel.
///
/// Small enough that a corner's kernel reaches zero before the far side of
/// every simplex it belongs to, which keeps the field and its slope continuous.
pub const FALLOFF_RADIUS_SQ: f64 = 0.5;

/// A point type with a simplex evaluator of matching dimensionality.
pub trait SimplexPoint: NoiseVector {
    /// Evaluates seeded simplex noise at `self`.
    fn sample(self, seed: i32, deriv: Option<&mut Self>) -> f64;
}

impl SimplexPoint for DVec2 {
    #[inline]
    fn sample(self, seed: i32, deriv: Option<&mut Self>) -> f64 {
        eval2(self.x, self.y, seed, deriv)
    }
}

impl SimplexPoint for DVec3 {
    #[inline]
    fn sample(self, seed: i32, deriv: Option<&mut Self>) -> f64 {
        eval3(self.x, self.y, self.z, seed, deriv)
    }
}

impl SimplexPoint for DVec4 {
    #[inline]
    fn sample(self, seed: i32, deriv: Option<&mut Self>) -> f64 {
        eval4(self.x, self.y, self.z, self.w, seed, deriv)
    }
}

/// Running sum of corner contributions, plus the slope when requested.
struct Accumulator<V: NoiseVector> {
    value: f64,
    slope: Option<V>,
}

impl<V: NoiseVector> Accumulator<V> {
    #[inline]
    const fn new(with_slope: bool) -> Self {
        Self {
            value: 0.0,
            slope: if with_slope { Some(V::ZERO) } else { None },
        }
    }

    /// Adds the contribution of one corner.
    ///
    /// `offset` runs from the corner to the sample point. The gradient is only
    /// looked up when the corner lies inside the falloff radius.
    #[inline]
    fn add_corner(&mut self, offset: V, gradient: impl FnOnce() -> V) {
        let t = FALLOFF_RADIUS_SQ - offset.dot(offset);
        if t < 0.0 {
            return;
        }
        let g = gradient();
        let gd = g.dot(offset);
        let t2 = t * t;
        let t4 = t2 * t2;
        self.value += t4 * gd;

        if let Some(slope) = &mut self.slope {
            // d/dp (t^4 * g.p) = -8 t^3 (g.p) p + t^4 g
            *slope = *slope + offset * (-8.0 * t2 * t * gd) + g * t4;
        }
    }

    /// Applies the normalization scale and writes the slope out.
    #[inline]
    fn finish(self, scale: f64, deriv: Option<&mut V>) -> f64 {
        if let (Some(out), Some(slope)) = (deriv, self.slope) {
            *out = slope * scale;
        }
        self.value * scale
    }
}
