//! Fixed-dimension vector abstraction over `glam` double-precision vectors.
//!
//! The noise composers only need per-axis access plus a little arithmetic, so
//! they are written against [`NoiseVector`] instead of a concrete type.

use std::ops::{Add, Mul};

use glam::{DVec2, DVec3, DVec4};

/// A small `Copy` vector of `f64` components.
pub trait NoiseVector: Copy + Add<Output = Self> + Mul<f64, Output = Self> {
    /// Number of components.
    const DIM: usize;
    /// The all-zero vector.
    const ZERO: Self;

    /// Component `i`. Panics when `i >= DIM`.
    fn axis(&self, i: usize) -> f64;

    /// Overwrites component `i`. Panics when `i >= DIM`.
    fn set_axis(&mut self, i: usize, value: f64);

    /// Euclidean length.
    fn magnitude(&self) -> f64;

    /// Dot product.
    fn dot(self, other: Self) -> f64;

    /// Unit vector along axis `i`.
    #[must_use]
    fn unit(i: usize) -> Self {
        let mut v = Self::ZERO;
        v.set_axis(i, 1.0);
        v
    }
}

macro_rules! impl_noise_vector {
    ($ty:ty, $dim:literal) => {
        impl NoiseVector for $ty {
            const DIM: usize = $dim;
            const ZERO: Self = <$ty>::ZERO;

            #[inline]
            fn axis(&self, i: usize) -> f64 {
                self[i]
            }

            #[inline]
            fn set_axis(&mut self, i: usize, value: f64) {
                self[i] = value;
            }

            #[inline]
            fn magnitude(&self) -> f64 {
                self.length()
            }

            #[inline]
            fn dot(self, other: Self) -> f64 {
                <$ty>::dot(self, other)
            }
        }
    };
}

impl_noise_vector!(DVec2, 2);
impl_noise_vector!(DVec3, 3);
impl_noise_vector!(DVec4, 4);
