//! Gradient tables and hash-driven gradient selection.
//!
//! All tables are plain constants: they live in read-only memory for the whole
//! process and are shared by every evaluation without synchronization.

use glam::{DVec2, DVec3, DVec4};

use crate::hash::{hash2, hash3, hash4};

/// Component of the body-diagonal basis vectors, `sqrt(2/3)`.
///
/// Chosen so `(A, A, A)` has the same length (`sqrt(2)`) as a cube edge midpoint.
#[allow(clippy::unreadable_literal)]
const A: f64 = 0.816496580927726;

/// 2D gradients: four axis directions and four diagonals.
pub const GRAD2: [[f64; 2]; 8] = [
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [1.0, -1.0],
];

/// 3D gradients: the twelve cube edge midpoints, padded to 16 with four repeats.
pub const GRAD3: [[f64; 3]; 16] = [
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0],
    [0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [-1.0, -1.0, 0.0],
    // Repeats
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// 4D gradients: the 32 hypercube edge midpoints (one zero, three `±1`).
pub const GRAD4: [[f64; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, -1.0],
    [0.0, 1.0, -1.0, 1.0],
    [0.0, 1.0, -1.0, -1.0],
    [0.0, -1.0, 1.0, 1.0],
    [0.0, -1.0, 1.0, -1.0],
    [0.0, -1.0, -1.0, 1.0],
    [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, -1.0],
    [1.0, 0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0, -1.0],
    [-1.0, 0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0, 1.0],
    [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, -1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, -1.0],
    [-1.0, -1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 1.0, -1.0, 0.0],
    [1.0, -1.0, 1.0, 0.0],
    [1.0, -1.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0, 0.0],
    [-1.0, 1.0, -1.0, 0.0],
    [-1.0, -1.0, 1.0, 0.0],
    [-1.0, -1.0, -1.0, 0.0],
];

/// First basis vector of each rotating 3D gradient.
///
/// Entry `i` is orthogonal to [`GRAD3_V`]`[i]`, and both have length `sqrt(2)`,
/// so `cos * u + sin * v` sweeps a circle of constant radius.
pub const GRAD3_U: [[f64; 3]; 16] = [
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0],
    [0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, -1.0, -1.0],
    [A, A, A],
    [-A, A, -A],
    [-A, -A, A],
    [A, -A, -A],
    [-A, A, A],
    [A, -A, A],
    [A, -A, -A],
    [-A, A, -A],
];

/// Second basis vector of each rotating 3D gradient. See [`GRAD3_U`].
pub const GRAD3_V: [[f64; 3]; 16] = [
    [-A, A, A],
    [-A, -A, A],
    [A, -A, A],
    [A, A, A],
    [-A, -A, -A],
    [A, -A, -A],
    [A, A, -A],
    [-A, A, -A],
    [1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Corner ranking for the 4D simplex, indexed by a 6-bit comparison pattern.
///
/// Bit layout of the index: `x>y` (32), `x>z` (16), `y>z` (8), `x>w` (4),
/// `y>w` (2), `z>w` (1). Each entry holds the rank (0..=3) of the x, y, z and
/// w offsets; the corner visited `n`-th steps along every axis whose rank is at
/// least `4 - n`. The 40 patterns no real ordering can produce hold zeros.
#[rustfmt::skip]
pub const SIMPLEX4_RANK: [[u8; 4]; 64] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 0, 0, 0], [0, 2, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 2, 3, 0],
    [0, 2, 1, 3], [0, 0, 0, 0], [0, 3, 1, 2], [0, 3, 2, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 3, 2, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [1, 2, 0, 3], [0, 0, 0, 0], [1, 3, 0, 2], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [1, 0, 2, 3], [1, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [2, 0, 3, 1], [0, 0, 0, 0], [2, 1, 3, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [2, 0, 1, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [0, 0, 0, 0], [3, 1, 2, 0],
    [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 1, 0, 2], [0, 0, 0, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

/// A rotation angle pre-split into its cosine and sine.
///
/// Built once per evaluation and shared by every corner lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Cosine of the angle.
    pub cos: f64,
    /// Sine of the angle.
    pub sin: f64,
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self { cos: 1.0, sin: 0.0 };

    /// Creates a rotation from an angle in radians.
    #[must_use]
    pub fn from_angle(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { cos, sin }
    }
}

/// Gradient for a 2D lattice cell.
#[inline]
#[must_use]
pub fn gradient2(cell: [i32; 2], seed: i32) -> DVec2 {
    DVec2::from_array(GRAD2[(hash2(cell[0], cell[1], seed) & 7) as usize])
}

/// Gradient for a 3D lattice cell.
#[inline]
#[must_use]
pub fn gradient3(cell: [i32; 3], seed: i32) -> DVec3 {
    DVec3::from_array(GRAD3[(hash3(cell[0], cell[1], cell[2], seed) & 15) as usize])
}

/// Gradient for a 4D lattice cell.
#[inline]
#[must_use]
pub fn gradient4(cell: [i32; 4], seed: i32) -> DVec4 {
    DVec4::from_array(
        GRAD4[(hash4(cell[0], cell[1], cell[2], cell[3], seed) & 31) as usize],
    )
}

/// The 2D gradient for `cell`, rotated in-plane by `rotation`.
#[inline]
#[must_use]
pub fn gradient2_rotated(cell: [i32; 2], seed: i32, rotation: Rotation) -> DVec2 {
    let g = gradient2(cell, seed);
    DVec2::new(
        rotation.cos * g.x - rotation.sin * g.y,
        rotation.sin * g.x + rotation.cos * g.y,
    )
}

/// The rotating 3D gradient for `cell`: `cos * u + sin * v` over a hashed basis pair.
#[inline]
#[must_use]
pub fn gradient3_rotated(cell: [i32; 3], seed: i32, rotation: Rotation) -> DVec3 {
    let index = (hash3(cell[0], cell[1], cell[2], seed) & 15) as usize;
    let u = DVec3::from_array(GRAD3_U[index]);
    let v = DVec3::from_array(GRAD3_V[index]);
    u * rotation.cos + v * rotation.sin
}
