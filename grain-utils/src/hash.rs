//! Integer avalanche hashing for lattice coordinates.
//!
//! Every function here works on genuine 32-bit two's-complement values. Inputs
//! are reinterpreted as `u32` and all arithmetic wraps, so a given
//! `(coordinates, seed)` tuple hashes identically on every platform and run.
//! Feeding wider integers through a different path would silently produce a
//! different noise field.

/// Per-axis multipliers. Odd, so multiplication is a bijection on `u32`.
const PRIME_X: u32 = 0x27D4_EB2D;
const PRIME_Y: u32 = 0x1656_67B1;
const PRIME_Z: u32 = 0x9E37_79B1;
const PRIME_W: u32 = 0x85EB_CA77;

/// Final avalanche: every input bit affects every output bit.
#[inline]
const fn finalize(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// Hashes a 2D lattice cell together with a seed.
#[inline]
#[must_use]
pub const fn hash2(x: i32, y: i32, seed: i32) -> u32 {
    finalize((seed as u32) ^ (x as u32).wrapping_mul(PRIME_X) ^ (y as u32).wrapping_mul(PRIME_Y))
}

/// Hashes a 3D lattice cell together with a seed.
#[inline]
#[must_use]
pub const fn hash3(x: i32, y: i32, z: i32, seed: i32) -> u32 {
    finalize(
        (seed as u32)
            ^ (x as u32).wrapping_mul(PRIME_X)
            ^ (y as u32).wrapping_mul(PRIME_Y)
            ^ (z as u32).wrapping_mul(PRIME_Z),
    )
}

/// Hashes a 4D lattice cell together with a seed.
#[inline]
#[must_use]
pub const fn hash4(x: i32, y: i32, z: i32, w: i32, seed: i32) -> u32 {
    finalize(
        (seed as u32)
            ^ (x as u32).wrapping_mul(PRIME_X)
            ^ (y as u32).wrapping_mul(PRIME_Y)
            ^ (z as u32).wrapping_mul(PRIME_Z)
            ^ (w as u32).wrapping_mul(PRIME_W),
    )
}
