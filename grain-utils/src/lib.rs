//! Leaf primitives for gradient noise.
//!
//! - [`math`] - Integer floor used by the lattice traversal
//! - [`hash`] - 32-bit avalanche hashing of lattice coordinates
//! - [`vector`] - Fixed-dimension vector trait over `glam` doubles
//! - [`noise`] - Gradient tables, simplex evaluators and flow noise

pub mod hash;
pub mod math;
pub mod noise;
pub mod vector;

pub use vector::NoiseVector;
