//! Composed noise built on the `grain-utils` simplex evaluators.
//!
//! - [`fractal`] - Fractal Brownian motion with analytic derivatives
//! - [`vector_noise`] - Vector-valued noise and its Jacobian
//! - [`settings`] - JSON5-backed sampler configuration
//! - [`sampler`] - [`FractalNoise`], a validated, shareable fractal field

pub mod error;
pub mod fractal;
pub mod sampler;
pub mod settings;
pub mod vector_noise;

pub use error::SettingsError;
pub use fractal::{fbm, fbm_spatial, fbm2, fbm3, fbm4};
pub use grain_utils::noise::{SimplexPoint, eval2, eval3, eval4, flow2, flow3};
pub use sampler::FractalNoise;
pub use settings::{MAX_OCTAVES, NoiseSettings};
pub use vector_noise::{noise2, noise3, noise4};
