//! Errors raised while loading or validating noise configuration.
//!
//! Evaluation itself never fails; only settings can be rejected.

use thiserror::Error;

/// An error that can occur while loading [`NoiseSettings`](crate::NoiseSettings).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings text is not valid JSON5 or does not match the schema.
    #[error("Failed to parse noise settings: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A floating-point field is `NaN` or infinite.
    #[error("Noise setting `{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The base frequency is zero or negative.
    #[error("Noise frequency must be positive, got {0}")]
    NonPositiveFrequency(f64),
    /// More octaves were requested than the composer supports.
    #[error("Too many octaves: {octaves} (max {max})")]
    TooManyOctaves {
        /// Requested octave count.
        octaves: u32,
        /// Upper bound.
        max: u32,
    },
}
