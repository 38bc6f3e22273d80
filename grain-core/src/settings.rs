//! Configuration for fractal noise sampling.
//!
//! Settings are plain data, usually written as JSON5:
//!
//! ```json5
//! {
//!     seed: 1234,
//!     frequency: 0.01,
//!     octaves: 6,
//!     lacunarity: 2.0,
//!     gain: 0.5,
//! }
//! ```
//!
//! Missing fields take their [`Default`] values. Unknown fields are rejected.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Upper bound on octaves. Beyond this the amplitude of any sane `gain`
/// has long since underflowed the contribution of the first octave.
pub const MAX_OCTAVES: u32 = 32;

/// Parameters of a [`FractalNoise`](crate::FractalNoise) sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    /// World seed. Only the low 32 bits reach the noise field.
    pub seed: i64,
    /// Scale applied to sample points before the first octave.
    pub frequency: f64,
    /// Number of octaves summed.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub gain: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 1.0,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl NoiseSettings {
    /// Parses and validates settings from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json5::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("frequency", self.frequency),
            ("lacunarity", self.lacunarity),
            ("gain", self.gain),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { field, value });
            }
        }
        if self.frequency <= 0.0 {
            return Err(SettingsError::NonPositiveFrequency(self.frequency));
        }
        if self.octaves > MAX_OCTAVES {
            return Err(SettingsError::TooManyOctaves {
                octaves: self.octaves,
                max: MAX_OCTAVES,
            });
        }
        Ok(())
    }

    /// The seed as consumed by the evaluators.
    ///
    /// Truncates to the low 32 bits (two's complement). Seeds that agree in
    /// their low 32 bits produce identical fields.
    #[must_use]
    pub const fn seed32(&self) -> i32 {
        self.seed as i32
    }
}
