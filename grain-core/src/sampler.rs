//! A configured fractal noise field.

use glam::{DVec2, DVec3, DVec4};
use grain_utils::noise::{SimplexPoint, flow2, flow3};

use crate::error::SettingsError;
use crate::fractal::fbm_spatial;
use crate::settings::NoiseSettings;

/// Fractal noise with validated, fixed parameters.
///
/// Cheap to copy and safe to share between threads; sampling never mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalNoise {
    settings: NoiseSettings,
    seed: i32,
}

impl FractalNoise {
    /// Builds a sampler from `settings`, rejecting invalid parameters.
    pub fn new(settings: &NoiseSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        if settings.octaves == 0 {
            tracing::warn!("fractal noise configured with zero octaves, every sample will be 0");
        }
        tracing::debug!(
            seed = settings.seed,
            frequency = settings.frequency,
            octaves = settings.octaves,
            lacunarity = settings.lacunarity,
            gain = settings.gain,
            "built fractal noise sampler"
        );
        Ok(Self {
            settings: *settings,
            seed: settings.seed32(),
        })
    }

    /// The settings this sampler was built from.
    #[must_use]
    pub const fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    /// Fractal noise at `point`.
    #[must_use]
    pub fn sample_2d(&self, point: DVec2) -> f64 {
        self.sample(point, None)
    }

    /// Fractal noise at `point`.
    #[must_use]
    pub fn sample_3d(&self, point: DVec3) -> f64 {
        self.sample(point, None)
    }

    /// Fractal noise at `point`.
    #[must_use]
    pub fn sample_4d(&self, point: DVec4) -> f64 {
        self.sample(point, None)
    }

    /// Value and gradient with respect to `point`, frequency included.
    #[must_use]
    pub fn sample_2d_with_derivative(&self, point: DVec2) -> (f64, DVec2) {
        let mut deriv = DVec2::ZERO;
        let value = self.sample(point, Some(&mut deriv));
        (value, deriv)
    }

    /// Value and gradient with respect to `point`.
    #[must_use]
    pub fn sample_3d_with_derivative(&self, point: DVec3) -> (f64, DVec3) {
        let mut deriv = DVec3::ZERO;
        let value = self.sample(point, Some(&mut deriv));
        (value, deriv)
    }

    /// Value and gradient with respect to `point`.
    #[must_use]
    pub fn sample_4d_with_derivative(&self, point: DVec4) -> (f64, DVec4) {
        let mut deriv = DVec4::ZERO;
        let value = self.sample(point, Some(&mut deriv));
        (value, deriv)
    }

    /// Single-octave flow noise at the configured frequency.
    #[must_use]
    pub fn flow_2d(&self, point: DVec2, angle: f64) -> f64 {
        let p = point * self.settings.frequency;
        flow2(p.x, p.y, angle, self.seed, None)
    }

    /// Single-octave flow noise at the configured frequency.
    #[must_use]
    pub fn flow_3d(&self, point: DVec3, angle: f64) -> f64 {
        let p = point * self.settings.frequency;
        flow3(p.x, p.y, p.z, angle, self.seed, None)
    }

    fn sample<P: SimplexPoint>(&self, point: P, deriv: Option<&mut P>) -> f64 {
        let NoiseSettings {
            frequency,
            octaves,
            lacunarity,
            gain,
            ..
        } = self.settings;
        let scaled = point * frequency;
        match deriv {
            Some(out) => {
                let value = fbm_spatial(
                    scaled,
                    self.seed,
                    octaves,
                    lacunarity,
                    gain,
                    Some(&mut *out),
                );
                *out = *out * frequency;
                value
            }
            None => fbm_spatial(scaled, self.seed, octaves, lacunarity, gain, None),
        }
    }
}
