//! Vector-valued simplex noise.
//!
//! Output channel `i` samples the scalar field at the input nudged along axis
//! `i` by a step proportional to the input's length. Reusing the exact input
//! point for every channel would make all channels identical.

use glam::{DVec2, DVec3, DVec4};
use grain_utils::noise::SimplexPoint;

/// Step factor for [`noise2`].
pub const STEP_2: f64 = 0.317;
/// Step factor for [`noise3`].
pub const STEP_3: f64 = 0.279;
/// Step factor for [`noise4`].
pub const STEP_4: f64 = 0.251;

/// 2D vector noise.
///
/// With `derivs` set, `derivs[i]` receives the gradient of output channel `i`
/// with respect to `input`.
#[must_use]
pub fn noise2(input: DVec2, seed: i32, derivs: Option<&mut [DVec2; 2]>) -> DVec2 {
    vector_noise(input, seed, STEP_2, derivs.map(|d| d.as_mut_slice()))
}

/// 3D vector noise. See [`noise2`].
#[must_use]
pub fn noise3(input: DVec3, seed: i32, derivs: Option<&mut [DVec3; 3]>) -> DVec3 {
    vector_noise(input, seed, STEP_3, derivs.map(|d| d.as_mut_slice()))
}

/// 4D vector noise. See [`noise2`].
#[must_use]
pub fn noise4(input: DVec4, seed: i32, derivs: Option<&mut [DVec4; 4]>) -> DVec4 {
    vector_noise(input, seed, STEP_4, derivs.map(|d| d.as_mut_slice()))
}

/// `rows` has one entry per axis of `P`.
fn vector_noise<P: SimplexPoint>(
    input: P,
    seed: i32,
    step_factor: f64,
    mut rows: Option<&mut [P]>,
) -> P {
    let magnitude = input.magnitude();
    // A zero-length input falls back to a fixed step so channels still differ.
    let (step, step_slope) = if magnitude > 0.0 {
        (
            step_factor * magnitude,
            Some(input * (step_factor / magnitude)),
        )
    } else {
        (step_factor, None)
    };

    let mut output = P::ZERO;
    for axis in 0..P::DIM {
        let mut point = input;
        point.set_axis(axis, input.axis(axis) + step);

        if let Some(rows) = rows.as_deref_mut() {
            let mut slope = P::ZERO;
            output.set_axis(axis, point.sample(seed, Some(&mut slope)));
            // The step grows with |input|, which feeds back through this axis.
            rows[axis] = match step_slope {
                Some(ds) => slope + ds * slope.axis(axis),
                None => slope,
            };
        } else {
            output.set_axis(axis, point.sample(seed, None));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use grain_utils::noise::{eval2, eval3};

    #[test]
    fn channels_sample_offset_points() {
        let input = DVec2::new(3.0, 4.0);
        let step = STEP_2 * 5.0;
        let out = noise2(input, 21, None);
        assert!((out.x - eval2(3.0 + step, 4.0, 21, None)).abs() < 1e-12);
        assert!((out.y - eval2(3.0, 4.0 + step, 21, None)).abs() < 1e-12);
    }

    #[test]
    fn zero_input_uses_fixed_step() {
        let out = noise3(DVec3::ZERO, 6, None);
        assert!((out.x - eval3(STEP_3, 0.0, 0.0, 6, None)).abs() < 1e-12);
        assert!((out.y - eval3(0.0, STEP_3, 0.0, 6, None)).abs() < 1e-12);
        assert!((out.z - eval3(0.0, 0.0, STEP_3, 6, None)).abs() < 1e-12);

        let mut rows = [DVec3::splat(9.0); 3];
        let with_rows = noise3(DVec3::ZERO, 6, Some(&mut rows));
        assert_eq!(with_rows, out);
        let mut expected = DVec3::ZERO;
        let _ = eval3(STEP_3, 0.0, 0.0, 6, Some(&mut expected));
        assert!((rows[0] - expected).length() < 1e-12);
    }

    #[test]
    fn jacobian_matches_finite_difference() {
        const H: f64 = 1e-5;
        let input = DVec4::new(1.9, -3.2, 0.45, 2.6);
        let mut rows = [DVec4::ZERO; 4];
        let _ = noise4(input, 13, Some(&mut rows));

        for axis in 0..4 {
            let mut e = DVec4::ZERO;
            e[axis] = H;
            let numeric = (noise4(input + e, 13, None) - noise4(input - e, 13, None)) / (2.0 * H);
            for (channel, row) in rows.iter().enumerate() {
                let analytic = row[axis];
                assert!(
                    (numeric[channel] - analytic).abs() <= 1e-2 * analytic.abs().max(1.0),
                    "d out[{channel}] / d in[{axis}]: analytic {analytic} vs numeric {}",
                    numeric[channel]
                );
            }
        }
    }
}
