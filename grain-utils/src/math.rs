//! Small numeric helpers shared by the noise evaluators.

/// Floors a double to an `i32`.
///
/// Truncates toward zero and then steps down for negative fractional inputs.
/// Values outside the `i32` range saturate and `NaN` floors to `0`.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_positive_and_negative() {
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(0.999), 0);
        assert_eq!(floor(1.0), 1);
        assert_eq!(floor(-0.001), -1);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(-1.5), -2);
    }

    #[test]
    fn floor_saturates() {
        assert_eq!(floor(1e300), i32::MAX);
        assert_eq!(floor(-1e300), i32::MIN);
        assert_eq!(floor(f64::NAN), 0);
    }
}
