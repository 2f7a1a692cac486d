use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. That factor is a power of ten, which directly translates into
    /// significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Normalize the hue, in degrees, to the half-open range `0..360`.
///
/// The sector formula for HSL/HSV as well as `atan2` produce hues in
/// `-360..=360`, which is why a single correction in either direction
/// suffices.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };
    if 360.0 <= hue {
        hue - 360.0
    } else {
        hue
    }
}

/// Convert the Cartesian a/b coordinates to chroma and hue in degrees.
///
/// At the origin, the hue is defined to be zero, independent of the signs of
/// zero coordinates.
#[inline]
pub(crate) fn to_polar(a: Float, b: Float) -> (Float, Float) {
    if a == 0.0 && b == 0.0 {
        return (0.0, 0.0);
    }

    let chroma = a.hypot(b);
    let hue = normalize_hue(b.atan2(a).to_degrees());
    (chroma, hue)
}

/// Round half-way cases towards positive infinity.
///
/// Unlike [`f64::round`], which rounds half-way cases away from zero, this
/// function rounds `-2.5` to `-2.0`. It is the rounding rule color pickers
/// use when displaying whole degrees and percentages.
#[inline]
pub(crate) fn round_half_up(value: Float) -> Float {
    let rounded = (value + 0.5).floor();
    // No negative zero in displays
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod test {
    use super::{multiply, normalize_hue, round_half_up, to_polar};
    use crate::core::TOLERANCE;

    #[test]
    fn test_multiply() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(multiply(&identity, &[0.25, 0.5, 0.75]), [0.25, 0.5, 0.75]);

        let matrix = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(multiply(&matrix, &[1.0, 1.0, 1.0]), [6.0, 15.0, 24.0]);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(359.5), 359.5);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-360.0), 0.0);
    }

    #[test]
    fn test_to_polar() {
        assert_eq!(to_polar(0.0, 0.0), (0.0, 0.0));
        assert_eq!(to_polar(-0.0, 0.0), (0.0, 0.0));
        assert_eq!(to_polar(-0.0, -0.0), (0.0, 0.0));

        let (chroma, hue) = to_polar(3.0, 4.0);
        assert_eq!(chroma, 5.0);
        assert!((hue - 53.13010235415598).abs() < TOLERANCE);

        let (chroma, hue) = to_polar(0.0, -2.0);
        assert_eq!(chroma, 2.0);
        assert!((hue - 270.0).abs() < TOLERANCE);

        let (_, hue) = to_polar(1.0, -1e-300);
        assert!((0.0..360.0).contains(&hue));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.4), 0.0);
        assert!(round_half_up(-0.4).is_sign_positive());
        assert_eq!(round_half_up(99.5), 100.0);
    }
}
