use super::math::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays differ by no more than
/// the given tolerance.
///
/// Several conversion constants have only four to ten significant digits,
/// which makes exact comparisons with published reference values pointless.
///
/// # Panics
///
/// This macro panics if the arrays have different lengths or if any pair of
/// coordinates differs by more than the tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        let (actual, expected, tolerance) = ($actual, $expected, $tolerance);
        assert_eq!(
            actual.len(),
            expected.len(),
            "coordinate counts differ:\n{:?}\n{:?}",
            actual,
            expected
        );
        for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a - e).abs() <= tolerance,
                "coordinate {} differs by more than {}:\n{:?}\n{:?}",
                index,
                tolerance,
                actual,
                expected
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_within;

/// The tolerance for comparing computed coordinates with reference values in
/// tests. It is much larger for `f32`, which has barely seven significant
/// digits.
#[cfg(all(test, feature = "f64"))]
pub(crate) const TOLERANCE: Float = 1e-9;
/// The tolerance for comparing computed coordinates with reference values in
/// tests. It is much larger for `f32`, which has barely seven significant
/// digits.
#[cfg(all(test, not(feature = "f64")))]
pub(crate) const TOLERANCE: Float = 1e-3;

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}
