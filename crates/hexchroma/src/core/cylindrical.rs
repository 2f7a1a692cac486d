//! Hue-based and subtractive models derived directly from gamma-encoded sRGB.
//!
//! All functions in this module take sRGB coordinates in unit range, i.e., the
//! 8-bit channels divided by 255, and return hue in degrees and every other
//! quantity in percent.

use super::math::normalize_hue;
use crate::Float;

/// The extremes shared by HSL and HSV.
#[derive(Clone, Copy)]
struct Extremes {
    max: Float,
    min: Float,
    delta: Float,
}

impl Extremes {
    #[inline]
    fn of(value: &[Float; 3]) -> Self {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        Self {
            max,
            min,
            delta: max - min,
        }
    }

    /// Determine the hue in degrees.
    ///
    /// The hue falls into one of six 60º sectors, depending on which
    /// coordinate is maximal. Rust's `%` is a truncating remainder that keeps
    /// the sign of the dividend, so negative hues for the red sector are
    /// wrapped into range after scaling. Achromatic colors have hue zero.
    fn hue(&self, value: &[Float; 3]) -> Float {
        if self.delta == 0.0 {
            return 0.0;
        }

        let [r, g, b] = *value;
        let sector = if self.max == r {
            ((g - b) / self.delta) % 6.0
        } else if self.max == g {
            (b - r) / self.delta + 2.0
        } else {
            (r - g) / self.delta + 4.0
        };

        normalize_hue(sector * 60.0)
    }
}

/// Convert sRGB coordinates to HSL. This is a one-hop, direct conversion.
///
/// Saturation divides by `2 - max - min` for light colors and by `max + min`
/// for dark ones, so that neither denominator approaches zero.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let extremes = Extremes::of(value);
    let Extremes { max, min, delta } = extremes;

    let lightness = (max + min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    [
        extremes.hue(value),
        saturation * 100.0,
        lightness * 100.0,
    ]
}

/// Convert sRGB coordinates to HSV, also known as HSB. This is a one-hop,
/// direct conversion.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let extremes = Extremes::of(value);
    let Extremes { max, delta, .. } = extremes;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [extremes.hue(value), saturation * 100.0, max * 100.0]
}

/// Convert sRGB coordinates to CMYK. This is a one-hop, direct conversion.
///
/// Black has no defined cyan, magenta, or yellow; they are zero by
/// convention.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let k = 1.0 - r.max(g).max(b);

    if k == 1.0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let white = 1.0 - k;
    [
        (1.0 - r - k) / white * 100.0,
        (1.0 - g - k) / white * 100.0,
        (1.0 - b - k) / white * 100.0,
        k * 100.0,
    ]
}
