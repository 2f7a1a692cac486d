use super::math::{multiply, to_polar};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear RGB. This is a
/// one-hop, direct conversion.
///
/// Coordinates in unit range stay in unit range. The result is not clamped
/// any further.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

/// Convert coordinates for linear sRGB to XYZ with the D65 white point. This
/// is a one-hop, direct conversion.
pub(crate) fn linear_rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use crate::Float;

    /// The D65 reference white.
    pub(super) const D65: [Float; 3] = [0.95047, 1.0, 1.08883];

    /// The threshold between the linear segment and the cube root.
    const EPSILON: Float = 0.008856;
    const KAPPA: Float = 903.3;

    /// Apply CIELAB's companding function to a white-relative tristimulus
    /// value.
    #[inline]
    pub(super) fn compand(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }
}

/// Convert coordinates for XYZ to CIELAB relative to the D65 reference white.
/// This is a one-hop, direct conversion.
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [xn, yn, zn] = cielab::D65;
    let fx = cielab::compand(value[0] / xn);
    let fy = cielab::compand(value[1] / yn);
    let fz = cielab::compand(value[2] / zn);

    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert coordinates for CIELAB to CIELCh. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;
    let (C, h) = to_polar(a, b);
    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8189330101, 0.3618667424, -0.1288597137 ],
    [ 0.0329845436, 0.9293118715,  0.0361456387 ],
    [ 0.0482003018, 0.2643662691,  0.6338517070 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// Convert coordinates for XYZ to Oklab. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// cube root. Unlike a fractional power, the cube root is well-defined for
/// negative LMS values.
pub(crate) fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;
    let (C, h) = to_polar(a, b);
    [L, C, h]
}
