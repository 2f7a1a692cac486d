use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    from_24bit, lab_to_lch, linear_rgb_to_xyz, oklab_to_oklch, parse, rgb_to_cmyk, rgb_to_hsl,
    rgb_to_hsv, rgb_to_linear_rgb, to_eq_bits, xyz_to_lab, xyz_to_oklab,
};
use crate::error::ColorFormatError;
use crate::report::{Fixed, Whole};
use crate::Float;

/// Implement the traits and methods shared by all floating point value types.
///
/// Equality and hashing normalize coordinates with [`to_eq_bits`], which zeros
/// out not-a-numbers, reduces resolution, and drops the sign of negative zero.
/// That way, colors that are equal also have the same hash, and colors that
/// differ only by floating point error are equal.
macro_rules! value_type {
    ($name:ident, $label:literal, [$($field:ident),+], $count:literal) => {
        impl $name {
            /// Instantiate a new value from its coordinates.
            #[inline]
            pub const fn new($($field: Float),+) -> Self {
                Self { $($field),+ }
            }

            /// Access this value's coordinates as an array.
            #[inline]
            pub const fn coordinates(&self) -> [Float; $count] {
                [$(self.$field),+]
            }
        }

        #[cfg(feature = "pyffi")]
        #[pymethods]
        impl $name {
            /// Instantiate a new value from its coordinates. <i
            /// class=python-only>Python only!</i>
            #[new]
            pub fn py_new($($field: Float),+) -> Self {
                Self { $($field),+ }
            }

            /// Convert this value to its debug representation. <i
            /// class=python-only>Python only!</i>
            pub fn __repr__(&self) -> String {
                format!("{:?}", self)
            }

            /// Convert this value to its display representation. <i
            /// class=python-only>Python only!</i>
            pub fn __str__(&self) -> String {
                format!("{}", self)
            }
        }

        impl From<[Float; $count]> for $name {
            fn from(value: [Float; $count]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [Float; $count] {
            fn from(value: $name) -> Self {
                value.coordinates()
            }
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(to_eq_bits(self.$field).hash(state);)+
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $(to_eq_bits(self.$field) == to_eq_bits(other.$field))&&+
            }
        }

        impl Eq for $name {}

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!($label, "("))?;
                let coordinates = self.coordinates();
                for (index, coordinate) in coordinates.iter().enumerate() {
                    if 0 < index {
                        f.write_str(", ")?;
                    }
                    f.write_fmt(format_args!("{}", coordinate))?;
                }
                f.write_str(")")
            }
        }
    };
}

/// Format a coordinate that is displayed in whole numbers by default, unless
/// the formatter has an explicit precision.
fn whole_or_fixed(f: &std::fmt::Formatter<'_>, value: Float) -> String {
    match f.precision() {
        Some(precision) => Fixed(value, precision).to_string(),
        None => Whole(value).to_string(),
    }
}

// ====================================================================================================================
// sRGB
// ====================================================================================================================

/// A gamma-encoded sRGB color with 8-bit channels.
///
/// This is the root of the conversion pipeline. Its [`FromStr`]
/// implementation recognizes exactly six hexadecimal digits with an optional
/// leading `#`, in either case. Its display is the uppercase hashed
/// hexadecimal form.
///
/// ```
/// # use hexchroma::{error::ColorFormatError, Srgb};
/// # fn main() -> Result<(), ColorFormatError> {
/// let orange: Srgb = "ff5733".parse()?;
/// assert_eq!(orange, Srgb::new(255, 87, 51));
/// assert_eq!(orange.to_string(), "#FF5733");
///
/// assert_eq!("#fff".parse::<Srgb>(), Err(ColorFormatError::InvalidFormat));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Srgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb {
    /// Create a new sRGB color from its 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Srgb {
    /// Create a new sRGB color from its 8-bit channels. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a color in hexadecimal format. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Access the 8-bit channels.
    pub const fn to_24bit(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Access the channels normalized to unit range.
    pub fn to_unit(&self) -> [Float; 3] {
        from_24bit(self.r, self.g, self.b)
    }

    /// Create the ANSI escape sequences for a color swatch.
    ///
    /// The result paints two terminal cells with this color as 24-bit
    /// background color and then resets all styles again.
    pub fn swatch(&self) -> String {
        format!(
            "\x1b[48;2;{};{};{}m  \x1b[0m",
            self.r, self.g, self.b
        )
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl FromStr for Srgb {
    type Err = ColorFormatError;

    /// Parse a color in hexadecimal format.
    ///
    /// This method does not trim the string; leading or trailing white space
    /// makes for an invalid color format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = parse(s)?;
        Ok(Self::new(r, g, b))
    }
}

impl TryFrom<&str> for Srgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Srgb::from_str(value)
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(value: [u8; 3]) -> Self {
        Srgb::new(value[0], value[1], value[2])
    }
}

impl From<Srgb> for [u8; 3] {
    fn from(value: Srgb) -> Self {
        value.to_24bit()
    }
}

impl std::fmt::Display for Srgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b))
    }
}

// ====================================================================================================================
// Linear RGB and XYZ
// ====================================================================================================================

/// A linear RGB color.
///
/// The coordinates are proportional to light intensity and, for colors
/// converted from 8-bit sRGB, have unit range. Display uses 6 digits past the
/// decimal unless the formatter specifies a precision.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct LinearRgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

value_type!(LinearRgb, "LinearRgb", [r, g, b], 3);

impl From<Srgb> for LinearRgb {
    fn from(value: Srgb) -> Self {
        rgb_to_linear_rgb(&value.to_unit()).into()
    }
}

impl std::fmt::Display for LinearRgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(6);
        f.write_fmt(format_args!(
            "linear-rgb({}, {}, {})",
            Fixed(self.r, p),
            Fixed(self.g, p),
            Fixed(self.b, p)
        ))
    }
}

/// A CIE XYZ color with the D65 white point.
///
/// For colors converted from 8-bit sRGB, all coordinates are non-negative,
/// with Y ranging from 0 for black to 1 for white.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

value_type!(Xyz, "Xyz", [x, y, z], 3);

impl From<LinearRgb> for Xyz {
    fn from(value: LinearRgb) -> Self {
        linear_rgb_to_xyz(&value.coordinates()).into()
    }
}

impl std::fmt::Display for Xyz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(6);
        f.write_fmt(format_args!(
            "xyz({}, {}, {})",
            Fixed(self.x, p),
            Fixed(self.y, p),
            Fixed(self.z, p)
        ))
    }
}

// ====================================================================================================================
// CIELAB and CIELCh
// ====================================================================================================================

/// A CIELAB color relative to the D65 reference white.
///
/// Lightness L* ranges from 0 for black to 100 for white. The a* and b* axes
/// are unbounded, though in practice they stay within `-128..=127`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

value_type!(Lab, "Lab", [l, a, b], 3);

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        xyz_to_lab(&value.coordinates()).into()
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(2);
        f.write_fmt(format_args!(
            "lab({}, {}, {})",
            Fixed(self.l, p),
            Fixed(self.a, p),
            Fixed(self.b, p)
        ))
    }
}

/// A CIELCh color, i.e., CIELAB in polar coordinates.
///
/// Chroma C* is non-negative and hue h is in degrees `0..360`. When both a*
/// and b* are zero, the hue is zero as well. Display uses 2 digits past the
/// decimal unless the formatter specifies a precision.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Lch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

value_type!(Lch, "Lch", [l, c, h], 3);

impl From<Lab> for Lch {
    fn from(value: Lab) -> Self {
        lab_to_lch(&value.coordinates()).into()
    }
}

impl std::fmt::Display for Lch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(2);
        f.write_fmt(format_args!(
            "lch({}, {}, {})",
            Fixed(self.l, p),
            Fixed(self.c, p),
            Fixed(self.h, p)
        ))
    }
}

// ====================================================================================================================
// HSL, HSV, and CMYK
// ====================================================================================================================

/// An HSL color.
///
/// Hue h is in degrees `0..360`, saturation s and lightness l are percentages
/// `0..=100`. Achromatic colors have hue zero. Display rounds to whole numbers
/// unless the formatter specifies a precision.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

value_type!(Hsl, "Hsl", [h, s, l], 3);

impl From<Srgb> for Hsl {
    fn from(value: Srgb) -> Self {
        rgb_to_hsl(&value.to_unit()).into()
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let h = whole_or_fixed(f, self.h);
        let s = whole_or_fixed(f, self.s);
        let l = whole_or_fixed(f, self.l);
        f.write_fmt(format_args!("hsl({}, {}%, {}%)", h, s, l))
    }
}

/// An HSV color, also known as HSB. Coordinates are like [`Hsl`]'s.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

value_type!(Hsv, "Hsv", [h, s, v], 3);

impl From<Srgb> for Hsv {
    fn from(value: Srgb) -> Self {
        rgb_to_hsv(&value.to_unit()).into()
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let h = whole_or_fixed(f, self.h);
        let s = whole_or_fixed(f, self.s);
        let v = whole_or_fixed(f, self.v);
        f.write_fmt(format_args!("hsv({}, {}%, {}%)", h, s, v))
    }
}

/// A CMYK color.
///
/// All four inks are percentages `0..=100`. Black has no cyan, magenta, or
/// yellow. Display rounds to whole numbers unless the formatter specifies a
/// precision.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Cmyk {
    pub c: Float,
    pub m: Float,
    pub y: Float,
    pub k: Float,
}

value_type!(Cmyk, "Cmyk", [c, m, y, k], 4);

impl From<Srgb> for Cmyk {
    fn from(value: Srgb) -> Self {
        rgb_to_cmyk(&value.to_unit()).into()
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = whole_or_fixed(f, self.c);
        let m = whole_or_fixed(f, self.m);
        let y = whole_or_fixed(f, self.y);
        let k = whole_or_fixed(f, self.k);
        f.write_fmt(format_args!("cmyk({}%, {}%, {}%, {}%)", c, m, y, k))
    }
}

// ====================================================================================================================
// Oklab and Oklch
// ====================================================================================================================

/// An Oklab color.
///
/// Lightness L ranges from 0 for black to 1 for white. The a and b axes are
/// unbounded, though in practice they stay within `-0.4..=0.4`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Oklab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

value_type!(Oklab, "Oklab", [l, a, b], 3);

impl From<Xyz> for Oklab {
    fn from(value: Xyz) -> Self {
        xyz_to_oklab(&value.coordinates()).into()
    }
}

impl std::fmt::Display for Oklab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(6);
        f.write_fmt(format_args!(
            "oklab({}, {}, {})",
            Fixed(self.l, p),
            Fixed(self.a, p),
            Fixed(self.b, p)
        ))
    }
}

/// An Oklch color, i.e., Oklab in polar coordinates.
///
/// Chroma C is non-negative and hue h is in degrees `0..360`. When both a and
/// b are zero, the hue is zero as well. Display uses 6 digits past the
/// decimal for lightness and chroma but, since degrees are two orders of
/// magnitude larger, only 2 digits for hue. An explicit precision applies to
/// lightness and chroma, with hue using 4 fewer digits.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy)]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

value_type!(Oklch, "Oklch", [l, c, h], 3);

impl From<Oklab> for Oklch {
    fn from(value: Oklab) -> Self {
        oklab_to_oklch(&value.coordinates()).into()
    }
}

impl std::fmt::Display for Oklch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(6);
        f.write_fmt(format_args!(
            "oklch({}, {}, {})",
            Fixed(self.l, p),
            Fixed(self.c, p),
            Fixed(self.h, p.saturating_sub(4))
        ))
    }
}

// ====================================================================================================================
