use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;
use crate::report::Card;
use crate::{Cmyk, Hsl, Hsv, Lab, Lch, LinearRgb, Oklab, Oklch, Srgb, Xyz};

/// The result of running one color through the conversion pipeline.
///
/// A conversion bundles the color in all ten models. The CIE branch flows
/// from [`Srgb`] through [`LinearRgb`] to [`Xyz`], which feeds both [`Lab`]
/// and [`Oklab`] with their polar forms [`Lch`] and [`Oklch`]. The
/// cylindrical branch derives [`Hsl`], [`Hsv`], and [`Cmyk`] directly from
/// the sRGB channels.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Conversion {
    pub srgb: Srgb,
    pub linear_rgb: LinearRgb,
    pub xyz: Xyz,
    pub lab: Lab,
    pub lch: Lch,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    pub oklab: Oklab,
    pub oklch: Oklch,
}

impl Conversion {
    /// Run the already parsed color through the pipeline.
    pub fn new(srgb: Srgb) -> Self {
        let linear_rgb = LinearRgb::from(srgb);
        tracing::trace!(%srgb, %linear_rgb, "gamma-decoded");
        let xyz = Xyz::from(linear_rgb);
        tracing::trace!(%srgb, %xyz, "converted to XYZ");

        let lab = Lab::from(xyz);
        let lch = Lch::from(lab);
        tracing::trace!(%srgb, %lab, %lch, "derived CIELAB");

        let oklab = Oklab::from(xyz);
        let oklch = Oklch::from(oklab);
        tracing::trace!(%srgb, %oklab, %oklch, "derived Oklab");

        let hsl = Hsl::from(srgb);
        let hsv = Hsv::from(srgb);
        let cmyk = Cmyk::from(srgb);
        tracing::trace!(%srgb, %hsl, %hsv, %cmyk, "derived cylindrical models");

        Self {
            srgb,
            linear_rgb,
            xyz,
            lab,
            lch,
            hsl,
            hsv,
            cmyk,
            oklab,
            oklch,
        }
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Conversion {
    /// Render this conversion as report cards, one per model in report order.
    pub fn cards(&self) -> Vec<Card> {
        crate::Model::all().map(|model| Card::of(self, model)).collect()
    }

    /// Render this conversion as human-readable text. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl From<Srgb> for Conversion {
    fn from(value: Srgb) -> Self {
        Conversion::new(value)
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, card) in self.cards().iter().enumerate() {
            if 0 < index {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// Convert a color in hexadecimal format to all supported models.
///
/// The string must consist of exactly six hexadecimal digits, in either case,
/// with an optional leading `#`. It is not trimmed.
///
/// ```
/// # use hexchroma::{convert, error::ColorFormatError};
/// # fn main() -> Result<(), ColorFormatError> {
/// let black = convert("000000")?;
/// assert_eq!(black.lab.coordinates(), [0.0, 0.0, 0.0]);
/// assert_eq!(black.cmyk.k, 100.0);
///
/// assert_eq!(convert("#12345Z"), Err(ColorFormatError::InvalidFormat));
/// # Ok(())
/// # }
/// ```
pub fn convert(hex: &str) -> Result<Conversion, ColorFormatError> {
    let srgb = Srgb::from_str(hex).inspect_err(|err| {
        tracing::debug!(input = hex, %err, "rejected color");
    })?;

    let conversion = Conversion::new(srgb);
    tracing::debug!(
        %srgb,
        lab = %conversion.lab,
        oklab = %conversion.oklab,
        "converted color"
    );
    Ok(conversion)
}

/// Convert a color in hexadecimal format to all supported models. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "convert")]
pub fn py_convert(hex: &str) -> Result<Conversion, ColorFormatError> {
    convert(hex)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{convert, Conversion};
    use crate::core::{assert_within, TOLERANCE};
    use crate::error::ColorFormatError;
    use crate::Srgb;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_black() -> Result<(), ColorFormatError> {
        let black = convert("#000000")?;
        assert_eq!(black.srgb, Srgb::new(0, 0, 0));
        assert_eq!(black.linear_rgb.coordinates(), [0.0, 0.0, 0.0]);
        assert_eq!(black.xyz.coordinates(), [0.0, 0.0, 0.0]);
        assert_within!(&black.lab.coordinates(), &[0.0, 0.0, 0.0], TOLERANCE);
        assert_within!(&black.lch.coordinates(), &[0.0, 0.0, 0.0], TOLERANCE);
        assert_eq!(black.hsl.coordinates(), [0.0, 0.0, 0.0]);
        assert_eq!(black.hsv.coordinates(), [0.0, 0.0, 0.0]);
        assert_eq!(black.cmyk.coordinates(), [0.0, 0.0, 0.0, 100.0]);
        assert_within!(&black.oklab.coordinates(), &[0.0, 0.0, 0.0], TOLERANCE);
        Ok(())
    }

    #[test]
    fn test_white() -> Result<(), ColorFormatError> {
        let white = convert("FFFFFF")?;
        assert_eq!(white.linear_rgb.coordinates(), [1.0, 1.0, 1.0]);
        assert_within!(&white.xyz.coordinates(), &[0.95047, 1.0, 1.08883], 2e-4);
        assert_within!(&white.lab.coordinates(), &[100.0, 0.0, 0.0], 0.02);
        assert_eq!(white.hsl.coordinates(), [0.0, 0.0, 100.0]);
        assert_eq!(white.hsv.coordinates(), [0.0, 0.0, 100.0]);
        assert_eq!(white.cmyk.coordinates(), [0.0, 0.0, 0.0, 0.0]);
        assert_within!(&[white.oklab.l, white.oklch.c], &[1.0, 0.0], 1e-3);
        Ok(())
    }

    #[test]
    fn test_orange() -> Result<(), ColorFormatError> {
        let orange = convert("#ff5733")?;
        assert_eq!(orange.srgb.to_24bit(), [0xff, 0x57, 0x33]);
        assert_within!(&orange.lab.coordinates(), &[60.1726, 62.0757, 54.3359], 1e-3);
        assert_within!(&orange.lch.coordinates(), &[60.1726, 82.4971, 41.1962], 1e-3);
        assert_within!(&orange.oklab.coordinates(), &[0.680336, 0.174753, 0.116444], 1e-5);
        assert_within!(&orange.oklch.coordinates(), &[0.680336, 0.209995, 33.677], 1e-3);
        assert_within!(&orange.hsl.coordinates(), &[10.588235, 100.0, 60.0], 1e-5);
        assert_within!(&orange.hsv.coordinates(), &[10.588235, 80.0, 100.0], 1e-5);
        assert_within!(&orange.cmyk.coordinates(), &[0.0, 65.882353, 80.0, 0.0], 1e-5);
        Ok(())
    }

    #[test]
    fn test_invalid() {
        for input in ["12345", "GGGGGG", "#12345Z", "", " #FF5733", "#FF5733\n"] {
            assert_eq!(
                convert(input),
                Err(ColorFormatError::InvalidFormat),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_from_srgb() -> Result<(), ColorFormatError> {
        let srgb = Srgb::new(0x31, 0x78, 0xea);
        assert_eq!(Conversion::from(srgb), convert("3178EA")?);
        Ok(())
    }

    #[test]
    fn test_random_hex_strings() -> Result<(), ColorFormatError> {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..1_000 {
            let bytes: [u8; 3] = [rng.random(), rng.random(), rng.random()];
            let prefix = if rng.random() { "#" } else { "" };
            let digits = if rng.random() {
                format!("{:02X}{:02X}{:02X}", bytes[0], bytes[1], bytes[2])
            } else {
                format!("{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
            };

            let conversion = convert(&format!("{}{}", prefix, digits))?;
            assert_eq!(conversion.srgb.to_24bit(), bytes);
        }
        Ok(())
    }

    #[test]
    fn test_random_colors() {
        let mut rng = StdRng::seed_from_u64(665);

        for _ in 0..10_000 {
            let srgb = Srgb::new(rng.random(), rng.random(), rng.random());
            let Conversion {
                hsl,
                hsv,
                cmyk,
                lch,
                oklch,
                ..
            } = Conversion::new(srgb);

            assert_eq!(hsl.h, hsv.h, "hues differ for {}", srgb);
            let achromatic = srgb.r == srgb.g && srgb.g == srgb.b;
            if achromatic {
                assert_eq!(hsl.h, 0.0, "hue of gray {} is not zero", srgb);
                assert_eq!(hsl.s, 0.0, "saturation of gray {} is not zero", srgb);
            }

            let is_black = srgb.to_24bit() == [0, 0, 0];
            assert_eq!(cmyk.k == 100.0, is_black, "key of {} is {}", srgb, cmyk.k);
            if is_black {
                assert_eq!([cmyk.c, cmyk.m, cmyk.y], [0.0, 0.0, 0.0]);
            }

            for (label, hue, chroma) in [("LCh", lch.h, lch.c), ("Oklch", oklch.h, oklch.c)] {
                assert!(
                    (0.0..360.0).contains(&hue),
                    "{} hue {} of {} out of range",
                    label,
                    hue,
                    srgb
                );
                assert!(chroma >= 0.0, "{} chroma {} of {} is negative", label, chroma, srgb);
            }

            for percent in [hsl.s, hsl.l, hsv.s, hsv.v, cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                assert!(
                    (-TOLERANCE..=100.0 + TOLERANCE).contains(&percent),
                    "percentage {} of {} out of range",
                    percent,
                    srgb
                );
            }

        }
    }
}
