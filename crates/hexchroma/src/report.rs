//! Human-readable reports for conversions.
//!
//! A report consists of one [`Card`] per color model. Each card shows the
//! model's coordinates the way a color picker would: sRGB as 8-bit channels,
//! percentages, and hexadecimal; linear RGB, XYZ, Oklab, and Oklch with six
//! digits past the decimal; CIELAB and CIELCh with two digits; HSL, HSV, and
//! CMYK as whole numbers. Whole numbers round half-way cases towards
//! positive infinity, so that `10.5` becomes `11` and `-10.5` becomes `-10`.
//!
//! ```
//! # use hexchroma::{convert, error::ColorFormatError, Model};
//! # fn main() -> Result<(), ColorFormatError> {
//! let cards = convert("#FF5733")?.cards();
//! assert_eq!(cards.len(), Model::COUNT);
//! assert_eq!(cards[5].model, Model::Hsl);
//! assert_eq!(cards[5].lines[3], "hsla(11, 100%, 60%, 1)");
//! # Ok(())
//! # }
//! ```
//!
//! The module also decides whether terminal applications should show a
//! color swatch, based on the same environment variables that other command
//! line tools honor.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::round_half_up;
use crate::util::{Env, Environment};
use crate::{Conversion, Float, Model};

/// A number displayed with a fixed number of digits past the decimal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fixed(pub Float, pub usize);

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", self.1, self.0)
    }
}

/// A number displayed as a whole number, after rounding half-way cases up.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Whole(pub Float);

impl std::fmt::Display for Whole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}", round_half_up(self.0))
    }
}

// ====================================================================================================================

/// One model's block of display lines.
///
/// The card's title is the model's name. Its display shows the title on the
/// first line, followed by the lines indented by two spaces.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "hexchroma")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub model: Model,
    pub lines: Vec<String>,
}

impl Card {
    /// Create the card for the given model of the conversion.
    pub fn of(conversion: &Conversion, model: Model) -> Self {
        let lines = match model {
            Model::Srgb => {
                let srgb = conversion.srgb;
                let percent = |c: u8| Whole(c as Float / 2.55);
                vec![
                    format!("R: {}, G: {}, B: {}", srgb.r, srgb.g, srgb.b),
                    format!(
                        "Normalized: rgb({}%, {}%, {}%)",
                        percent(srgb.r),
                        percent(srgb.g),
                        percent(srgb.b)
                    ),
                    format!("Hex: {}", srgb),
                ]
            }
            Model::LinearRgb => {
                let c = conversion.linear_rgb;
                fixed(&[("R", c.r), ("G", c.g), ("B", c.b)], 6)
            }
            Model::Xyz => {
                let c = conversion.xyz;
                fixed(&[("X", c.x), ("Y", c.y), ("Z", c.z)], 6)
            }
            Model::Lab => {
                let c = conversion.lab;
                fixed(&[("L*", c.l), ("a*", c.a), ("b*", c.b)], 2)
            }
            Model::Lch => {
                let c = conversion.lch;
                fixed(&[("L*", c.l), ("C*", c.c), ("h°", c.h)], 2)
            }
            Model::Hsl => {
                let c = conversion.hsl;
                let (h, s, l) = (Whole(c.h), Whole(c.s), Whole(c.l));
                vec![
                    format!("H: {}°", h),
                    format!("S: {}%", s),
                    format!("L: {}%", l),
                    format!("hsla({}, {}%, {}%, 1)", h, s, l),
                ]
            }
            Model::Hsv => {
                let c = conversion.hsv;
                vec![
                    format!("H: {}°", Whole(c.h)),
                    format!("S: {}%", Whole(c.s)),
                    format!("V: {}%", Whole(c.v)),
                ]
            }
            Model::Cmyk => {
                let c = conversion.cmyk;
                [("C", c.c), ("M", c.m), ("Y", c.y), ("K", c.k)]
                    .iter()
                    .map(|(label, value)| format!("{}: {}%", label, Whole(*value)))
                    .collect()
            }
            Model::Oklab => {
                let c = conversion.oklab;
                fixed(&[("L", c.l), ("a", c.a), ("b", c.b)], 6)
            }
            Model::Oklch => {
                let c = conversion.oklch;
                let mut lines = fixed(&[("L", c.l), ("C", c.c)], 6);
                lines.push(format!("h: {}°", Fixed(c.h, 2)));
                lines
            }
        };

        Self { model, lines }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Card {
    /// Render this card as text. <i class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

fn fixed(labelled: &[(&str, Float)], digits: usize) -> Vec<String> {
    labelled
        .iter()
        .map(|(label, value)| format!("{}: {}", label, Fixed(*value, digits)))
        .collect()
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model.name())?;
        for line in &self.lines {
            write!(f, "\n  {}", line)?;
        }
        Ok(())
    }
}

// ====================================================================================================================

/// Determine whether to show a color swatch.
///
/// The swatch uses 24-bit ANSI escape sequences. This function returns
/// `false` if the `NO_COLOR` environment variable is set to a non-empty value
/// and `true` if `FORCE_COLOR` is. Otherwise, a swatch is shown only on a
/// terminal that is not `dumb`. The caller determines whether output goes to
/// a terminal.
pub fn swatch_from_environment(has_tty: bool) -> bool {
    swatch_from(&Env, has_tty)
}

pub(crate) fn swatch_from(env: &impl Environment, has_tty: bool) -> bool {
    if env.is_non_empty("NO_COLOR") {
        tracing::debug!("NO_COLOR disables swatch");
        false
    } else if env.is_non_empty("FORCE_COLOR") {
        tracing::debug!("FORCE_COLOR enables swatch");
        true
    } else {
        has_tty && !env.has_value("TERM", "dumb")
    }
}

// ====================================================================================================================
