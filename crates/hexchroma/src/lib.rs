//! # Hexchroma
//!
//! Hexchroma turns one hashed hexadecimal sRGB color into nine other color
//! models.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Build with the `pyffi` feature enabled to also cover the Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Hexchroma's main abstractions are:
//!
//!   * [`convert`] parses a color such as `#FF5733` and runs it through the
//!     complete conversion pipeline, returning a [`Conversion`] bundle.
//!   * [`Srgb`], [`LinearRgb`], [`Xyz`], [`Lab`], [`Lch`], [`Hsl`], [`Hsv`],
//!     [`Cmyk`], [`Oklab`], and [`Oklch`] are the **immutable value types**
//!     for the ten color models. Each one converts into its successors with
//!     `From`, so the pipeline can also be spelled out step by step.
//!   * [`Model`] enumerates the ten models in report order.
//!   * The [`report`] module renders a conversion as human-readable **cards**,
//!     rounding each model the way a color picker would display it.
//!   * The [`error`] module defines the one and only error,
//!     [`ColorFormatError::InvalidFormat`](error::ColorFormatError).
//!
//! The pipeline has two branches. The CIE branch gamma-decodes sRGB to linear
//! RGB, maps that to XYZ with the D65 white point, and then derives CIELAB and
//! Oklab independently from XYZ, with LCh and Oklch as their polar forms. The
//! cylindrical branch derives HSL, HSV, and CMYK straight from the 8-bit sRGB
//! channels.
//!
//! ```
//! # use hexchroma::{convert, error::ColorFormatError};
//! # fn main() -> Result<(), ColorFormatError> {
//! let red = convert("#FF0000")?;
//! assert_eq!(red.srgb.to_24bit(), [255, 0, 0]);
//! assert_eq!(red.hsl.to_string(), "hsl(0, 100%, 50%)");
//! assert_eq!(red.cmyk.to_string(), "cmyk(0%, 100%, 100%, 0%)");
//! # Ok(())
//! # }
//! ```
//!
//! Spelled out as explicit function composition, the same pipeline reads:
//!
//! ```
//! # use hexchroma::{error::ColorFormatError, Lab, Lch, LinearRgb, Srgb, Xyz};
//! # fn main() -> Result<(), ColorFormatError> {
//! let white: Srgb = "ffffff".parse()?;
//! let lch = Lch::from(Lab::from(Xyz::from(LinearRgb::from(white))));
//! assert!((lch.l - 100.0).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Hexchroma supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives `Serialize` for the value types and the
//!     [`Conversion`] bundle. This feature is disabled by default.
//!   - **`pyffi`** controls hexchroma's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//!
//! ## 3. Logging
//!
//! Hexchroma emits [tracing](https://docs.rs/tracing) events under the
//! `hexchroma` target. Conversions log at debug level, the individual
//! pipeline stages at trace level. Installing a subscriber is up to the
//! application.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
mod pipeline;
pub mod report;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{Model, ModelIterator};
pub use object::{Cmyk, Hsl, Hsv, Lab, Lch, LinearRgb, Oklab, Oklch, Srgb, Xyz};
pub use pipeline::{convert, Conversion};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn hexchroma(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pipeline::py_convert, m)?)?;

    m.add_class::<Conversion>()?;
    m.add_class::<Model>()?;
    m.add_class::<ModelIterator>()?;

    m.add_class::<Srgb>()?;
    m.add_class::<LinearRgb>()?;
    m.add_class::<Xyz>()?;
    m.add_class::<Lab>()?;
    m.add_class::<Lch>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Hsv>()?;
    m.add_class::<Cmyk>()?;
    m.add_class::<Oklab>()?;
    m.add_class::<Oklch>()?;

    m.add_class::<report::Card>()?;

    Ok(())
}
