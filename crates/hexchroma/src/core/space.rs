#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported color models.
///
/// # sRGB and Linear RGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) is the root of all conversions.
/// Its three 8-bit channels are gamma-encoded. Linear RGB removes that gamma
/// with sRGB's piecewise transfer function, so that coordinates are
/// proportional to light intensity.
///
/// # CIE Models
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) with the D65
/// white point serves as hub for the perceptual models.
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) and its polar
/// form CIELCh use the D65 reference white as well, not the print-oriented
/// D50.
///
/// # The Oklab Models
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) improve on CIELAB
/// by avoiding visible distortions around the blues. Just like CIELAB, they
/// use one coordinate for lightness and two coordinates for "colorness."
///
/// # Cylindrical and Subtractive Models
///
/// HSL, HSV (also known as HSB), and CMYK are computed straight from the
/// gamma-encoded sRGB channels. They are not perceptually uniform, but they
/// are what most color pickers show.
///
/// | Model   | Polar | Derived from | Reference white |
/// | ------- | :---: | ------------ | --------------- |
/// | sRGB    |       | —            | D65             |
/// | Linear  |       | sRGB         | D65             |
/// | XYZ     |       | Linear RGB   | D65             |
/// | Lab     |       | XYZ          | D65             |
/// | LCh     | ✓     | Lab          | D65             |
/// | HSL     | ✓     | sRGB         | —               |
/// | HSV     | ✓     | sRGB         | —               |
/// | CMYK    |       | sRGB         | —               |
/// | Oklab   |       | XYZ          | D65             |
/// | Oklch   | ✓     | Oklab        | D65             |
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "hexchroma")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Model {
    Srgb,
    LinearRgb,
    Xyz,
    Lab,
    Lch,
    Hsl,
    Hsv,
    Cmyk,
    Oklab,
    Oklch,
}

impl Model {
    /// The number of models.
    pub const COUNT: usize = 10;

    /// All models in report order.
    const ALL: [Model; Model::COUNT] = [
        Model::Srgb,
        Model::LinearRgb,
        Model::Xyz,
        Model::Lab,
        Model::Lch,
        Model::Hsl,
        Model::Hsv,
        Model::Cmyk,
        Model::Oklab,
        Model::Oklch,
    ];

    /// Create a new iterator over all models in report order.
    pub fn all() -> ModelIterator {
        ModelIterator::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Model {
    /// Create a new iterator over all models in report order. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "all")]
    #[staticmethod]
    pub fn py_all() -> ModelIterator {
        ModelIterator::new()
    }

    /// Determine whether this model uses polar coordinates, i.e., has a hue
    /// in degrees.
    pub const fn is_polar(&self) -> bool {
        use Model::*;
        matches!(*self, Lch | Hsl | Hsv | Oklch)
    }

    /// Get this model's human-readable name.
    pub const fn name(&self) -> &'static str {
        use Model::*;

        match self {
            Srgb => "sRGB",
            LinearRgb => "Linear RGB",
            Xyz => "CIE XYZ",
            Lab => "CIE Lab",
            Lch => "CIE LCh",
            Hsl => "HSL",
            Hsv => "HSV/HSB",
            Cmyk => "CMYK",
            Oklab => "Oklab",
            Oklch => "Oklch",
        }
    }

    /// Create a human-readable representation for this model. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An iterator over all color models.
///
/// This iterator yields the models in report order. It is fused, i.e., after
/// returning `None` once, it will keep returning `None`. It also is exact,
/// i.e., its `size_hint()` returns the exact number of remaining items.
#[cfg_attr(feature = "pyffi", pyclass(module = "hexchroma"))]
#[derive(Debug)]
pub struct ModelIterator {
    index: usize,
}

impl ModelIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for ModelIterator {
    type Item = Model;

    fn next(&mut self) -> Option<Self::Item> {
        let item = Model::ALL.get(self.index).copied();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Model::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for ModelIterator {
    fn len(&self) -> usize {
        Model::COUNT - self.index
    }
}

impl std::iter::FusedIterator for ModelIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl ModelIterator {
    /// Get the number of remaining models. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next model. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Model> {
        slf.next()
    }
}
