//! Utility module with hexchroma's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Only the hexadecimal parser can fail. Every other stage of the conversion
/// pipeline is a total function over its inputs, so this enumeration has
/// exactly one variant. Malformed input does not become well-formed by trying
/// again, hence the error carries no further state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ColorFormatError {
    /// A color format that is not exactly six hexadecimal digits with an
    /// optional leading `#`. For example, `#123` uses the unsupported
    /// shorthand, `#12345Z` contains a character that is not a hexadecimal
    /// digit, and ` #123456` has leading white space.
    #[error("color format should be 6 hexadecimal digits with optional leading '#'")]
    InvalidFormat,
}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::ColorFormatError;

    #[test]
    fn test_message() {
        assert_eq!(
            ColorFormatError::InvalidFormat.to_string(),
            "color format should be 6 hexadecimal digits with optional leading '#'"
        );

        let error: Box<dyn std::error::Error> = Box::new(ColorFormatError::InvalidFormat);
        assert!(error.source().is_none());
    }
}
