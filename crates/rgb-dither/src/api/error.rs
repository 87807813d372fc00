//! Unified error type for the rgb-dither public API.

use crate::color::Rgb;
use crate::dither::ParseAlgorithmError;
use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the rgb-dither public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use rgb_dither::{DitherError, Palette, Rgb};
///
/// fn two_tone() -> Result<Palette, DitherError> {
///     Ok(Palette::new(&[Rgb::BLACK, Rgb::WHITE])?)
/// }
/// # assert!(two_tone().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// Invalid palette configuration
    Palette(PaletteError),
    /// Pixel data does not match the stated dimensions
    DimensionMismatch {
        /// Stated width
        width: usize,
        /// Stated height
        height: usize,
        /// Number of pixels actually supplied
        len: usize,
    },
    /// A source pixel has a channel outside `0..=255`
    ChannelOutOfRange {
        /// Row-major index of the first offending pixel
        index: usize,
        /// Its raw value
        color: Rgb,
    },
    /// Unknown algorithm name
    ParseAlgorithm(ParseAlgorithmError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::DimensionMismatch { width, height, len } => write!(
                f,
                "pixel count {} does not match {}x{} image",
                len, width, height
            ),
            DitherError::ChannelOutOfRange { index, color } => write!(
                f,
                "pixel {} has channel values ({}, {}, {}) outside 0..=255",
                index, color.r, color.g, color.b
            ),
            DitherError::ParseAlgorithm(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::ParseAlgorithm(err) => Some(err),
            DitherError::DimensionMismatch { .. } | DitherError::ChannelOutOfRange { .. } => None,
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

impl From<ParseAlgorithmError> for DitherError {
    fn from(err: ParseAlgorithmError) -> Self {
        DitherError::ParseAlgorithm(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_and_source() {
        let err = DitherError::from(PaletteError::EmptyPalette);
        assert_eq!(err.to_string(), "palette error: palette cannot be empty");
        assert!(err.source().is_some());

        let err = DitherError::DimensionMismatch {
            width: 2,
            height: 3,
            len: 5,
        };
        assert_eq!(err.to_string(), "pixel count 5 does not match 2x3 image");
        assert!(err.source().is_none());

        let err = DitherError::ChannelOutOfRange {
            index: 4,
            color: Rgb::new(300, 0, -2),
        };
        assert_eq!(
            err.to_string(),
            "pixel 4 has channel values (300, 0, -2) outside 0..=255"
        );
        assert!(err.source().is_none());
    }
}
