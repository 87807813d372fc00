//! The dithering algorithm family.
//!
//! Thirteen named algorithms are exposed through [`Algorithm`]. They are
//! built from four pass shapes, each generic over a [`Quantize`] target
//! (two-level [`Monochrome`] or an N-color [`Palette`]):
//!
//! | Pass | Algorithms |
//! |------|------------|
//! | plain quantization | `monochrome`, `palette` |
//! | [`diffuse_right`] | `... 1D error diffuse` |
//! | [`floyd_steinberg`] | `... floyd-steinberg` |
//! | [`ordered`] | `... ordered 4x4`, `... ordered 8x8`, `... ordered halftone` |
//!
//! plus `normal`, which leaves the buffer untouched.
//!
//! Every pass visits each pixel exactly once in row-major order and
//! rewrites the [`PixelBuffer`] in place. The in-place update is what makes
//! error diffusion work: error written ahead of the scan is read back when
//! the scan reaches that pixel.
//!
//! # Example
//!
//! ```
//! use rgb_dither::{apply, Algorithm, Palette, PixelBuffer, Rgb, SourceImage};
//!
//! let source = SourceImage::new(vec![Rgb::new(200, 200, 200), Rgb::new(50, 50, 50)], 2, 1).unwrap();
//! let mut buffer = PixelBuffer::from_source(&source);
//!
//! apply(Algorithm::Monochrome, &mut buffer, &Palette::default());
//! assert_eq!(buffer.pixels(), &[Rgb::WHITE, Rgb::BLACK]);
//! ```

mod diffusion;
mod matrix;
mod ordered;
mod quantize;

pub use diffusion::{diffuse_right, floyd_steinberg, quantize_in_place, FLOYD_STEINBERG};
pub use matrix::{ThresholdMatrix, BAYER_4X4, BAYER_8X8, FLAT, HALFTONE_8X8};
pub use ordered::ordered;
pub use quantize::{Monochrome, Quantize};

use std::fmt;
use std::str::FromStr;

use crate::output::PixelBuffer;
use crate::palette::Palette;

/// One of the thirteen selectable dithering algorithms.
///
/// Variants are listed in selection order; [`next()`](Algorithm::next) and
/// [`previous()`](Algorithm::previous) cycle through them and wrap at both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Unmodified copy of the source.
    #[default]
    Normal,
    /// Luminance threshold to black and white.
    Monochrome,
    /// Threshold, full error carried to the right neighbor.
    MonochromeDiffuse1D,
    /// Threshold with Floyd-Steinberg error diffusion.
    MonochromeFloydSteinberg,
    /// Threshold after 4×4 Bayer perturbation.
    MonochromeOrdered4x4,
    /// Threshold after 8×8 Bayer perturbation.
    MonochromeOrdered8x8,
    /// Threshold after 8×8 clustered-dot perturbation.
    MonochromeOrderedHalftone,
    /// Nearest palette color.
    Palette,
    /// Nearest palette color, full error carried to the right neighbor.
    PaletteDiffuse1D,
    /// Nearest palette color with Floyd-Steinberg error diffusion.
    PaletteFloydSteinberg,
    /// Nearest palette color after 4×4 Bayer perturbation.
    PaletteOrdered4x4,
    /// Nearest palette color after 8×8 Bayer perturbation.
    PaletteOrdered8x8,
    /// Nearest palette color after 8×8 clustered-dot perturbation.
    PaletteOrderedHalftone,
}

impl Algorithm {
    /// All algorithms in selection order.
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Normal,
        Algorithm::Monochrome,
        Algorithm::MonochromeDiffuse1D,
        Algorithm::MonochromeFloydSteinberg,
        Algorithm::MonochromeOrdered4x4,
        Algorithm::MonochromeOrdered8x8,
        Algorithm::MonochromeOrderedHalftone,
        Algorithm::Palette,
        Algorithm::PaletteDiffuse1D,
        Algorithm::PaletteFloydSteinberg,
        Algorithm::PaletteOrdered4x4,
        Algorithm::PaletteOrdered8x8,
        Algorithm::PaletteOrderedHalftone,
    ];

    /// Display label, e.g. `"palette floyd-steinberg"`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Normal => "normal",
            Algorithm::Monochrome => "monochrome",
            Algorithm::MonochromeDiffuse1D => "monochrome 1D error diffuse",
            Algorithm::MonochromeFloydSteinberg => "monochrome floyd-steinberg",
            Algorithm::MonochromeOrdered4x4 => "monochrome ordered 4x4",
            Algorithm::MonochromeOrdered8x8 => "monochrome ordered 8x8",
            Algorithm::MonochromeOrderedHalftone => "monochrome ordered halftone",
            Algorithm::Palette => "palette",
            Algorithm::PaletteDiffuse1D => "palette 1D error diffuse",
            Algorithm::PaletteFloydSteinberg => "palette floyd-steinberg",
            Algorithm::PaletteOrdered4x4 => "palette ordered 4x4",
            Algorithm::PaletteOrdered8x8 => "palette ordered 8x8",
            Algorithm::PaletteOrderedHalftone => "palette ordered halftone",
        }
    }

    /// Position in [`Algorithm::ALL`].
    pub fn index(self) -> usize {
        // Variants are declared in selection order
        self as usize
    }

    /// The following algorithm, wrapping from the last to `normal`.
    pub fn next(self) -> Algorithm {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding algorithm, wrapping from `normal` to the last.
    pub fn previous(self) -> Algorithm {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Returns true for the variants that output only black and white.
    pub fn is_monochrome(self) -> bool {
        matches!(
            self,
            Algorithm::Monochrome
                | Algorithm::MonochromeDiffuse1D
                | Algorithm::MonochromeFloydSteinberg
                | Algorithm::MonochromeOrdered4x4
                | Algorithm::MonochromeOrdered8x8
                | Algorithm::MonochromeOrderedHalftone
        )
    }

    /// Returns true for the variants whose output is drawn from the palette.
    pub fn uses_palette(self) -> bool {
        !self.is_monochrome() && self != Algorithm::Normal
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dithering algorithm: {:?}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parse a display label. Case-insensitive; `-`, `_` and runs of
    /// whitespace are interchangeable, so `palette-ordered-4x4` and
    /// `Palette Ordered 4x4` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|a| normalize(a.name()) == key)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `algorithm` over `buffer` in place.
///
/// The buffer should already hold the source frame (see
/// [`PixelBuffer::reset_from()`]). `palette` is only read by the palette
/// variants.
pub fn apply(algorithm: Algorithm, buffer: &mut PixelBuffer, palette: &Palette) {
    match algorithm {
        Algorithm::Normal => {}
        Algorithm::Monochrome => quantize_in_place(buffer, &Monochrome),
        Algorithm::MonochromeDiffuse1D => diffuse_right(buffer, &Monochrome),
        Algorithm::MonochromeFloydSteinberg => floyd_steinberg(buffer, &Monochrome),
        Algorithm::MonochromeOrdered4x4 => ordered(buffer, &BAYER_4X4, &Monochrome),
        Algorithm::MonochromeOrdered8x8 => ordered(buffer, &BAYER_8X8, &Monochrome),
        Algorithm::MonochromeOrderedHalftone => ordered(buffer, &HALFTONE_8X8, &Monochrome),
        Algorithm::Palette => quantize_in_place(buffer, palette),
        Algorithm::PaletteDiffuse1D => diffuse_right(buffer, palette),
        Algorithm::PaletteFloydSteinberg => floyd_steinberg(buffer, palette),
        Algorithm::PaletteOrdered4x4 => ordered(buffer, &BAYER_4X4, palette),
        Algorithm::PaletteOrdered8x8 => ordered(buffer, &BAYER_8X8, palette),
        Algorithm::PaletteOrderedHalftone => ordered(buffer, &HALFTONE_8X8, palette),
    }
}
