//! Source frame and working buffer.

use crate::api::DitherError;
use crate::color::Rgb;

/// An immutable, row-major grid of opaque colors.
///
/// Produced once by the image loader and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl SourceImage {
    /// Wrap a row-major pixel list.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::DimensionMismatch`] if `pixels.len()` is not
    /// `width * height`, or [`DitherError::ChannelOutOfRange`] for the first
    /// pixel with a channel outside `0..=255`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Self, DitherError> {
        if pixels.len() != width * height {
            return Err(DitherError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        if let Some(index) = pixels.iter().position(|c| !c.is_in_range()) {
            return Err(DitherError::ChannelOutOfRange {
                index,
                color: pixels[index],
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::DimensionMismatch`] if `bytes.len()` is not
    /// `width * height * 3`.
    pub fn from_rgb8(bytes: &[u8], width: usize, height: usize) -> Result<Self, DitherError> {
        if bytes.len() != width * height * 3 {
            return Err(DitherError::DimensionMismatch {
                width,
                height,
                len: bytes.len() / 3,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::from_bytes([px[0], px[1], px[2]]))
            .collect();
        Self::new(pixels, width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

/// The mutable working grid a dithering pass rewrites in place.
///
/// Dimensions are fixed to those of the source it was created from.
/// Coordinates are signed so that passes can address neighbors such as
/// `x - 1` or `x + 1` without checking the edges first:
///
/// - [`get()`](PixelBuffer::get) outside the grid returns black
/// - [`set()`](PixelBuffer::set) outside the grid does nothing
///
/// # Example
///
/// ```
/// use rgb_dither::{PixelBuffer, Rgb, SourceImage};
///
/// let source = SourceImage::new(vec![Rgb::WHITE; 4], 2, 2).unwrap();
/// let mut buffer = PixelBuffer::from_source(&source);
///
/// buffer.set(2, 0, Rgb::BLACK); // right of the last column: ignored
/// assert_eq!(buffer.get(1, 0), Rgb::WHITE);
/// assert_eq!(buffer.get(-1, 0), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer holding a copy of `source`.
    pub fn from_source(source: &SourceImage) -> Self {
        Self {
            width: source.width,
            height: source.height,
            pixels: source.pixels.clone(),
        }
    }

    /// Overwrite every pixel with the corresponding source pixel.
    ///
    /// `source` must have the dimensions this buffer was created with.
    pub fn reset_from(&mut self, source: &SourceImage) {
        debug_assert_eq!(
            (self.width, self.height),
            (source.width, source.height),
            "buffer dimensions are fixed to the source image"
        );
        self.pixels.copy_from_slice(&source.pixels);
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Color at `(x, y)`, or black outside the grid.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> Rgb {
        match self.index(x, y) {
            Some(i) => self.pixels[i],
            None => Rgb::BLACK,
        }
    }

    /// Write `color` at `(x, y)`; silently ignored outside the grid.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Add `error` to the pixel at `(x, y)` with per-channel saturation.
    ///
    /// Outside the grid this reads black and discards the write, so it is
    /// a no-op.
    #[inline]
    pub fn add_error(&mut self, x: isize, y: isize, error: Rgb) {
        let current = self.get(x, y);
        self.set(x, y, current.saturating_add(error));
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed `[R, G, B, ...]` bytes, `width * height * 3` long.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for &px in &self.pixels {
            rgb.extend_from_slice(&px.to_bytes());
        }
        rgb
    }
}
