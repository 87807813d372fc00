//! DitherSession -- the driver that owns the frame, palette and selection.
//!
//! A session replaces ambient global state: it is constructed once with the
//! decoded source image and the palette, and every algorithm run goes
//! through it. Because [`render()`](DitherSession::render) takes
//! `&mut self`, two runs can never interleave on the same buffer.

use crate::color::Rgb;
use crate::dither::{apply, Algorithm};
use crate::output::{PixelBuffer, SourceImage};
use crate::palette::Palette;

use super::DitherError;

/// Receives finished frames for display.
///
/// Implemented outside the engine (file writers, windows, terminals). The
/// label to show is `algorithm.name()`.
pub trait Presenter {
    type Error;

    fn present(&mut self, algorithm: Algorithm, frame: &PixelBuffer) -> Result<(), Self::Error>;
}

/// Selection state plus the working buffer for one source image.
///
/// # Example
///
/// ```
/// use rgb_dither::{Algorithm, DitherSession, Palette, Rgb, SourceImage};
///
/// let source = SourceImage::new(vec![Rgb::new(10, 10, 10)], 1, 1).unwrap();
/// let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// let mut session = DitherSession::new(source, palette);
///
/// assert_eq!(session.current(), Algorithm::Normal);
/// assert_eq!(session.render().get(0, 0), Rgb::new(10, 10, 10));
///
/// session.select(Algorithm::Palette);
/// assert_eq!(session.render().get(0, 0), Rgb::BLACK);
///
/// // Each run starts again from the source
/// session.select(Algorithm::Normal);
/// assert_eq!(session.render().get(0, 0), Rgb::new(10, 10, 10));
/// ```
#[derive(Debug, Clone)]
pub struct DitherSession {
    source: SourceImage,
    buffer: PixelBuffer,
    palette: Palette,
    current: Algorithm,
}

impl DitherSession {
    /// Start a session at [`Algorithm::Normal`].
    pub fn new(source: SourceImage, palette: Palette) -> Self {
        let buffer = PixelBuffer::from_source(&source);
        Self {
            source,
            buffer,
            palette,
            current: Algorithm::default(),
        }
    }

    /// Start a session from an unvalidated color list.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::Palette`] if `colors` is empty. Nothing is
    /// allocated for the frame in that case.
    pub fn from_colors(source: SourceImage, colors: &[Rgb]) -> Result<Self, DitherError> {
        let palette = Palette::new(colors)?;
        Ok(Self::new(source, palette))
    }

    /// Builder-style variant of [`select()`](Self::select).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.current = algorithm;
        self
    }

    #[inline]
    pub fn current(&self) -> Algorithm {
        self.current
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// The buffer as left by the last run.
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        self.current = algorithm;
    }

    /// Advance the selection, wrapping to the first algorithm.
    pub fn next(&mut self) -> Algorithm {
        self.current = self.current.next();
        self.current
    }

    /// Step the selection back, wrapping to the last algorithm.
    pub fn previous(&mut self) -> Algorithm {
        self.current = self.current.previous();
        self.current
    }

    /// Reset the buffer from the source and run the selected algorithm
    /// over the whole frame.
    pub fn render(&mut self) -> &PixelBuffer {
        self.buffer.reset_from(&self.source);
        apply(self.current, &mut self.buffer, &self.palette);
        &self.buffer
    }

    /// Select `algorithm` and [`render()`](Self::render) it.
    pub fn render_with(&mut self, algorithm: Algorithm) -> &PixelBuffer {
        self.select(algorithm);
        self.render()
    }

    /// Render the selected algorithm and hand the frame to `presenter`.
    pub fn show<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<(), P::Error> {
        let algorithm = self.current;
        let frame = self.render();
        presenter.present(algorithm, frame)
    }
}
