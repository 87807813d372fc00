//! rgb-dither: classic dithering of RGB frames
//!
//! This library reduces a full-color frame to either two levels (black and
//! white) or to a small fixed palette, using thresholding, error diffusion
//! or ordered dithering. All arithmetic is integer per-channel math with
//! explicit truncation, so results are reproducible bit for bit.
//!
//! # Quick Start
//!
//! The [`DitherSession`] driver is the primary entry point:
//!
//! ```
//! use rgb_dither::{Algorithm, DitherSession, Palette, Rgb, SourceImage};
//!
//! let pixels = vec![Rgb::new(128, 64, 32); 16];
//! let source = SourceImage::new(pixels, 4, 4).unwrap();
//!
//! let mut session = DitherSession::new(source, Palette::default());
//! session.select(Algorithm::PaletteFloydSteinberg);
//!
//! let frame = session.render();
//! assert!(frame.pixels().iter().all(|&c| Palette::default().contains(c)));
//! ```
//!
//! # Algorithms
//!
//! | Algorithm | Output | Mechanism |
//! |-----------|--------|-----------|
//! | `normal` | source | identity |
//! | `monochrome` | 2 colors | luminance threshold |
//! | `monochrome 1D error diffuse` | 2 colors | threshold, full error to the right |
//! | `monochrome floyd-steinberg` | 2 colors | threshold, 7/3/5/1 sixteenths |
//! | `monochrome ordered 4x4` / `8x8` / `halftone` | 2 colors | matrix perturbation, threshold |
//! | `palette` | palette | nearest color |
//! | `palette 1D error diffuse` | palette | nearest color, full error to the right |
//! | `palette floyd-steinberg` | palette | nearest color, 7/3/5/1 sixteenths |
//! | `palette ordered 4x4` / `8x8` / `halftone` | palette | matrix perturbation, nearest color |
//!
//! Two-level output is decided by Rec. 709 luminance
//! `0.2126 R + 0.7152 G + 0.0722 B > 128`. Nearest color is the smallest
//! squared RGB distance, first entry winning ties.
//!
//! # Edge Handling
//!
//! [`PixelBuffer`] reads outside the frame return black and writes outside
//! the frame are dropped. Error diffusion relies on this instead of
//! checking edges: error pushed past the right or bottom edge simply
//! disappears.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{DitherError, DitherSession, Presenter};
pub use color::Rgb;
pub use dither::{apply, Algorithm, ParseAlgorithmError, ThresholdMatrix};
pub use output::{PixelBuffer, SourceImage};
pub use palette::{nearest, Palette, PaletteError};
