//! Color triples and the integer arithmetic used by every dithering pass.
//!
//! All channel math happens on [`Rgb`], whose channels are plain `i32`
//! values. Intermediate results (quantization errors, ordered-dither
//! products) may leave the 0..=255 range; only
//! [`Rgb::saturating_add()`] clamps, and it is the operation used whenever
//! a value is written back into a [`PixelBuffer`](crate::PixelBuffer).
//!
//! # Example
//!
//! ```
//! use rgb_dither::Rgb;
//!
//! let pixel = Rgb::new(200, 120, 40);
//! let chosen = Rgb::WHITE;
//!
//! // Error is signed and unclamped
//! let error = chosen.difference(pixel);
//! assert_eq!(error, Rgb::new(-55, -135, -215));
//!
//! // Writing it back saturates
//! assert_eq!(Rgb::new(10, 200, 255).saturating_add(error), Rgb::new(0, 65, 40));
//! ```

mod rgb;

pub use rgb::{Rgb, LUMINANCE_THRESHOLD};
