//! Palette types and nearest-color search
//!
//! This module provides the ordered [`Palette`] used by the N-color
//! dithering passes, the built-in 16-color default, and the error type
//! for invalid palette configuration.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{nearest, Palette, DEFAULT_COLORS};
