//! Pixel storage for the dithering pipeline.
//!
//! - [`SourceImage`]: the immutable decoded frame every pass starts from
//! - [`PixelBuffer`]: the mutable working grid a pass rewrites in place,
//!   with silent out-of-bounds reads and writes

mod pixel_buffer;

pub use pixel_buffer::{PixelBuffer, SourceImage};
