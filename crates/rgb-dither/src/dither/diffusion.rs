//! Error diffusion passes.
//!
//! Both passes scan the buffer once in row-major order and push the
//! quantization error of each pixel onto neighbors that have not been
//! visited yet, so every pixel is quantized with the error it has
//! accumulated so far. Neighbor writes rely on the buffer's edge policy:
//! error aimed outside the frame is dropped.

use crate::color::Rgb;
use crate::output::PixelBuffer;

use super::quantize::Quantize;

/// Floyd-Steinberg weights, in sixteenths, as `(dx, dy, weight)`.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// The error is divided by 16 once (truncating) and then multiplied by
/// each weight, so small errors vanish entirely.
pub const FLOYD_STEINBERG: [(isize, isize, i32); 4] = [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)];

/// Quantize each pixel and add its full, unscaled error to the pixel on
/// its right. Error never crosses into the next row.
pub fn diffuse_right<Q: Quantize + ?Sized>(buffer: &mut PixelBuffer, target: &Q) {
    let width = buffer.width();
    for i in 0..buffer.len() {
        let (x, y) = ((i % width) as isize, (i / width) as isize);

        let color = buffer.get(x, y);
        let chosen = target.quantize(color);
        let error = chosen.difference(color);

        buffer.add_error(x + 1, y, error);
        buffer.set(x, y, chosen);
    }
}

/// Quantize each pixel and spread its error with the
/// [`FLOYD_STEINBERG`] kernel.
pub fn floyd_steinberg<Q: Quantize + ?Sized>(buffer: &mut PixelBuffer, target: &Q) {
    let width = buffer.width();
    for i in 0..buffer.len() {
        let (x, y) = ((i % width) as isize, (i / width) as isize);

        let color = buffer.get(x, y);
        let chosen = target.quantize(color);
        let error = chosen.difference(color).scale_down(16.0);

        for (dx, dy, weight) in FLOYD_STEINBERG {
            buffer.add_error(x + dx, y + dy, error.scale_up(weight as f64));
        }
        buffer.set(x, y, chosen);
    }
}

/// Quantize each pixel in place with no error term.
pub fn quantize_in_place<Q: Quantize + ?Sized>(buffer: &mut PixelBuffer, target: &Q) {
    let width = buffer.width();
    for i in 0..buffer.len() {
        let (x, y) = ((i % width) as isize, (i / width) as isize);
        let chosen: Rgb = target.quantize(buffer.get(x, y));
        buffer.set(x, y, chosen);
    }
}
