//! Ordered (threshold matrix) dithering.

use crate::output::PixelBuffer;

use super::matrix::ThresholdMatrix;
use super::quantize::Quantize;

/// Perturb each pixel by its tiled matrix entry, then quantize.
///
/// The pixel is scaled down by the matrix divisor and back up by the
/// entry at `(y mod size, x mod size)`, both steps truncating. No error is
/// carried between pixels, so the output at a coordinate depends only on
/// the source color there and on the coordinate modulo the matrix size.
///
/// With [`FLAT`](super::FLAT) both scale steps are the identity and this
/// reduces to plain per-pixel quantization.
pub fn ordered<Q: Quantize + ?Sized>(buffer: &mut PixelBuffer, matrix: &ThresholdMatrix, target: &Q) {
    let width = buffer.width();
    for i in 0..buffer.len() {
        let (x, y) = (i % width, i / width);
        let (sx, sy) = (x as isize, y as isize);

        let perturbed = buffer
            .get(sx, sy)
            .scale_down(f64::from(matrix.divisor()))
            .scale_up(matrix.at(x, y) as f64);

        buffer.set(sx, sy, target.quantize(perturbed));
    }
}
