//! The color-reduction step shared by every pass.

use crate::color::Rgb;
use crate::palette::Palette;

/// Reduces one color to an output color.
///
/// The passes in this module are generic over the target so that the
/// two-level and N-color variants share one scan loop each.
pub trait Quantize {
    fn quantize(&self, color: Rgb) -> Rgb;
}

/// Two-level luminance threshold: exactly black or white.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monochrome;

impl Quantize for Monochrome {
    #[inline]
    fn quantize(&self, color: Rgb) -> Rgb {
        color.threshold()
    }
}

impl Quantize for Palette {
    #[inline]
    fn quantize(&self, color: Rgb) -> Rgb {
        self.nearest(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monochrome_two_levels() {
        for v in (0..=255).step_by(5) {
            let out = Monochrome.quantize(Rgb::new(v, v / 2, 255 - v));
            assert!(out == Rgb::BLACK || out == Rgb::WHITE);
        }
    }

    #[test]
    fn test_palette_quantize_is_nearest() {
        let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert_eq!(palette.quantize(Rgb::new(10, 10, 10)), Rgb::BLACK);
        assert_eq!(palette.quantize(Rgb::new(200, 200, 200)), Rgb::WHITE);
    }
}
