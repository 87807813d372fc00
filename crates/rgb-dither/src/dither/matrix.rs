//! Threshold matrices for ordered dithering.
//!
//! Each matrix is tiled across the frame by coordinate modulo. A pass
//! first divides the pixel by the matrix's [`divisor`](ThresholdMatrix::divisor)
//! and then multiplies it by the tiled entry, so the product sweeps from
//! near zero up to roughly 1.5x the original across one tile.

/// An immutable square grid of threshold multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdMatrix {
    size: usize,
    divisor: u8,
    values: &'static [u8],
}

impl ThresholdMatrix {
    /// Side length of the square.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Scale-down constant applied to a pixel before multiplying.
    #[inline]
    pub const fn divisor(&self) -> u8 {
        self.divisor
    }

    /// Row-major matrix entries.
    #[inline]
    pub const fn values(&self) -> &'static [u8] {
        self.values
    }

    /// The entry at `(y mod size, x mod size)`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.values[(y % self.size) * self.size + (x % self.size)]
    }
}

/// The implicit 1×1 matrix: scale by one, i.e. a plain threshold.
pub const FLAT: ThresholdMatrix = ThresholdMatrix {
    size: 1,
    divisor: 1,
    values: &[1],
};

/// 4×4 Bayer dispersed-dot matrix, entries 1..=16.
#[rustfmt::skip]
pub const BAYER_4X4: ThresholdMatrix = ThresholdMatrix {
    size: 4,
    divisor: 10,
    values: &[
         1,  9,  3, 11,
        13,  5, 15,  7,
         4, 12,  2, 10,
        16,  8, 14,  6,
    ],
};

/// 8×8 Bayer dispersed-dot matrix, entries 1..=64.
#[rustfmt::skip]
pub const BAYER_8X8: ThresholdMatrix = ThresholdMatrix {
    size: 8,
    divisor: 17,
    values: &[
         1, 49, 13, 61,  4, 52, 16, 64,
        33, 17, 45, 29, 36, 20, 48, 32,
         9, 57,  5, 53, 12, 60,  8, 56,
        41, 25, 37, 21, 44, 28, 40, 24,
         3, 51, 15, 63,  2, 50, 14, 62,
        35, 19, 47, 31, 34, 18, 46, 30,
        11, 59,  7, 55, 10, 58,  6, 54,
        43, 27, 39, 23, 42, 26, 38, 22,
    ],
};

/// 8×8 clustered-dot halftone matrix, entries 0..=63.
///
/// Same shape and divisor as [`BAYER_8X8`]; only the ordering differs,
/// which grows dots from two centers per tile instead of scattering them.
#[rustfmt::skip]
pub const HALFTONE_8X8: ThresholdMatrix = ThresholdMatrix {
    size: 8,
    divisor: 17,
    values: &[
        24, 10, 12, 26, 35, 47, 49, 37,
         8,  0,  2, 14, 45, 59, 61, 51,
        22,  6,  4, 16, 43, 57, 63, 53,
        30, 20, 18, 28, 33, 41, 55, 39,
        34, 46, 48, 36, 25, 11, 13, 27,
        44, 58, 60, 50,  9,  1,  3, 15,
        42, 56, 62, 52, 23,  7,  5, 17,
        32, 40, 54, 38, 31, 21, 19, 29,
    ],
};
