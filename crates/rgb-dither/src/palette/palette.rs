//! Ordered color palette with first-wins nearest-color matching.

use super::error::PaletteError;
use crate::color::Rgb;

/// The built-in 16-color palette, in lookup order.
///
/// black, maroon, red, magenta, teal, green, lime, cyan, navy, purple,
/// blue, silver, gray, olive, yellow, white.
pub const DEFAULT_COLORS: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(128, 0, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 128, 128),
    Rgb::new(0, 128, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 128),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 0, 255),
    Rgb::new(192, 192, 192),
    Rgb::new(128, 128, 128),
    Rgb::new(128, 128, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 255, 255),
];

/// An ordered, non-empty list of colors.
///
/// Order only matters when two entries are equally close to a color: the
/// entry with the lower index wins. Duplicate entries are allowed (a
/// palette file with several unparsable lines legitimately produces
/// several blacks).
///
/// # Example
///
/// ```
/// use rgb_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb::new(10, 10, 10)), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from an ordered color list.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        Self::from_vec(colors.to_vec())
    }

    /// Create a palette taking ownership of the color list.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn from_vec(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// All colors in lookup order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns true if `color` is an entry of this palette.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Find the palette entry closest to `color` by squared distance.
    ///
    /// Returns `(index, distance_sq)`. On ties the lowest index is kept.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, i64) {
        // Linear scan; palettes are small
        let mut best_idx = 0;
        let mut best_dist = i64::MAX;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// The palette color closest to `color`.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        let (idx, _) = self.find_nearest(color);
        self.colors[idx]
    }
}

impl Default for Palette {
    /// The 16-color [`DEFAULT_COLORS`] palette.
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

/// Closest entry of an arbitrary color slice.
///
/// Same search and tie-break as [`Palette::nearest()`], for callers holding
/// an unvalidated color list.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
///
/// ```
/// use rgb_dither::{nearest, PaletteError, Rgb};
///
/// assert_eq!(nearest(Rgb::new(10, 10, 10), &[Rgb::BLACK, Rgb::WHITE]), Ok(Rgb::BLACK));
/// assert_eq!(nearest(Rgb::BLACK, &[]), Err(PaletteError::EmptyPalette));
/// ```
pub fn nearest(color: Rgb, colors: &[Rgb]) -> Result<Rgb, PaletteError> {
    let mut best: Option<(Rgb, i64)> = None;
    for &candidate in colors {
        let dist = color.distance_sq(candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(c, _)| c).ok_or(PaletteError::EmptyPalette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_empty_error() {
        assert_eq!(Palette::new(&[]), Err(PaletteError::EmptyPalette));
        assert_eq!(Palette::from_vec(Vec::new()), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_default_palette_order() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.get(0), Some(Rgb::BLACK));
        assert_eq!(palette.get(1), Some(Rgb::new(128, 0, 0)));
        assert_eq!(palette.get(11), Some(Rgb::new(192, 192, 192)));
        assert_eq!(palette.get(15), Some(Rgb::WHITE));
        assert_eq!(palette.get(16), None);
    }

    #[test]
    fn test_duplicates_allowed() {
        let palette = Palette::new(&[Rgb::BLACK, Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = Palette::default();
        for (i, &c) in DEFAULT_COLORS.iter().enumerate() {
            assert_eq!(palette.find_nearest(c), (i, 0));
        }
    }

    #[test]
    fn test_find_nearest_tie_keeps_first() {
        // (100, 0, 0) is 100 away from both entries on one channel
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(200, 0, 0)]).unwrap();
        assert_eq!(palette.find_nearest(Rgb::new(100, 0, 0)), (0, 10_000));

        let swapped = Palette::new(&[Rgb::new(200, 0, 0), Rgb::new(0, 0, 0)]).unwrap();
        assert_eq!(swapped.nearest(Rgb::new(100, 0, 0)), Rgb::new(200, 0, 0));
    }

    #[test]
    fn test_find_nearest_duplicate_entries_first_index() {
        let palette = Palette::new(&[Rgb::WHITE, Rgb::BLACK, Rgb::BLACK]).unwrap();
        assert_eq!(palette.find_nearest(Rgb::new(5, 5, 5)).0, 1);
    }

    #[test]
    fn test_nearest_out_of_range_input() {
        // Ordered dithering feeds values above 255
        let palette = Palette::default();
        assert_eq!(palette.nearest(Rgb::new(400, 400, 400)), Rgb::WHITE);
        assert_eq!(palette.nearest(Rgb::new(-40, -40, -40)), Rgb::BLACK);
    }

    #[test]
    fn test_free_nearest_matches_palette() {
        let palette = Palette::default();
        for c in [
            Rgb::new(10, 200, 30),
            Rgb::new(100, 0, 0),
            Rgb::new(64, 64, 200),
            Rgb::new(250, 250, 10),
        ] {
            assert_eq!(nearest(c, palette.colors()), Ok(palette.nearest(c)));
        }
    }

    #[test]
    fn test_free_nearest_empty() {
        assert_eq!(nearest(Rgb::WHITE, &[]), Err(PaletteError::EmptyPalette));
    }
}
