//! The `Rgb` triple and its arithmetic.

use std::fmt;

/// Luminance above which a pixel becomes white in two-level output.
///
/// The comparison is strict: a luminance of exactly 128 maps to black.
pub const LUMINANCE_THRESHOLD: f64 = 128.0;

/// A three-channel color with signed integer channels.
///
/// Channels are conceptually 0..=255 when stored in a buffer, but the type
/// itself does not enforce a range so that quantization errors and scaled
/// intermediates can be represented without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: i32,
    /// Green channel
    pub g: i32,
    /// Blue channel
    pub b: i32,
}

impl Rgb {
    /// Opaque black, also the value read from outside a buffer.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an `[R, G, B]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0] as i32, bytes[1] as i32, bytes[2] as i32)
    }

    /// Create a color from the low 24 bits of `value`, laid out as
    /// `0xRRGGBB`. Higher bits are ignored.
    ///
    /// ```
    /// use rgb_dither::Rgb;
    /// assert_eq!(Rgb::from_hex_value(0xff00aa), Rgb::new(255, 0, 170));
    /// ```
    #[inline]
    pub const fn from_hex_value(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xff) as i32,
            ((value >> 8) & 0xff) as i32,
            (value & 0xff) as i32,
        )
    }

    /// Convert to `[R, G, B]` bytes, clamping each channel to 0..=255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.clamp(0, 255) as u8,
            self.g.clamp(0, 255) as u8,
            self.b.clamp(0, 255) as u8,
        ]
    }

    /// True if every channel is within `0..=255`.
    #[inline]
    pub fn is_in_range(self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0..=255).contains(c))
    }

    /// Per-channel `to - self`, without clamping.
    ///
    /// Used to compute quantization error as
    /// `chosen.difference(original)`, i.e. how far the original was from
    /// the color that replaced it.
    #[inline]
    pub fn difference(self, to: Rgb) -> Rgb {
        Rgb::new(to.r - self.r, to.g - self.g, to.b - self.b)
    }

    /// Per-channel sum, each channel saturated to 0..=255.
    #[inline]
    pub fn saturating_add(self, other: Rgb) -> Rgb {
        Rgb::new(
            (self.r + other.r).clamp(0, 255),
            (self.g + other.g).clamp(0, 255),
            (self.b + other.b).clamp(0, 255),
        )
    }

    /// Divide every channel by `divisor`, truncating toward zero.
    #[inline]
    pub fn scale_down(self, divisor: f64) -> Rgb {
        Rgb::new(
            (self.r as f64 / divisor) as i32,
            (self.g as f64 / divisor) as i32,
            (self.b as f64 / divisor) as i32,
        )
    }

    /// Multiply every channel by `factor`, truncating toward zero.
    #[inline]
    pub fn scale_up(self, factor: f64) -> Rgb {
        Rgb::new(
            (self.r as f64 * factor) as i32,
            (self.g as f64 * factor) as i32,
            (self.b as f64 * factor) as i32,
        )
    }

    /// Sum of squared per-channel differences.
    ///
    /// Unweighted and unnormalized; only meaningful for comparing
    /// candidates against the same color.
    #[inline]
    pub fn distance_sq(self, to: Rgb) -> i64 {
        let d = self.difference(to);
        let (r, g, b) = (d.r as i64, d.g as i64, d.b as i64);
        r * r + g * g + b * b
    }

    /// Rec. 709 relative luminance on the raw channel values.
    #[inline]
    pub fn luminance(self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }

    /// Two-level reduction: white if luminance is strictly above
    /// [`LUMINANCE_THRESHOLD`], black otherwise.
    #[inline]
    pub fn threshold(self) -> Rgb {
        if self.luminance() > LUMINANCE_THRESHOLD {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Rgb::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#rrggbb` using the clamped byte values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}
