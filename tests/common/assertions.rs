//! Assertion helpers for tests.

use std::path::Path;

use ditherlab::services::load_image;
use pretty_assertions::assert_eq;
use rgb_dither::{Palette, Rgb, SourceImage};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the file exists and starts with the PNG signature, then decode it
pub fn assert_png_file(path: &Path) -> SourceImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    load_image(path).expect("Failed to decode written PNG")
}

/// Assert every pixel of the image is one of `palette`'s colors
pub fn assert_within_palette(image: &SourceImage, palette: &Palette) {
    for (i, &pixel) in image.pixels().iter().enumerate() {
        assert!(
            palette.contains(pixel),
            "Pixel {i} is {pixel}, not in palette"
        );
    }
}

/// Assert every pixel is pure black or pure white
pub fn assert_black_and_white(image: &SourceImage) {
    for (i, &pixel) in image.pixels().iter().enumerate() {
        assert!(
            pixel == Rgb::BLACK || pixel == Rgb::WHITE,
            "Pixel {i} is {pixel}, expected black or white"
        );
    }
}

/// Assert two images have the same dimensions
pub fn assert_same_dimensions(a: &SourceImage, b: &SourceImage) {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "Image dimensions differ"
    );
}
