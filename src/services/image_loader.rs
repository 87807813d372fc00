//! PNG decoding into an immutable source frame.
//!
//! Every PNG color type is normalized to 8-bit channels. Grayscale is
//! replicated into all three channels and alpha is dropped; the engine
//! treats every pixel as opaque.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use rgb_dither::{Rgb, SourceImage};

use crate::error::AppError;

/// Load and decode a PNG file
pub fn load_image(path: &Path) -> Result<SourceImage, AppError> {
    let file = File::open(path)?;
    let image = decode(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Decode PNG bytes held in memory
pub fn decode_png(bytes: &[u8]) -> Result<SourceImage, AppError> {
    decode(Cursor::new(bytes))
}

fn decode<R: Read>(reader: R) -> Result<SourceImage, AppError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::ImageDecode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::ImageDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let (width, height) = (info.width as usize, info.height as usize);
    if width == 0 || height == 0 {
        return Err(AppError::UnsupportedImage(format!(
            "empty image ({width}x{height})"
        )));
    }

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedImage(
                "indexed color was not expanded".to_string(),
            ))
        }
    };
    tracing::debug!(?info.color_type, channels, "Decoded PNG frame");

    let pixels = pixels_from_rows(data, width, height, info.line_size, channels);
    Ok(SourceImage::new(pixels, width, height)?)
}

/// Collect row-major colors from decoded rows of `line_size` bytes.
fn pixels_from_rows(
    data: &[u8],
    width: usize,
    height: usize,
    line_size: usize,
    channels: usize,
) -> Vec<Rgb> {
    let mut pixels = Vec::with_capacity(width * height);
    for row in data.chunks(line_size).take(height) {
        for px in row[..width * channels].chunks_exact(channels) {
            let color = match channels {
                1 | 2 => Rgb::from_bytes([px[0], px[0], px[0]]),
                _ => Rgb::from_bytes([px[0], px[1], px[2]]),
            };
            pixels.push(color);
        }
    }
    pixels
}
