use std::io::Cursor;
use std::path::{Path, PathBuf};

use rgb_dither::{Algorithm, PixelBuffer, Presenter, Rgb};

use crate::error::RenderError;

/// Where a [`PngPresenter`] writes frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One file per algorithm, named by [`frame_file_name`]
    Directory(PathBuf),
    /// Every frame overwrites the same file
    File(PathBuf),
}

/// Presenter that writes each frame as a PNG file
#[derive(Debug)]
pub struct PngPresenter {
    target: OutputTarget,
    optimize: bool,
    written: Vec<PathBuf>,
}

impl PngPresenter {
    pub fn new(target: OutputTarget) -> Self {
        Self {
            target,
            optimize: false,
            written: Vec::new(),
        }
    }

    /// Recompress written files with oxipng
    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Paths written so far, in presentation order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, algorithm: Algorithm) -> PathBuf {
        match &self.target {
            OutputTarget::Directory(dir) => dir.join(frame_file_name(algorithm)),
            OutputTarget::File(path) => path.clone(),
        }
    }
}

impl Presenter for PngPresenter {
    type Error = RenderError;

    fn present(&mut self, algorithm: Algorithm, frame: &PixelBuffer) -> Result<(), RenderError> {
        let path = self.path_for(algorithm);
        let bytes = encode_png(frame, self.optimize)?;
        ensure_parent(&path)?;
        std::fs::write(&path, &bytes)?;

        tracing::info!(
            algorithm = %algorithm,
            path = %path.display(),
            bytes = bytes.len(),
            "Wrote frame"
        );
        self.written.push(path);
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// File name for a frame in directory output, e.g. `09-palette-floyd-steinberg.png`
pub fn frame_file_name(algorithm: Algorithm) -> String {
    format!(
        "{:02}-{}.png",
        algorithm.index(),
        algorithm.name().replace(' ', "-")
    )
}

/// Encode a frame as PNG.
///
/// Frames with at most 256 distinct colors are written as indexed PNGs
/// at the smallest bit depth that fits, others as 8-bit RGB.
pub fn encode_png(frame: &PixelBuffer, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let (width, height) = match (u32::try_from(frame.width()), u32::try_from(frame.height())) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(RenderError::UnsupportedDimensions {
                width: frame.width(),
                height: frame.height(),
            })
        }
    };

    let png_bytes = match index_colors(frame.pixels()) {
        Some((plte, indices)) => {
            let (depth, bits) = match plte.len() {
                0..=2 => (png::BitDepth::One, 1),
                3..=4 => (png::BitDepth::Two, 2),
                5..=16 => (png::BitDepth::Four, 4),
                _ => (png::BitDepth::Eight, 8),
            };
            let plte: Vec<u8> = plte.iter().flat_map(|c| c.to_bytes()).collect();
            let packed = if bits == 8 {
                indices
            } else {
                pack_nbits(&indices, width, bits)
            };
            write_png(width, height, png::ColorType::Indexed, depth, Some(&plte), &packed)?
        }
        None => write_png(
            width,
            height,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            &frame.to_rgb8(),
        )?,
    };

    if !optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

/// Build a palette in first-seen order and per-pixel indices into it.
/// Returns `None` when the frame has more than 256 colors.
fn index_colors(pixels: &[Rgb]) -> Option<(Vec<Rgb>, Vec<u8>)> {
    let mut plte: Vec<Rgb> = Vec::new();
    let mut indices = Vec::with_capacity(pixels.len());

    for &pixel in pixels {
        let idx = match plte.iter().position(|&c| c == pixel) {
            Some(idx) => idx,
            None => {
                if plte.len() == 256 {
                    return None;
                }
                plte.push(pixel);
                plte.len() - 1
            }
        };
        indices.push(idx as u8);
    }

    Some((plte, indices))
}

fn write_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack indices into N-bit PNG rows (1, 2, or 4 bits per pixel).
///
/// The first pixel of each group sits in the high bits; the last byte of a
/// row is zero-padded.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let per_byte = usize::from(8 / bits);
    let mask = (1u8 << bits) - 1;

    indices
        .chunks(width as usize)
        .flat_map(|row| row.chunks(per_byte))
        .map(|group| {
            group.iter().zip(1u8..).fold(0u8, |byte, (&idx, slot)| {
                byte | ((idx & mask) << (8 - bits * slot))
            })
        })
        .collect()
}
