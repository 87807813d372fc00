//! Test fixtures: temporary directories with PNG images and palette files.

use std::path::{Path, PathBuf};

use rgb_dither::Rgb;
use tempfile::TempDir;

/// Palette file contents used across tests
pub mod palettes {
    /// Two-color palette with a deliberately bad line (parsed as black)
    pub const RED_BLUE: &str = "ff0000\n0000ff\nnot a color\n";

    /// Four-entry grayscale palette
    pub const GRAY4: &str = "000000\n555555\naaaaaa\nffffff\n";
}

/// A temporary working directory that is removed on drop
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an 8-bit RGB PNG whose pixels come from `pixel(x, y)`
    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        pixel: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y));
            }
        }

        let path = self.join(name);
        let file = std::fs::File::create(&path).expect("Failed to create PNG");
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(&data)
            .expect("Failed to write PNG data");
        path
    }

    /// Horizontal gray ramp with a color tint on odd rows
    pub fn write_gradient(&self, name: &str, width: u32, height: u32) -> PathBuf {
        self.write_png(name, width, height, |x, y| {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            if y % 2 == 0 {
                [v, v, v]
            } else {
                [v, 255 - v, v / 2]
            }
        })
    }

    /// Write a text file, returning its path
    pub fn write_text(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

/// The 16 colors of the built-in palette, in order
pub fn default_colors() -> Vec<Rgb> {
    rgb_dither::Palette::default().colors().to_vec()
}
