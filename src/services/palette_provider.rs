//! Palette provider: hex palette text, files and named palettes.
//!
//! A palette file holds one color per line as a hexadecimal `RRGGBB`
//! number. Lines are read the way C's `strtol(line, NULL, 16)` reads them:
//! leading whitespace and an optional sign or `0x` prefix are skipped and
//! the longest run of hex digits is the value. A line without any digits
//! is not an error; it becomes black.

use std::path::{Path, PathBuf};

use rgb_dither::{Palette, PaletteError, Rgb};

use crate::assets::AssetLoader;
use crate::error::AppError;
use crate::models::AppConfig;

/// Parse one palette line into a color, or `None` if it has no hex digits.
///
/// Only the low 24 bits of the value are used, so over-long digit runs
/// keep their last six digits.
pub fn parse_hex_line(line: &str) -> Option<Rgb> {
    let mut rest = line.trim_start();

    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    // "0x" only counts as a prefix when a digit follows it
    if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        if stripped.starts_with(|c: char| c.is_ascii_hexdigit()) {
            rest = stripped;
        }
    }

    let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(16)).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits
        .iter()
        .fold(0u32, |acc, &d| (acc << 4) | d);
    let value = if negative { value.wrapping_neg() } else { value };

    Some(Rgb::from_hex_value(value))
}

/// Parse palette text, one entry per line.
///
/// Every line counts, blank ones included; unparsable lines become black.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if the text has no lines.
pub fn parse_palette(text: &str) -> Result<Palette, PaletteError> {
    parse_palette_bytes(text.as_bytes())
}

/// Parse raw palette file contents, one entry per line.
///
/// Lines split on `\n` with an optional trailing `\r`, like [`str::lines`].
/// A line that is not valid UTF-8 is malformed and becomes black; it does
/// not fail the whole palette.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if the input has no lines.
pub fn parse_palette_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
    let mut malformed = 0usize;
    let colors: Vec<Rgb> = byte_lines(bytes)
        .enumerate()
        .map(|(line_no, line)| {
            std::str::from_utf8(line)
                .ok()
                .and_then(parse_hex_line)
                .unwrap_or_else(|| {
                    malformed += 1;
                    tracing::debug!(
                        line = line_no + 1,
                        content = %String::from_utf8_lossy(line),
                        "Unparsable palette line, using black"
                    );
                    Rgb::BLACK
                })
        })
        .collect();

    if malformed > 0 {
        tracing::debug!(malformed, total = colors.len(), "Palette had unparsable lines");
    }

    Palette::from_vec(colors)
}

fn byte_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    (!bytes.is_empty())
        .then(|| body.split(|&b| b == b'\n'))
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Read and parse a palette file
pub fn load_palette_file(path: &Path) -> Result<Palette, AppError> {
    let bytes = std::fs::read(path)?;
    let palette = parse_palette_bytes(&bytes)?;
    tracing::info!(path = %path.display(), colors = palette.len(), "Loaded palette file");
    Ok(palette)
}

/// Where the session palette comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaletteSource {
    /// The built-in 16-color palette
    #[default]
    Default,
    /// A hex palette file on disk
    File(PathBuf),
    /// A named palette from the asset loader
    Builtin(String),
}

impl PaletteSource {
    /// Pick the palette source: CLI flags first, then config, then default.
    pub fn resolve(
        cli_file: Option<PathBuf>,
        cli_builtin: Option<String>,
        config: &AppConfig,
    ) -> Self {
        if let Some(path) = cli_file {
            return PaletteSource::File(path);
        }
        if let Some(name) = cli_builtin {
            return PaletteSource::Builtin(name);
        }
        if let Some(ref path) = config.palette {
            return PaletteSource::File(path.clone());
        }
        if let Some(ref name) = config.builtin_palette {
            return PaletteSource::Builtin(name.clone());
        }
        PaletteSource::Default
    }

    /// Load the palette this source points at
    pub fn load(&self, assets: &AssetLoader) -> Result<Palette, AppError> {
        match self {
            PaletteSource::Default => Ok(Palette::default()),
            PaletteSource::File(path) => load_palette_file(path),
            PaletteSource::Builtin(name) => {
                let bytes = assets.read_palette(name).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        AppError::UnknownPalette {
                            name: name.clone(),
                            available: assets.list_palettes().join(", "),
                        }
                    } else {
                        AppError::Io(e)
                    }
                })?;
                let palette = parse_palette_bytes(&bytes)?;
                tracing::info!(name = %name, colors = palette.len(), "Loaded builtin palette");
                Ok(palette)
            }
        }
    }
}
