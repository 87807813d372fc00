//! Named palettes with embedded fallbacks
//!
//! Palettes ship inside the binary from `palettes/*.hex`. If a palettes
//! directory is configured (the `PALETTES_DIR` env var), files there are
//! tried first and may add or shadow names.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded palette files
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.hex"]
struct EmbeddedPalettes;

const PALETTE_EXT: &str = "hex";

/// Palette loader with optional filesystem override
pub struct AssetLoader {
    /// External palettes directory (from PALETTES_DIR env var)
    palettes_dir: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// If `palettes_dir` is `None`, embedded palettes are used exclusively.
    pub fn new(palettes_dir: Option<PathBuf>) -> Self {
        Self { palettes_dir }
    }

    /// Loader configured from the `PALETTES_DIR` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("PALETTES_DIR").ok().map(PathBuf::from))
    }

    /// Read a named palette (without the `.hex` extension)
    pub fn read_palette(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        let file_name = format!("{name}.{PALETTE_EXT}");

        if let Some(ref dir) = self.palettes_dir {
            let full_path = dir.join(&file_name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading palette from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedPalettes::get(&file_name)
            .map(|f| {
                tracing::trace!(name, "Loading palette from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Palette not found: {name}"))
            })
    }

    /// List all available palette names (merged view of embedded + external)
    pub fn list_palettes(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = Self::list_embedded().into_iter().collect();

        if let Some(ref dir) = self.palettes_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = palette_name(&entry.path()) {
                        names.insert(name);
                    }
                }
            }
        }

        names.into_iter().collect()
    }

    /// List embedded palette names
    pub fn list_embedded() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedPalettes::iter()
            .filter_map(|f| palette_name(Path::new(f.as_ref())))
            .collect();
        names.sort();
        names
    }
}

fn palette_name(path: &Path) -> Option<String> {
    if path.extension()? != PALETTE_EXT {
        return None;
    }
    Some(path.file_stem()?.to_string_lossy().into_owned())
}
