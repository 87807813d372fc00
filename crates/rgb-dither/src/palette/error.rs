//! Error types for palette operations

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be used for quantization. This is the
/// only configuration error the engine knows about; it is always reported
/// before any pixel is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette cannot be empty"),
        }
    }
}

impl std::error::Error for PaletteError {}
