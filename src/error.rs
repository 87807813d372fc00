use rgb_dither::{DitherError, PaletteError, ParseAlgorithmError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Unknown palette: {name} (available: {available})")]
    UnknownPalette { name: String, available: String },

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PaletteError> for AppError {
    fn from(e: PaletteError) -> Self {
        AppError::Dither(e.into())
    }
}

impl From<ParseAlgorithmError> for AppError {
    fn from(e: ParseAlgorithmError) -> Self {
        AppError::Dither(e.into())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
