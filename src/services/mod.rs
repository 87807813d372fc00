pub mod image_loader;
pub mod palette_provider;
pub mod selection;

pub use image_loader::{decode_png, load_image};
pub use palette_provider::{parse_palette, parse_palette_bytes, PaletteSource};
pub use selection::{run_browser, BrowseCommand};
