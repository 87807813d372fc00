pub mod png_presenter;

pub use png_presenter::{encode_png, frame_file_name, OutputTarget, PngPresenter};
