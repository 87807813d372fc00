//! Public API for the rgb-dither crate.
//!
//! This module provides the [`DitherSession`] driver, the [`Presenter`]
//! seam for whatever displays finished frames, and the unified
//! [`DitherError`] type.

mod error;
mod session;

pub use error::DitherError;
pub use session::{DitherSession, Presenter};
