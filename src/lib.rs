//! Ditherlab - compare classic dithering algorithms on your own images
//!
//! The dithering engine lives in the `rgb-dither` crate. This crate holds
//! everything around it: loading images and palette files, configuration,
//! and presenting finished frames as PNG files.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
