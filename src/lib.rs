//! Darktheme - dark-theme variants of raster images
//!
//! Batch driver around the `halo-remap` crate: discovers input files,
//! decodes them, remaps every pixel's luminosity and writes lossless PNGs.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
