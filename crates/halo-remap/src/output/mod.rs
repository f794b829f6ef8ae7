//! Pixel grid container for whole-image remapping.
//!
//! [`PixelGrid`] holds decoded pixels and maps them into a new grid,
//! sequentially or row-parallel.

mod pixel_grid;

pub use pixel_grid::{GridError, PixelGrid};
