//! Halo-anchored luminosity remapping.
//!
//! A [`ReferencePair`] names the light halo color and the dark target color;
//! a [`LuminosityRemapper`] built from it maps each pixel's luminosity while
//! keeping hue, saturation and alpha.

mod reference;
mod remapper;

pub use reference::ReferencePair;
pub use remapper::{remap, LuminosityRemapper};
