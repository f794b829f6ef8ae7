//! halo-remap: dark-theme luminosity remapping for raster images
//!
//! This library turns light-background artwork into a dark-theme variant by
//! remapping each pixel's HSL luminosity against two reference colors while
//! keeping hue, saturation and alpha.
//!
//! # Quick Start
//!
//! ```
//! use halo_remap::{Argb, LuminosityRemapper, PixelGrid, ReferencePair};
//!
//! let light: Argb = "CCCCCC".parse().unwrap();
//! let dark: Argb = "202020".parse().unwrap();
//! let remapper = LuminosityRemapper::new(ReferencePair::new(light, dark));
//!
//! let grid = PixelGrid::new(2, 1, vec![Argb::opaque(255, 255, 255), light]).unwrap();
//! let themed = grid.par_map(|p| remapper.remap(p));
//!
//! assert_eq!(themed.pixel(0, 0), Some(Argb::opaque(0, 0, 0)));
//! assert_eq!(themed.pixel(1, 0), Some(dark));
//! ```
//!
//! # The Transform
//!
//! Each pixel goes through three steps:
//!
//! ```text
//! Argb (u8 channels)
//!     |
//!     v
//! Hsl                    (channels / 255, hue in degrees)
//!     |
//!     v
//! L' = 1 - L             (inverted luminosity)
//!     |
//!     +-- L' <  H  -->  B * L' / H
//!     +-- L' >= H  -->  (1 - B) * (L' - 1) / (1 - H) + 1
//!     |
//!     v
//! Hsl -> Argb            (sextant reconstruction, alpha copied)
//! ```
//!
//! `H` is the halo luminosity (inverted luminosity of the light reference)
//! and `B` the theme background luminosity (luminosity of the dark target).
//! Pixels lighter than the light reference land in `[0, B)`, so a white page
//! turns black and the light reference itself turns into the dark target.
//! Everything darker is spread over `[B, 1]`, so black ink turns white.
//!
//! ## Inverted luminosity
//!
//! `L'` treats 1 as black. The sign of every term in the remap depends on it;
//! do not "normalize" it.
//!
//! ## Degenerate references
//!
//! A pure black light reference gives `H = 1`, and pure black pixels then
//! hit `0 / 0` in the upper branch. The NaN is returned as-is from
//! [`LuminosityRemapper::remap_hsl`] and becomes channel value 0 after byte
//! conversion. [`ReferencePair::is_degenerate`] lets callers detect this
//! up front; nothing is clamped or special-cased.
//!
//! # Color Conversion
//!
//! [`Hsl`] conversion is the classic max/min formulation in `f64`, with the
//! reverse direction using sextant decomposition and round-half-to-even byte
//! conversion. `Argb -> Hsl -> Argb` is exact for all 16.7M colors.

pub mod color;
pub mod output;
pub mod remap;


pub use color::{Argb, Hsl, ParseColorError};
pub use output::{GridError, PixelGrid};
pub use remap::{remap, LuminosityRemapper, ReferencePair};
