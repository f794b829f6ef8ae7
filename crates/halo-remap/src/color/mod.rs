//! Color types and conversion utilities
//!
//! - [`Argb`]: 8-bit color sample with alpha, used for pixel I/O
//! - [`Hsl`]: hue/saturation/luminosity form, used for the remap
//!
//! # Example
//!
//! ```
//! use halo_remap::{Argb, Hsl};
//!
//! let color = Argb::opaque(0x33, 0x66, 0x99);
//! let hsl = Hsl::from(color);
//! assert_eq!(hsl.to_argb(color.a), color);
//! ```

mod argb;
mod error;
mod hsl;

pub use argb::Argb;
pub use error::ParseColorError;
pub use hsl::Hsl;
