//! Piecewise luminosity remap.
//!
//! With `L' = 1 - L` the inverted source luminosity, `H` the halo
//! luminosity and `B` the theme background luminosity:
//!
//! ```text
//! L' <  H :  out = B * L' / H
//! L' >= H :  out = (1 - B) * (L' - 1) / (1 - H) + 1
//! ```
//!
//! Pixels brighter than the light reference are compressed into `[0, B)`;
//! everything else is spread over `[B, 1]`. Both branches meet at `B` when
//! `L' == H`. Hue and saturation are never touched.

use crate::color::{Argb, Hsl};

use super::reference::ReferencePair;

/// Remaps pixel luminosity against a fixed [`ReferencePair`].
///
/// The halo and background luminosities are computed once at construction,
/// so the per-pixel path only converts the pixel itself. The remapper is
/// `Copy + Send + Sync` and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use halo_remap::{Argb, LuminosityRemapper, ReferencePair};
///
/// let remapper = LuminosityRemapper::new(ReferencePair::new(
///     Argb::opaque(0xCC, 0xCC, 0xCC),
///     Argb::opaque(0x20, 0x20, 0x20),
/// ));
///
/// // White paper becomes black, black ink becomes white
/// assert_eq!(remapper.remap(Argb::opaque(255, 255, 255)), Argb::opaque(0, 0, 0));
/// assert_eq!(remapper.remap(Argb::opaque(0, 0, 0)), Argb::opaque(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminosityRemapper {
    references: ReferencePair,
    halo_luminosity: f64,
    background_luminosity: f64,
}

impl LuminosityRemapper {
    pub fn new(references: ReferencePair) -> Self {
        Self {
            references,
            halo_luminosity: references.halo_luminosity(),
            background_luminosity: references.background_luminosity(),
        }
    }

    /// The reference pair this remapper was built from.
    #[inline]
    pub fn references(&self) -> ReferencePair {
        self.references
    }

    /// Threshold between the two branches (inverted luminosity).
    #[inline]
    pub fn halo_luminosity(&self) -> f64 {
        self.halo_luminosity
    }

    /// Output luminosity at the branch seam.
    #[inline]
    pub fn background_luminosity(&self) -> f64 {
        self.background_luminosity
    }

    /// Map an inverted source luminosity `L' = 1 - L` to the output
    /// luminosity.
    ///
    /// No guard against division by zero: a halo luminosity of exactly 1
    /// sends `L' = 1` through `0 / 0` and yields NaN.
    #[inline]
    pub fn remap_luminosity(&self, inverted: f64) -> f64 {
        let halo = self.halo_luminosity;
        let background = self.background_luminosity;

        if inverted < halo {
            background * inverted / halo
        } else {
            (1.0 - background) * (inverted - 1.0) / (1.0 - halo) + 1.0
        }
    }

    /// Remap a pixel and return the HSL result before byte conversion.
    ///
    /// Hue and saturation are copied from the pixel bit-for-bit.
    #[inline]
    pub fn remap_hsl(&self, pixel: Argb) -> Hsl {
        let hsl = Hsl::from(pixel);
        hsl.with_luminosity(self.remap_luminosity(1.0 - hsl.luminosity))
    }

    /// Remap a pixel. Alpha is passed through unchanged.
    #[inline]
    pub fn remap(&self, pixel: Argb) -> Argb {
        self.remap_hsl(pixel).to_argb(pixel.a)
    }
}

impl From<ReferencePair> for LuminosityRemapper {
    fn from(references: ReferencePair) -> Self {
        Self::new(references)
    }
}

/// Remap one pixel against a light/dark pair.
///
/// Convenience for single calls; batch work should build a
/// [`LuminosityRemapper`] once instead.
///
/// ```
/// use halo_remap::{remap, Argb};
///
/// let light = Argb::opaque(0xCC, 0xCC, 0xCC);
/// let dark = Argb::opaque(0x20, 0x20, 0x20);
/// assert_eq!(remap(light, light, dark), dark);
/// ```
pub fn remap(pixel: Argb, light: Argb, dark: Argb) -> Argb {
    LuminosityRemapper::new(ReferencePair::new(light, dark)).remap(pixel)
}
