//! The light/dark reference pair that anchors a remap run.

use crate::color::{Argb, Hsl};

/// Light halo color and dark target color for one batch run.
///
/// # Luminosity convention
///
/// The remap works on *inverted* luminosity (`1 - L`), so a value of 1
/// means black. The halo luminosity follows that convention; the theme
/// background luminosity does not.
///
/// # Example
///
/// ```
/// use halo_remap::{Argb, ReferencePair};
///
/// let pair = ReferencePair::new(
///     Argb::opaque(0xCC, 0xCC, 0xCC),
///     Argb::opaque(0x20, 0x20, 0x20),
/// );
/// assert!((pair.halo_luminosity() - 0.2).abs() < 1e-12);
/// assert!((pair.background_luminosity() - 32.0 / 255.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePair {
    /// Light reference color (the halo)
    pub light: Argb,
    /// Dark target color (the theme background)
    pub dark: Argb,
}

impl ReferencePair {
    pub fn new(light: Argb, dark: Argb) -> Self {
        Self { light, dark }
    }

    /// Inverted luminosity of the light reference: the branch threshold.
    #[inline]
    pub fn halo_luminosity(&self) -> f64 {
        1.0 - Hsl::from(self.light).luminosity
    }

    /// Luminosity of the dark target (not inverted): the output anchor.
    #[inline]
    pub fn background_luminosity(&self) -> f64 {
        Hsl::from(self.dark).luminosity
    }

    /// True when the light reference is pure black or pure white.
    ///
    /// With a pure black light reference the halo luminosity is 1 and pure
    /// black pixels remap to a NaN luminosity (0/0). A pure white light
    /// reference never divides by zero but collapses the lower branch.
    /// The remapper does not guard either case; callers may warn.
    pub fn is_degenerate(&self) -> bool {
        let halo = self.halo_luminosity();
        halo == 0.0 || halo == 1.0
    }
}
