//! HSL (hue, saturation, luminosity) triple and its conversions to and from
//! [`Argb`].
//!
//! Both directions work in `f64` on channels normalized by `/ 255.0`.
//! The reconstruction uses the sextant decomposition of the hue circle and
//! converts back to bytes with round-half-to-even, which makes
//! `Argb -> Hsl -> Argb` exact for every 8-bit color.

use super::argb::Argb;

/// A color in HSL form.
///
/// # Components
///
/// - `hue`: degrees in `0.0..360.0`
/// - `saturation`: `0.0..=1.0`
/// - `luminosity`: `0.0..=1.0` (0 = black, 1 = white)
///
/// # Note
///
/// Hue is undefined for achromatic colors (all channels equal). The
/// conversion sets it to 0.0 in that case, which is harmless since a zero
/// saturation reconstructs the same gray regardless of hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees
    pub hue: f64,
    /// Saturation
    pub saturation: f64,
    /// Luminosity
    pub luminosity: f64,
}

impl Hsl {
    /// Create a new HSL triple. Values are stored as given.
    #[inline]
    pub fn new(hue: f64, saturation: f64, luminosity: f64) -> Self {
        Self {
            hue,
            saturation,
            luminosity,
        }
    }

    /// Same hue and saturation with a different luminosity.
    #[inline]
    pub fn with_luminosity(self, luminosity: f64) -> Self {
        Self { luminosity, ..self }
    }

    /// Reconstruct an 8-bit color, attaching the given alpha.
    ///
    /// Any real hue is accepted; it is reduced modulo 360 first. Channels
    /// are scaled by 255, rounded half-to-even and cast with saturation, so
    /// out-of-range values clamp and NaN becomes 0.
    ///
    /// # Example
    /// ```
    /// use halo_remap::{Argb, Hsl};
    ///
    /// let teal = Hsl::new(180.0, 1.0, 0.25).to_argb(255);
    /// assert_eq!(teal, Argb::opaque(0, 128, 128));
    /// ```
    pub fn to_argb(self, alpha: u8) -> Argb {
        let Hsl {
            hue,
            saturation: sat,
            luminosity: lum,
        } = self;

        let v = if lum <= 0.5 {
            lum * (1.0 + sat)
        } else {
            lum + sat - lum * sat
        };

        // Default to gray
        let (mut r, mut g, mut b) = (lum, lum, lum);

        if v > 0.0 {
            let m = lum + lum - v;
            let sv = (v - m) / v;
            let h6 = hue.rem_euclid(360.0) / 360.0 * 6.0;
            let sextant = (h6 as usize).min(5);
            let fract = h6 - sextant as f64;
            let vsf = v * sv * fract;
            let mid1 = m + vsf;
            let mid2 = v - vsf;

            (r, g, b) = match sextant {
                0 => (v, mid1, m),
                1 => (mid2, v, m),
                2 => (m, v, mid1),
                3 => (m, mid2, v),
                4 => (mid1, m, v),
                _ => (v, m, mid2),
            };
        }

        Argb::new(alpha, unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }
}

impl From<Argb> for Hsl {
    /// Convert an 8-bit color to HSL. Alpha is ignored.
    ///
    /// When several channels share the maximum, red wins over green and
    /// green over blue.
    fn from(color: Argb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let luminosity = (max + min) / 2.0;

        if min == max {
            return Self::new(0.0, 0.0, luminosity);
        }

        let delta = max - min;
        let saturation = if luminosity < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let hue = (sector * 60.0 + 360.0) % 360.0;

        Self::new(hue, saturation, luminosity)
    }
}

/// Scale a `0.0..=1.0` channel to a byte.
#[inline]
fn unit_to_byte(x: f64) -> u8 {
    (x * 255.0).round_ties_even() as u8
}
