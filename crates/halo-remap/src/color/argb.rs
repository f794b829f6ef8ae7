//! 8-bit ARGB color sample
//!
//! [`Argb`] is the unit of pixel data flowing in and out of the remapper.
//! Channels are plain sRGB bytes; no gamma decoding is applied anywhere.

use std::str::FromStr;

use super::error::ParseColorError;
use super::hsl::Hsl;

/// A single color sample with alpha.
///
/// The alpha channel is carried along untouched by every transform in this
/// crate. Red, green and blue are normalized to `0.0..=1.0` only inside the
/// HSL conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Argb {
    /// Create a color sample from all four channels.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color sample.
    ///
    /// # Example
    /// ```
    /// use halo_remap::Argb;
    /// let red = Argb::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Create a color sample from `[R, G, B, A]` bytes, the layout used by
    /// RGBA8 image buffers.
    #[inline]
    pub fn from_rgba_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[3], bytes[0], bytes[1], bytes[2])
    }

    /// Convert to `[R, G, B, A]` bytes.
    #[inline]
    pub fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to HSL. Alpha is ignored.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Format as an uppercase `RRGGBB` hex string (alpha omitted).
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse an opaque color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed;
    /// anything else that is not a hex digit, such as a `+` sign, is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use halo_remap::Argb;
    ///
    /// let light: Argb = "CCCCCC".parse().unwrap();
    /// assert_eq!(light, Argb::opaque(0xCC, 0xCC, 0xCC));
    ///
    /// let red: Argb = "#F00".parse().unwrap();
    /// assert_eq!(red, Argb::opaque(255, 0, 0));
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        // Any non-hex character fails, including a leading sign
        let mut nibbles = Vec::with_capacity(6);
        for c in hex.chars() {
            match c.to_digit(16) {
                Some(d) => nibbles.push(d as u8),
                None => {
                    return Err(ParseColorError::InvalidDigit {
                        input: input.to_string(),
                        found: c,
                    })
                }
            }
        }

        match nibbles[..] {
            // Shorthand doubles each digit (0xF -> 0xFF)
            [r, g, b] => Ok(Self::opaque(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::opaque(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(ParseColorError::InvalidLength {
                input: input.to_string(),
                digits: nibbles.len(),
            }),
        }
    }
}
