//! Owned row-major pixel grid.
//!
//! [`PixelGrid`] is what the remap operates on: mapping a grid never touches
//! the source and always allocates a fresh output buffer, so every output
//! pixel is written exactly once and rows can be processed in parallel
//! without sharing mutable state.

use std::fmt;

use rayon::prelude::*;

use crate::color::Argb;

/// Error building a [`PixelGrid`] from raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Pixel or byte count does not match `width * height`
    LengthMismatch {
        /// Expected element count
        expected: usize,
        /// Element count actually supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `width x height` image held as [`Argb`] samples in row-major order.
///
/// # Example
///
/// ```
/// use halo_remap::{Argb, PixelGrid};
///
/// let grid = PixelGrid::from_rgba_bytes(2, 1, &[255, 0, 0, 255, 0, 0, 255, 128]).unwrap();
/// assert_eq!(grid.pixel(1, 0), Some(Argb::new(128, 0, 0, 255)));
///
/// let inverted = grid.map(|p| Argb::new(p.a, 255 - p.r, 255 - p.g, 255 - p.b));
/// assert_eq!(inverted.to_rgba_bytes(), vec![0, 255, 255, 255, 255, 255, 0, 128]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Samples, `width * height` of them, row-major.
    pixels: Vec<Argb>,
}

impl PixelGrid {
    /// Wrap a pixel vector. Fails unless `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Argb>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from an RGBA8 byte buffer (`[R, G, B, A, R, G, B, A, ...]`).
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Argb::from_rgba_bytes([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten into an RGBA8 byte buffer of length `width * height * 4`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            rgba.extend_from_slice(&pixel.to_rgba_bytes());
        }
        rgba
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Map every pixel through `f` into a new grid of the same size.
    pub fn map<F>(&self, f: F) -> PixelGrid
    where
        F: Fn(Argb) -> Argb,
    {
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Like [`map`](Self::map), with rows distributed over the rayon pool.
    ///
    /// Produces exactly the same grid as `map` for a pure `f`.
    pub fn par_map<F>(&self, f: F) -> PixelGrid
    where
        F: Fn(Argb) -> Argb + Sync,
    {
        let mut out = vec![Argb::new(0, 0, 0, 0); self.pixels.len()];

        if !out.is_empty() {
            let row = self.width as usize;
            out.par_chunks_mut(row)
                .zip(self.pixels.par_chunks(row))
                .for_each(|(dst, src)| {
                    for (d, &s) in dst.iter_mut().zip(src) {
                        *d = f(s);
                    }
                });
        }

        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: out,
        }
    }
}
