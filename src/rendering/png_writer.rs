use crate::error::RenderError;
use halo_remap::PixelGrid;
use std::io::Cursor;

/// Encodes pixel grids as lossless 8-bit RGBA PNG.
///
/// Every output uses the same color type regardless of the input's original
/// encoding, so alpha survives untouched. With `optimize` enabled, the PNG is
/// written with fast settings and then re-compressed by oxipng (zopfli +
/// adaptive filter selection), which is lossless but much slower.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngWriter {
    optimize: bool,
}

impl PngWriter {
    pub fn new(optimize: bool) -> Self {
        Self { optimize }
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    /// Encode a grid to PNG bytes.
    pub fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>, RenderError> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(RenderError::UnsupportedDimensions {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let compression = if self.optimize {
            // oxipng will re-compress optimally
            png::Compression::Fast
        } else {
            png::Compression::Default
        };
        let png_bytes = encode_rgba(grid, compression)?;

        if !self.optimize {
            return Ok(png_bytes);
        }

        // optimize_alpha would rewrite the color of fully transparent pixels
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        );
        match optimized {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
                Ok(png_bytes)
            }
        }
    }
}

/// Encode RGBA8 pixel data as a PNG.
fn encode_rgba(grid: &PixelGrid, compression: png::Compression) -> Result<Vec<u8>, RenderError> {
    let data = grid.to_rgba_bytes();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
