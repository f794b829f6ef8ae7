//! Test fixtures: reference colors and small images on disk.

use std::fs;
use std::path::{Path, PathBuf};

use darktheme::models::RunConfig;
use halo_remap::{Argb, PixelGrid};

/// Light reference used throughout the tests
pub const LIGHT: Argb = Argb::opaque(0xCC, 0xCC, 0xCC);

/// Dark target used throughout the tests
pub const DARK: Argb = Argb::opaque(0x20, 0x20, 0x20);

/// Run config with the standard reference pair and default suffix
pub fn config() -> RunConfig {
    RunConfig::new(LIGHT, DARK)
}

/// 2x2 image: white paper, black ink, the light reference, half-transparent red
pub fn sample_grid() -> PixelGrid {
    PixelGrid::new(
        2,
        2,
        vec![
            Argb::opaque(255, 255, 255),
            Argb::opaque(0, 0, 0),
            LIGHT,
            Argb::new(128, 255, 0, 0),
        ],
    )
    .unwrap()
}

/// Expected remap of [`sample_grid`] against LIGHT/DARK
pub fn sample_grid_themed() -> PixelGrid {
    PixelGrid::new(
        2,
        2,
        vec![
            Argb::opaque(0, 0, 0),
            Argb::opaque(255, 255, 255),
            DARK,
            Argb::new(128, 231, 0, 0),
        ],
    )
    .unwrap()
}

/// Write a grid as an RGBA PNG via the image crate
pub fn write_png(path: &Path, grid: &PixelGrid) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let image = image::RgbaImage::from_raw(grid.width(), grid.height(), grid.to_rgba_bytes())
        .expect("buffer matches dimensions");
    image.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Read any image back as an RGBA grid
pub fn read_grid(path: &Path) -> PixelGrid {
    let image = image::open(path).unwrap().to_rgba8();
    PixelGrid::from_rgba_bytes(image.width(), image.height(), image.as_raw()).unwrap()
}

/// Create an empty file (and its parent directories)
pub fn touch(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
    path.to_path_buf()
}
