use std::path::PathBuf;

use halo_remap::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Output suffix must not be empty")]
    EmptySuffix,

    #[error("Output suffix must not contain path separators: {0:?}")]
    InvalidSuffix(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input path has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid pixel data: {0}")]
    Grid(#[from] GridError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
