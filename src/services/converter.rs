use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

use halo_remap::{LuminosityRemapper, PixelGrid};
use image::ImageReader;

use crate::error::ConvertError;
use crate::models::RunConfig;
use crate::rendering::PngWriter;

/// Outcome of converting a list of files
#[derive(Debug, Default)]
pub struct BatchReport {
    /// (input, output) for every file written
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// Inputs that could not be converted, with the reason
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts images into their dark-theme variant.
///
/// Each file is decoded to RGBA8, mapped through the luminosity remapper
/// into a fresh grid, encoded as PNG and written next to the input as
/// `<stem><suffix>.png`.
pub struct ThemeConverter {
    remapper: LuminosityRemapper,
    suffix: String,
    parallel: bool,
    writer: PngWriter,
}

impl ThemeConverter {
    pub fn new(config: &RunConfig) -> Self {
        let references = config.references;
        if references.is_degenerate() {
            tracing::warn!(
                light = %references.light.to_hex(),
                "Light reference is pure black or white; some pixels may remap to undefined luminosity"
            );
        }

        tracing::debug!(
            light = %references.light.to_hex(),
            dark = %references.dark.to_hex(),
            halo = references.halo_luminosity(),
            background = references.background_luminosity(),
            "Reference colors"
        );

        Self {
            remapper: LuminosityRemapper::new(references),
            suffix: config.suffix.clone(),
            parallel: config.parallel,
            writer: PngWriter::new(config.optimize),
        }
    }

    /// Output path for an input: same directory, stem + suffix, `.png`.
    pub fn output_path(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let stem = input
            .file_stem()
            .ok_or_else(|| ConvertError::NoFileName(input.to_path_buf()))?;

        let mut name = OsString::from(stem);
        name.push(&self.suffix);
        name.push(".png");

        let parent = input.parent().unwrap_or_else(|| Path::new(""));
        Ok(parent.join(name))
    }

    /// Remap every pixel of a grid into a new grid.
    pub fn convert_grid(&self, grid: &PixelGrid) -> PixelGrid {
        let remapper = self.remapper;
        if self.parallel {
            grid.par_map(|p| remapper.remap(p))
        } else {
            grid.map(|p| remapper.remap(p))
        }
    }

    /// Decode an image file into an RGBA8 grid.
    ///
    /// The format is sniffed from the content, so extension-less or
    /// misnamed files still decode.
    pub fn load_grid(&self, input: &Path) -> Result<PixelGrid, ConvertError> {
        let read_err = |source| ConvertError::Read {
            path: input.to_path_buf(),
            source,
        };
        let decode_err = |source| ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        };

        let image = ImageReader::open(input)
            .map_err(read_err)?
            .with_guessed_format()
            .map_err(read_err)?
            .decode()
            .map_err(decode_err)?;

        let rgba = image.to_rgba8();
        Ok(PixelGrid::from_rgba_bytes(
            rgba.width(),
            rgba.height(),
            rgba.as_raw(),
        )?)
    }

    /// Convert one file and return the path written.
    pub fn convert_file(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let started = Instant::now();
        let output = self.output_path(input)?;

        let grid = self.load_grid(input)?;
        let themed = self.convert_grid(&grid);
        let png_bytes = self.writer.encode(&themed)?;

        std::fs::write(&output, &png_bytes).map_err(|source| ConvertError::Write {
            path: output.clone(),
            source,
        })?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = themed.width(),
            height = themed.height(),
            bytes = png_bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Converted image"
        );

        Ok(output)
    }

    /// Convert every file, continuing past failures.
    pub fn convert_all(&self, inputs: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();

        for input in inputs {
            match self.convert_file(input) {
                Ok(output) => report.converted.push((input.clone(), output)),
                Err(e) => {
                    tracing::warn!(input = %input.display(), %e, "Conversion failed");
                    report.failed.push((input.clone(), e));
                }
            }
        }

        report
    }
}
