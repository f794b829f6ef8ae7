use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

/// Result of expanding CLI path arguments into input files
#[derive(Debug, Default, PartialEq)]
pub struct DiscoveryReport {
    /// Files to convert, in argument order; directory contents sorted by path
    pub files: Vec<PathBuf>,
    /// Arguments that are neither a file nor a directory, plus unreadable directories
    pub missing: Vec<PathBuf>,
    /// Files inside walked directories that look like earlier outputs
    pub skipped: Vec<PathBuf>,
    /// Files inside walked directories without an image extension
    pub ignored: Vec<PathBuf>,
}

impl DiscoveryReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Expand file and directory arguments into the list of files to convert.
///
/// Files named directly are always included and their format is sniffed
/// at decode time. Directories are walked recursively; inside them, only
/// files with an extension `image` knows are picked up, and files whose stem
/// already ends with `suffix` are skipped so a second run does not produce
/// `x_dark_dark.png`.
/// Symlinks to files are followed, symlinks to directories are not.
pub fn discover_inputs(paths: &[PathBuf], suffix: &str) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();

    for path in paths {
        if path.is_file() {
            report.files.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, suffix, &mut report);
        } else {
            tracing::warn!(path = %path.display(), "Path is neither a file nor a directory");
            report.missing.push(path.clone());
        }
    }

    tracing::debug!(
        files = report.files.len(),
        missing = report.missing.len(),
        skipped = report.skipped.len(),
        ignored = report.ignored.len(),
        "Discovered inputs"
    );

    report
}

fn walk_dir(dir: &Path, suffix: &str, report: &mut DiscoveryReport) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), %e, "Failed to read directory");
            report.missing.push(dir.to_path_buf());
            return;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            walk_dir(&path, suffix, report);
        } else if path.is_file() {
            if !has_image_extension(&path) {
                tracing::debug!(path = %path.display(), "Ignoring non-image file");
                report.ignored.push(path);
            } else if is_previous_output(&path, suffix) {
                tracing::debug!(path = %path.display(), "Skipping previous output");
                report.skipped.push(path);
            } else {
                report.files.push(path);
            }
        }
    }
}

/// Whether the extension maps to an image format (case-insensitive).
fn has_image_extension(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// Whether a file stem already ends with the output suffix.
fn is_previous_output(path: &Path, suffix: &str) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
