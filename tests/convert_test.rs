//! End-to-end conversion of image files on disk.

mod common;

use std::fs;

use common::{config, read_grid, sample_grid, sample_grid_themed, write_png, DARK, LIGHT};
use darktheme::error::ConvertError;
use darktheme::services::{discover_inputs, ThemeConverter};
use halo_remap::{Argb, PixelGrid};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_convert_png_writes_themed_copy_alongside() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    write_png(&input, &sample_grid());

    let converter = ThemeConverter::new(&config());
    let output = converter.convert_file(&input).unwrap();

    assert_eq!(output, dir.path().join("page_dark.png"));
    assert_eq!(read_grid(&output), sample_grid_themed());
    // Source is left alone
    assert_eq!(read_grid(&input), sample_grid());
}

#[test]
fn test_output_is_png_for_other_formats() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.bmp");
    let rgb = image::RgbImage::from_raw(2, 1, vec![255, 255, 255, 0, 0, 0]).unwrap();
    rgb.save_with_format(&input, image::ImageFormat::Bmp).unwrap();

    let output = ThemeConverter::new(&config()).convert_file(&input).unwrap();

    assert_eq!(output, dir.path().join("scan_dark.png"));
    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(
        read_grid(&output),
        PixelGrid::new(2, 1, vec![Argb::opaque(0, 0, 0), Argb::opaque(255, 255, 255)]).unwrap()
    );
}

#[test]
fn test_format_is_sniffed_from_content() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("no_extension");
    let image = image::RgbaImage::from_raw(1, 1, vec![0xCC, 0xCC, 0xCC, 255]).unwrap();
    image.save_with_format(&input, image::ImageFormat::Png).unwrap();

    let output = ThemeConverter::new(&config()).convert_file(&input).unwrap();

    assert_eq!(output, dir.path().join("no_extension_dark.png"));
    assert_eq!(read_grid(&output).pixel(0, 0), Some(DARK));
}

#[test]
fn test_alpha_is_preserved_per_pixel() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("alpha.png");
    let pixels: Vec<Argb> = (0..16u32)
        .map(|i| Argb::new((i * 17) as u8, 0x33, 0x66, 0x99))
        .collect();
    write_png(&input, &PixelGrid::new(4, 4, pixels.clone()).unwrap());

    let output = ThemeConverter::new(&config()).convert_file(&input).unwrap();
    let themed = read_grid(&output);

    for (out, src) in themed.pixels().iter().zip(&pixels) {
        assert_eq!(out.a, src.a);
        assert_eq!((out.r, out.g, out.b), (88, 144, 199));
    }
}

#[test]
fn test_sequential_and_optimized_output_match() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    write_png(&input, &sample_grid());

    let mut cfg = config();
    cfg.parallel = false;
    cfg.optimize = true;
    cfg.suffix = "-opt".to_string();
    let output = ThemeConverter::new(&cfg).convert_file(&input).unwrap();

    assert_eq!(output, dir.path().join("page-opt.png"));
    assert_eq!(read_grid(&output), sample_grid_themed());
}

#[test]
fn test_undecodable_file_fails_without_stopping_batch() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("notes.txt");
    fs::write(&bad, b"this is not an image").unwrap();
    let good = dir.path().join("page.png");
    write_png(&good, &sample_grid());

    let converter = ThemeConverter::new(&config());
    let report = converter.convert_all(&[bad.clone(), good.clone()]);

    assert!(!report.is_success());
    assert_eq!(report.converted, vec![(good, dir.path().join("page_dark.png"))]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, bad);
    assert!(matches!(report.failed[0].1, ConvertError::Decode { .. }));
    assert!(!dir.path().join("notes_dark.png").exists());
}

#[test]
fn test_directory_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_png(&dir.path().join("a.png"), &sample_grid());
    write_png(&dir.path().join("nested/b.png"), &sample_grid());

    let cfg = config();
    let converter = ThemeConverter::new(&cfg);
    let paths = vec![dir.path().to_path_buf()];

    let first = converter.convert_all(&discover_inputs(&paths, &cfg.suffix).files);
    assert!(first.is_success());
    assert_eq!(first.converted.len(), 2);

    // Second run sees the outputs but skips them
    let discovery = discover_inputs(&paths, &cfg.suffix);
    assert_eq!(discovery.skipped.len(), 2);
    let second = converter.convert_all(&discovery.files);
    assert_eq!(second.converted.len(), 2);
    assert!(!dir.path().join("a_dark_dark.png").exists());
    assert!(!dir.path().join("nested/b_dark_dark.png").exists());
    assert_eq!(read_grid(&dir.path().join("nested/b_dark.png")), sample_grid_themed());
}

#[test]
fn test_degenerate_reference_still_converts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ink.png");
    write_png(
        &input,
        &PixelGrid::new(2, 1, vec![Argb::opaque(0, 0, 0), LIGHT]).unwrap(),
    );

    // Pure black light reference: black pixels hit 0/0 and come out as 0
    let cfg = darktheme::models::RunConfig::new(Argb::opaque(0, 0, 0), DARK);
    let output = ThemeConverter::new(&cfg).convert_file(&input).unwrap();

    assert_eq!(read_grid(&output).pixel(0, 0), Some(Argb::opaque(0, 0, 0)));
}
