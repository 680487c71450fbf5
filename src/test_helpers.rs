//! Shared test fixtures for the densify test suite.
//!
//! Synthetic image writers used by backend and orchestration tests. The
//! pixel pattern is deterministic so pixel-equality assertions are stable
//! across runs.

use image::{ImageEncoder, RgbImage};
use std::path::Path;

fn test_pattern(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a valid PNG with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = test_pattern(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a valid JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = test_pattern(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}
