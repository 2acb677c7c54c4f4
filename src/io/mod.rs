// Copyright @yucwang 2026

pub mod exr_utils;
pub mod image_utils;

use crate::math::bitmap::Bitmap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write EXR image: {0}")]
    Exr(#[from] exr::error::Error),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported output extension `{0}`, expected .exr or .png")]
    UnsupportedFormat(String),
    #[error("image size {width}x{height} does not match {len} pixels")]
    SizeMismatch { width: usize, height: usize, len: usize },
}

/// Write `bitmap` to `file_path`, picking the encoder from the extension:
/// `.exr` keeps linear radiance, `.png` is clamped and gamma corrected.
pub fn write_image(bitmap: &Bitmap, file_path: &str) -> Result<(), OutputError> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let pixels = bitmap.raw_copy();
    match extension.as_str() {
        "exr" => exr_utils::write_exr_to_file(&pixels, bitmap.width(), bitmap.height(), file_path),
        "png" => image_utils::write_png_to_file(&pixels, bitmap.width(), bitmap.height(), file_path),
        _ => Err(OutputError::UnsupportedFormat(extension)),
    }
}
