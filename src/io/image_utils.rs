// Copyright @yucwang 2026

use crate::math::constants::Float;
use super::OutputError;

use image::{ImageBuffer, Rgb};

pub const DISPLAY_GAMMA: Float = 2.2;

/// Clamp to `[0, 1]`, apply display gamma and quantize.
pub fn to_display_byte(linear: Float) -> u8 {
    let v = if linear.is_finite() { linear.max(0.0).min(1.0) } else { 0.0 };
    (v.powf(1.0 / DISPLAY_GAMMA) * 255.0).round() as u8
}

pub fn write_png_to_file(image: &[(Float, Float, Float)],
                         width: usize,
                         height: usize,
                         file_path: &str) -> Result<(), OutputError> {
    if image.len() != width * height {
        return Err(OutputError::SizeMismatch { width, height, len: image.len() });
    }
    log::info!("Starting writing png image: {}.", file_path);

    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let (r, g, b) = image[y as usize * width + x as usize];
        Rgb([to_display_byte(r), to_display_byte(g), to_display_byte(b)])
    });
    buffer.save(file_path)?;

    log::info!("PNG written to: {}.", file_path);
    Ok(())
}
