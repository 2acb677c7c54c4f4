/* Copyright 2020 @TwoCookingMice */

use crate::math::constants::Float;
use super::OutputError;

use exr::prelude::*;

// Write EXR Image to file
pub fn write_exr_to_file(image: &[(Float, Float, Float)],
                         width: usize,
                         height: usize,
                         file_path: &str) -> std::result::Result<(), OutputError> {
    if image.len() != width * height {
        return Err(OutputError::SizeMismatch { width, height, len: image.len() });
    }
    log::info!("Starting writing openexr images: {}.", file_path);

    write_rgb_file(file_path, width, height, |x, y| {
        (
            image[y * width + x].0,
            image[y * width + x].1,
            image[y * width + x].2
        )
    })?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}
