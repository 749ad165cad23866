use std::path::Path;

use image::imageops::FilterType;

pub const CHANNELS: usize = 3;

/// Decodes an image, forces 3-channel RGB (dropping any embedded metadata),
/// resizes to a `side`-pixel square with bilinear-style filtering, and
/// scales to f32 in [0, 1]. Layout is row-major HWC.
pub fn load_unit_rgb(path: &Path, side: u32) -> Result<Vec<f32>, image::ImageError> {
    let img = image::open(path)?;
    let rgb = img.resize_exact(side, side, FilterType::Triangle).to_rgb8();
    Ok(rgb.as_raw().iter().map(|&v| v as f32 / 255.0).collect())
}

pub fn sample_len(side: u32) -> usize {
    side as usize * side as usize * CHANNELS
}
