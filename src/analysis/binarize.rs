//! Grayscale image loading and intensity thresholding
//!
//! The counting core never touches pixel intensities; this module is the
//! boundary that turns a decoded image into the binary occupancy mask the
//! core consumes.

use ndarray::Array2;
use std::path::Path;

use crate::io::error::{BoxCountError, Result};
use crate::spatial::mask::BinaryMask;

/// Load an image file and convert it to an 8-bit luma intensity raster
///
/// Any format the `image` crate can decode is accepted; color inputs are
/// collapsed to luminance before thresholding.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable
/// image.
pub fn load_intensities<P: AsRef<Path>>(path: P) -> Result<Array2<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| BoxCountError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let luma = img.to_luma8();

    let (width, height) = (luma.width() as usize, luma.height() as usize);
    let mut intensities = Array2::zeros((height, width));

    for (x, y, pixel) in luma.enumerate_pixels() {
        let value = pixel.0.first().copied().unwrap_or(0);
        if let Some(cell) = intensities.get_mut((y as usize, x as usize)) {
            *cell = value;
        }
    }

    Ok(intensities)
}

/// Threshold an intensity raster into a binary occupancy mask
///
/// Pixels strictly below `threshold` become foreground, matching the
/// dark-pattern-on-light-background convention.
pub fn threshold_mask(intensities: &Array2<u8>, threshold: u8) -> BinaryMask {
    BinaryMask::from_intensities(intensities, threshold)
}

/// Load an image and binarize it in one step
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or decoded.
pub fn mask_from_image<P: AsRef<Path>>(path: P, threshold: u8) -> Result<BinaryMask> {
    let intensities = load_intensities(path)?;
    Ok(threshold_mask(&intensities, threshold))
}
