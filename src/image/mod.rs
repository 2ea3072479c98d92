//! Image loading, grid conversion, and saving utilities.

mod load;
mod save;

pub use load::{is_supported_extension, load_image};
pub use save::save_image;

use image::GrayImage;
use ndarray::Array2;

use crate::error::{Error, Result};

/// Grayscale intensity samples as decoded from disk, shape `(height, width)`.
pub type ImageGrid = Array2<u8>;

/// 8-bit samples ready to hand to a presenter, shape `(height, width)`.
pub type DisplayGrid = Array2<u8>;

/// File extensions offered by the image picker.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// Convert a decoded luma image into a row-major grid.
///
/// # Errors
///
/// Returns an error if the image has a zero-sized side.
pub fn grid_from_gray(img: GrayImage) -> Result<ImageGrid> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    if width == 0 || height == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: "image must be at least 1x1".to_string(),
        });
    }

    Array2::from_shape_vec((height, width), img.into_raw()).map_err(|_| Error::ShapeMismatch {
        expected: format!("{height}x{width} samples"),
        actual: "buffer of a different length".to_string(),
    })
}

/// Convert an 8-bit grid back into a luma image.
///
/// # Errors
///
/// Returns an error if a side does not fit in `u32`.
pub fn gray_from_grid(grid: &Array2<u8>) -> Result<GrayImage> {
    let (height, width) = grid.dim();
    let too_large = || Error::UnsupportedDimensions {
        width,
        height,
        reason: "side exceeds u32::MAX".to_string(),
    };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;

    // `iter` walks in logical row-major order regardless of memory layout.
    GrayImage::from_raw(w, h, grid.iter().copied().collect()).ok_or_else(|| Error::ShapeMismatch {
        expected: format!("{height}x{width} samples"),
        actual: format!("{} samples", grid.len()),
    })
}
