//! Image loading utilities.

use std::path::Path;

use crate::error::{Error, Result};

use super::{grid_from_gray, ImageGrid, SUPPORTED_EXTENSIONS};

/// Load an image from disk as an 8-bit grayscale grid.
///
/// Color images are converted to luma; 16-bit images are reduced to 8 bits.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the path is missing, unreadable, or not a
/// decodable image, and [`Error::UnsupportedDimensions`] for empty images.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageGrid> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    grid_from_gray(img.to_luma8())
}

/// Whether the path carries one of the extensions the image picker offers.
///
/// This is a filter only: decoding is attempted for any path.
#[must_use]
pub fn is_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
