//! Image saving utilities.

use std::path::Path;

use image::GrayImage;

use crate::error::{Error, Result};

/// Save a grayscale image to disk.
///
/// The format is inferred from the extension, defaulting to PNG when the
/// extension is missing or not UTF-8.
///
/// # Arguments
///
/// * `img` - Image to write
/// * `path` - Output file path
/// * `quality` - JPEG quality (1-100), ignored for other formats
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written.
pub fn save_image<P: AsRef<Path>>(img: &GrayImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => {
            let mut output = std::fs::File::create(path)?;
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality);
            img.write_with_encoder(encoder)
                .map_err(|source| Error::ImageSave {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        "png" | "bmp" => {
            img.save(path).map_err(|source| Error::ImageSave {
                path: path.to_path_buf(),
                source,
            })?;
        }
        _ => {
            img.save_with_format(path, image::ImageFormat::Png)
                .map_err(|source| Error::ImageSave {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
    }

    tracing::debug!("Wrote {}x{} image to {}", img.width(), img.height(), path.display());

    Ok(())
}
