//! Custom error types for fftview.

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::Phase;

/// Main error type for the fftview library.
#[derive(Error, Debug)]
pub enum Error {
    /// The path does not resolve to a decodable image.
    #[error("failed to decode image from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image dimensions are not supported.
    #[error("unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: usize,
        height: usize,
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A pipeline step was requested from a state that does not allow it.
    #[error("cannot {action} while pipeline is {phase}")]
    InvalidTransition { phase: Phase, action: &'static str },

    /// Two grids that must share a shape do not.
    #[error("grid shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fftview operations.
pub type Result<T> = std::result::Result<T, Error>;
