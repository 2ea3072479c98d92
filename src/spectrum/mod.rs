//! Frequency-domain view of an image: transform and display scaling.

mod normalize;
mod transform;

pub use normalize::{normalize_min_max, to_display};
pub use transform::{fft2, fftshift, log_magnitude, magnitude_spectrum};

use ndarray::Array2;
use num_complex::Complex64;

/// Forward DFT coefficients, same shape as the source grid.
pub type ComplexSpectrumGrid = Array2<Complex64>;

/// Log-scaled magnitudes in decibels, not yet bounded to a display range.
pub type MagnitudeSpectrumGrid = Array2<f64>;

/// Magnitudes below this are clamped before taking the logarithm (-200 dB).
pub const DEFAULT_MAGNITUDE_FLOOR: f64 = 1e-10;
