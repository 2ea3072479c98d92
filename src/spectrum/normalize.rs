//! Mapping real-valued grids onto displayable 8-bit samples.

use ndarray::Array2;

use crate::image::{DisplayGrid, ImageGrid};

/// Linearly rescale a grid so its minimum maps to 0 and its maximum to 255.
///
/// A constant grid has no range to stretch and maps to all zeros.
/// Non-finite samples are left out of the range and map to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_min_max<A>(grid: &Array2<A>) -> DisplayGrid
where
    A: Copy + Into<f64>,
{
    let (min, max) = grid
        .iter()
        .map(|&v| Into::<f64>::into(v))
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let range = max - min;
    // Covers both the constant grid and the grid with no finite samples.
    if !(range.is_finite() && range > 0.0) {
        return Array2::zeros(grid.raw_dim());
    }

    grid.mapv(|v| {
        let v: f64 = v.into();
        if v.is_finite() {
            // Safe: clamped to [0, 255] before casting
            ((v - min) / range * 255.0).clamp(0.0, 255.0).round() as u8
        } else {
            0
        }
    })
}

/// Display path for the original image: samples are shown as decoded.
#[must_use]
pub fn to_display(image: &ImageGrid) -> DisplayGrid {
    image.clone()
}
