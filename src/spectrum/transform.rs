//! Forward 2D Fourier transform and log-magnitude spectrum.

use ndarray::{Array2, Axis};
use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::image::ImageGrid;

use super::{ComplexSpectrumGrid, MagnitudeSpectrumGrid};

/// Unnormalized forward 2D DFT of an intensity grid.
///
/// Separable: a 1D FFT over every row, then over every column. The DC term
/// at `(0, 0)` equals the sum of all samples.
#[must_use]
pub fn fft2(image: &ImageGrid) -> ComplexSpectrumGrid {
    let (height, width) = image.dim();
    let mut spectrum = image.mapv(|v| Complex64::new(f64::from(v), 0.0));

    let mut planner = FftPlanner::<f64>::new();
    let row_fft = planner.plan_fft_forward(width);
    let col_fft = planner.plan_fft_forward(height);

    let mut buf = vec![Complex64::default(); width];
    for mut row in spectrum.axis_iter_mut(Axis(0)) {
        buf.iter_mut().zip(row.iter()).for_each(|(b, &v)| *b = v);
        row_fft.process(&mut buf);
        row.iter_mut().zip(&buf).for_each(|(v, &b)| *v = b);
    }

    let mut buf = vec![Complex64::default(); height];
    for mut col in spectrum.axis_iter_mut(Axis(1)) {
        buf.iter_mut().zip(col.iter()).for_each(|(b, &v)| *b = v);
        col_fft.process(&mut buf);
        col.iter_mut().zip(&buf).for_each(|(v, &b)| *v = b);
    }

    spectrum
}

/// Move the zero-frequency term from `(0, 0)` to `(H / 2, W / 2)`.
///
/// Each axis is rolled by `n / 2`, which swaps opposite quadrants for even
/// sizes and still centers DC for odd ones.
#[must_use]
pub fn fftshift<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (height, width) = grid.dim();
    let (dy, dx) = (height / 2, width / 2);

    Array2::from_shape_fn((height, width), |(r, c)| {
        grid[[(r + height - dy) % height, (c + width - dx) % width]].clone()
    })
}

/// `20 * log10(|z|)` per element, with `|z|` clamped to at least `floor`.
///
/// `floor` must be positive and finite; the result is then always finite.
#[must_use]
pub fn log_magnitude(spectrum: &ComplexSpectrumGrid, floor: f64) -> MagnitudeSpectrumGrid {
    spectrum.mapv(|z| 20.0 * z.norm().max(floor).log10())
}

/// Centered log-magnitude spectrum of an intensity grid.
#[must_use]
pub fn magnitude_spectrum(image: &ImageGrid, floor: f64) -> MagnitudeSpectrumGrid {
    log_magnitude(&fftshift(&fft2(image)), floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::DEFAULT_MAGNITUDE_FLOOR;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::TAU;

    /// Direct O(H²W²) DFT used as the reference.
    #[allow(clippy::cast_precision_loss)]
    fn dft2_direct(image: &ImageGrid) -> ComplexSpectrumGrid {
        let (h, w) = image.dim();
        Array2::from_shape_fn((h, w), |(u, v)| {
            let mut acc = Complex64::default();
            for ((y, x), &s) in image.indexed_iter() {
                let phase = -TAU * ((u * y) as f64 / h as f64 + (v * x) as f64 / w as f64);
                acc += Complex64::from_polar(f64::from(s), phase);
            }
            acc
        })
    }

    fn random_grid(h: usize, w: usize, seed: u64) -> ImageGrid {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Array2::from_shape_fn((h, w), |_| rng.random::<u8>())
    }

    #[test]
    fn test_fft2_matches_direct_dft() {
        for &(h, w) in &[(1, 1), (1, 7), (4, 4), (5, 3), (6, 9), (8, 8)] {
            let image = random_grid(h, w, (h * 31 + w) as u64);
            let fast = fft2(&image);
            let slow = dft2_direct(&image);

            for (a, b) in fast.iter().zip(slow.iter()) {
                assert_relative_eq!(a.re, b.re, epsilon = 1e-6);
                assert_relative_eq!(a.im, b.im, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_fft2_dc_is_sample_sum() {
        let image = random_grid(7, 5, 42);
        let sum: f64 = image.iter().map(|&v| f64::from(v)).sum();

        let spectrum = fft2(&image);

        assert_relative_eq!(spectrum[[0, 0]].re, sum, epsilon = 1e-6);
        assert_relative_eq!(spectrum[[0, 0]].im, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fftshift_centers_origin() {
        for &(h, w) in &[(1, 1), (2, 2), (3, 5), (4, 4), (7, 6)] {
            let mut grid = Array2::<u32>::zeros((h, w));
            grid[[0, 0]] = 1;

            let shifted = fftshift(&grid);

            assert_eq!(shifted[[h / 2, w / 2]], 1, "shape {h}x{w}");
            assert_eq!(shifted.sum(), 1);
        }
    }

    #[test]
    fn test_fftshift_swaps_quadrants() {
        let grid = ndarray::arr2(&[[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);

        let shifted = fftshift(&grid);

        let expected =
            ndarray::arr2(&[[11, 12, 9, 10], [15, 16, 13, 14], [3, 4, 1, 2], [7, 8, 5, 6]]);
        assert_eq!(shifted, expected);
    }

    #[test]
    fn test_log_magnitude_clamps_zero() {
        let spectrum = ndarray::arr2(&[[Complex64::new(0.0, 0.0), Complex64::new(3.0, 4.0)]]);

        let db = log_magnitude(&spectrum, 1e-10);

        assert_relative_eq!(db[[0, 0]], -200.0, epsilon = 1e-9);
        assert_relative_eq!(db[[0, 1]], 20.0 * 5.0_f64.log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_magnitude_spectrum_shape_and_finite() {
        let image = Array2::<u8>::zeros((3, 8));

        let db = magnitude_spectrum(&image, DEFAULT_MAGNITUDE_FLOOR);

        assert_eq!(db.dim(), (3, 8));
        assert!(db.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_constant_grid_has_single_dc_peak() {
        let image = Array2::from_elem((4, 4), 100u8);

        let db = magnitude_spectrum(&image, DEFAULT_MAGNITUDE_FLOOR);

        assert_relative_eq!(db[[2, 2]], 20.0 * 1600.0_f64.log10(), epsilon = 1e-9);
        for ((r, c), &v) in db.indexed_iter() {
            if (r, c) != (2, 2) {
                assert!(v < -150.0, "({r}, {c}) = {v}");
            }
        }
    }
}
