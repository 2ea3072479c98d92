//! In-memory presenter that composes both images onto one canvas.

use image::{imageops, imageops::FilterType, GrayImage};

use crate::error::{Error, Result};
use crate::image::gray_from_grid;

use super::{Frame, Presenter};

/// Headless presenter holding the most recently composed canvas.
#[derive(Debug, Default)]
pub struct CanvasPresenter {
    canvas: Option<GrayImage>,
}

impl CanvasPresenter {
    /// Create a presenter with nothing drawn yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { canvas: None }
    }

    /// The last composed canvas, if any frame was presented.
    #[must_use]
    pub const fn canvas(&self) -> Option<&GrayImage> {
        self.canvas.as_ref()
    }

    /// Take ownership of the last composed canvas.
    pub fn into_canvas(self) -> Option<GrayImage> {
        self.canvas
    }
}

impl Presenter for CanvasPresenter {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        if frame.original.dim() != frame.spectrum.dim() {
            return Err(Error::ShapeMismatch {
                expected: format!("{:?}", frame.original.dim()),
                actual: format!("{:?}", frame.spectrum.dim()),
            });
        }

        let layout = frame.layout;
        let (canvas_width, canvas_height) = layout.canvas_size();
        let mut canvas = GrayImage::new(canvas_width, canvas_height);

        // Resize both with the same filter so the halves stay comparable
        let original = imageops::resize(
            &gray_from_grid(frame.original)?,
            layout.image_width,
            layout.image_height,
            FilterType::Lanczos3,
        );
        let spectrum = imageops::resize(
            &gray_from_grid(frame.spectrum)?,
            layout.image_width,
            layout.image_height,
            FilterType::Lanczos3,
        );

        imageops::replace(&mut canvas, &original, 0, 0);
        imageops::replace(&mut canvas, &spectrum, i64::from(layout.spectrum_x()), 0);

        tracing::debug!(
            "Composed {canvas_width}x{canvas_height} canvas at scale {:.4}",
            layout.scale
        );

        self.canvas = Some(canvas);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::Layout;
    use ndarray::Array2;

    #[test]
    fn test_halves_land_side_by_side() {
        let original = Array2::from_elem((10, 10), 200u8);
        let spectrum = Array2::from_elem((10, 10), 20u8);
        let layout = Layout::fit(10, 10, 40, 40);
        let mut presenter = CanvasPresenter::new();

        presenter
            .present(&Frame {
                original: &original,
                spectrum: &spectrum,
                layout,
            })
            .unwrap();

        let canvas = presenter.canvas().unwrap();
        assert_eq!(canvas.dimensions(), (40, 20));
        assert_eq!(canvas.get_pixel(5, 10)[0], 200);
        assert_eq!(canvas.get_pixel(30, 10)[0], 20);
    }

    #[test]
    fn test_new_frame_replaces_canvas() {
        let a = Array2::from_elem((4, 8), 1u8);
        let b = Array2::from_elem((8, 4), 2u8);
        let mut presenter = CanvasPresenter::new();

        for grid in [&a, &b] {
            let (h, w) = grid.dim();
            presenter
                .present(&Frame {
                    original: grid,
                    spectrum: grid,
                    layout: Layout::fit(w, h, 100, 100),
                })
                .unwrap();
        }

        let canvas = presenter.into_canvas().unwrap();
        // 4x8 (w x h) in a 100x100 box: scale = min(100/8, 100/8) = 12.5
        assert_eq!(canvas.dimensions(), (100, 100));
        assert!(canvas.pixels().all(|p| p[0] == 2));
    }

    #[test]
    fn test_mismatched_halves_rejected() {
        let original = Array2::<u8>::zeros((4, 4));
        let spectrum = Array2::<u8>::zeros((4, 5));
        let mut presenter = CanvasPresenter::new();

        let err = presenter
            .present(&Frame {
                original: &original,
                spectrum: &spectrum,
                layout: Layout::fit(4, 4, 100, 100),
            })
            .unwrap_err();

        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert!(presenter.canvas().is_none());
    }
}
