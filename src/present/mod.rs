//! Side-by-side presentation of the original image and its spectrum.

mod canvas;
mod layout;

pub use canvas::CanvasPresenter;
pub use layout::{Layout, DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH};

use crate::error::Result;
use crate::image::DisplayGrid;

/// Everything a presenter needs to draw one loaded image.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Original image samples, at native resolution.
    pub original: &'a DisplayGrid,
    /// Normalized spectrum samples, same shape as `original`.
    pub spectrum: &'a DisplayGrid,
    /// Where and how large to draw each grid.
    pub layout: Layout,
}

/// Renders a frame somewhere: a window, a canvas in memory, a file.
pub trait Presenter {
    /// Draw the frame, replacing whatever was drawn before.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be rendered.
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}
