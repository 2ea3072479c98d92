//! Fitting two equally sized images side by side into a bounding box.

/// Default bounding box width, shared by both images.
pub const DEFAULT_BOX_WIDTH: u32 = 500;

/// Default bounding box height.
pub const DEFAULT_BOX_HEIGHT: u32 = 500;

/// Scaled placement of the original (left) and spectrum (right) images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Uniform scale applied to both images.
    pub scale: f64,
    /// Width of each image on the canvas.
    pub image_width: u32,
    /// Height of each image on the canvas.
    pub image_height: u32,
}

impl Layout {
    /// Fit a pair of `width x height` images side by side into the box.
    ///
    /// The box width is split between the two images and the height is
    /// shared, so `scale = min(box_width / (2 * width), box_height / height)`.
    /// Scaled sides are truncated and never drop below one pixel.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn fit(width: usize, height: usize, box_width: u32, box_height: u32) -> Self {
        let (w, h) = (width.max(1) as f64, height.max(1) as f64);

        let scale_width = f64::from(box_width) / (2.0 * w);
        let scale_height = f64::from(box_height) / h;
        let scale = scale_width.min(scale_height);

        // Safe: scaled sides are bounded by the box, which fits in u32
        let image_width = ((w * scale) as u32).max(1);
        let image_height = ((h * scale) as u32).max(1);

        Self {
            scale,
            image_width,
            image_height,
        }
    }

    /// Horizontal offset of the spectrum image.
    #[must_use]
    pub const fn spectrum_x(&self) -> u32 {
        self.image_width
    }

    /// Total canvas size `(width, height)` holding both images.
    #[must_use]
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.image_width * 2, self.image_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_image_limited_by_width() {
        let layout = Layout::fit(100, 100, 500, 500);

        assert_relative_eq!(layout.scale, 2.5);
        assert_eq!((layout.image_width, layout.image_height), (250, 250));
        assert_eq!(layout.canvas_size(), (500, 250));
        assert_eq!(layout.spectrum_x(), 250);
    }

    #[test]
    fn test_tall_image_limited_by_height() {
        let layout = Layout::fit(100, 1000, 500, 500);

        assert_relative_eq!(layout.scale, 0.5);
        assert_eq!((layout.image_width, layout.image_height), (50, 500));
        assert_eq!(layout.canvas_size(), (100, 500));
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let layout = Layout::fit(640, 480, 500, 500);

        assert_eq!((layout.image_width, layout.image_height), (250, 187));
    }

    #[test]
    fn test_sides_never_collapse() {
        let layout = Layout::fit(1, 1000, 500, 500);

        assert_eq!(layout.image_width, 1);
        assert_eq!(layout.image_height, 500);
    }
}
