//! Load, transform, and render driven by explicit state transitions.

use std::path::Path;

use crate::error::{Error, Result};
use crate::image::{self, ImageGrid};
use crate::present::{Frame, Layout, Presenter};
use crate::spectrum::{magnitude_spectrum, normalize_min_max, to_display};

use super::{Config, Phase, PipelineState};

/// Image-to-spectrum pipeline for one image at a time.
///
/// Every successful load starts over from a fresh [`PipelineState::ImageLoaded`];
/// nothing is carried across loads.
#[derive(Debug)]
pub struct Pipeline {
    config: Config,
    state: PipelineState,
}

impl Pipeline {
    /// Create an idle pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing pipeline with config: {config:?}");

        Ok(Self {
            config,
            state: PipelineState::Idle,
        })
    }

    /// The pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The current state and its artifacts.
    #[must_use]
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Decode an image file and make it the current image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the file cannot be decoded. The pipeline
    /// state is left untouched on failure.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        if !image::is_supported_extension(path) {
            tracing::warn!(
                "{} does not have a supported extension ({}), trying anyway",
                path.display(),
                image::SUPPORTED_EXTENSIONS.join(", ")
            );
        }

        let grid = image::load_image(path)?;
        tracing::info!("Loaded {}", path.display());

        self.load_grid(grid)
    }

    /// Make an in-memory grid the current image, discarding prior artifacts.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has a zero-sized side; the state is
    /// left untouched.
    pub fn load_grid(&mut self, image: ImageGrid) -> Result<()> {
        let (height, width) = image.dim();
        if width == 0 || height == 0 {
            return Err(Error::UnsupportedDimensions {
                width,
                height,
                reason: "image must be at least 1x1".to_string(),
            });
        }

        tracing::debug!("Image grid {width}x{height}");
        self.state = PipelineState::ImageLoaded { image };
        Ok(())
    }

    /// Compute the magnitude spectrum of the loaded image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] unless an image was just loaded.
    pub fn compute(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            PipelineState::ImageLoaded { image } => {
                let spectrum = magnitude_spectrum(&image, self.config.magnitude_floor);

                let (lo, hi) = spectrum
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                        (lo.min(v), hi.max(v))
                    });
                tracing::debug!("Spectrum range {lo:.2} dB to {hi:.2} dB");

                self.state = PipelineState::SpectrumComputed { image, spectrum };
                Ok(())
            }
            other => {
                let phase = other.phase();
                self.state = other;
                Err(Error::InvalidTransition {
                    phase,
                    action: "compute spectrum",
                })
            }
        }
    }

    /// Normalize both grids and hand them to the presenter.
    ///
    /// Rendering again from [`Phase::Displayed`] re-presents the same image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] before a spectrum was computed,
    /// or the presenter's error. The state is left untouched on failure.
    pub fn render<R: Presenter + ?Sized>(&mut self, presenter: &mut R) -> Result<()> {
        let (image, spectrum, previous) = match std::mem::take(&mut self.state) {
            PipelineState::SpectrumComputed { image, spectrum } => (image, spectrum, None),
            PipelineState::Displayed {
                image,
                spectrum,
                original_display,
                spectrum_display,
            } => (image, spectrum, Some((original_display, spectrum_display))),
            other => {
                let phase = other.phase();
                self.state = other;
                return Err(Error::InvalidTransition {
                    phase,
                    action: "render",
                });
            }
        };

        let original_display = if self.config.stretch_original {
            normalize_min_max(&image)
        } else {
            to_display(&image)
        };
        let spectrum_display = normalize_min_max(&spectrum);

        let (height, width) = image.dim();
        let layout = Layout::fit(width, height, self.config.box_width, self.config.box_height);

        let presented = presenter.present(&Frame {
            original: &original_display,
            spectrum: &spectrum_display,
            layout,
        });

        if let Err(err) = presented {
            self.state = match previous {
                Some((original_display, spectrum_display)) => PipelineState::Displayed {
                    image,
                    spectrum,
                    original_display,
                    spectrum_display,
                },
                None => PipelineState::SpectrumComputed { image, spectrum },
            };
            return Err(err);
        }

        let (canvas_width, canvas_height) = layout.canvas_size();
        tracing::info!("Displayed {width}x{height} image on a {canvas_width}x{canvas_height} canvas");

        self.state = PipelineState::Displayed {
            image,
            spectrum,
            original_display,
            spectrum_display,
        };
        Ok(())
    }

    /// Handle one image selection: load, compute, and render.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails. A failed load leaves the
    /// previously displayed image in place.
    pub fn process<P: AsRef<Path>, R: Presenter + ?Sized>(
        &mut self,
        path: P,
        presenter: &mut R,
    ) -> Result<()> {
        self.load(path)?;
        self.compute()?;
        self.render(presenter)
    }
}
