//! Pipeline states and the artifacts each one owns.

use std::fmt;

use crate::image::{DisplayGrid, ImageGrid};
use crate::spectrum::MagnitudeSpectrumGrid;

/// Where the pipeline is, with every artifact produced for the current load.
///
/// Each state owns its grids outright; a new load replaces the whole value.
#[derive(Debug, Clone, Default)]
pub enum PipelineState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// An image was decoded.
    ImageLoaded { image: ImageGrid },
    /// The magnitude spectrum of the loaded image is ready.
    SpectrumComputed {
        image: ImageGrid,
        spectrum: MagnitudeSpectrumGrid,
    },
    /// Both display grids were handed to a presenter.
    Displayed {
        image: ImageGrid,
        spectrum: MagnitudeSpectrumGrid,
        original_display: DisplayGrid,
        spectrum_display: DisplayGrid,
    },
}

impl PipelineState {
    /// The state's discriminant, without its artifacts.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::ImageLoaded { .. } => Phase::ImageLoaded,
            Self::SpectrumComputed { .. } => Phase::SpectrumComputed,
            Self::Displayed { .. } => Phase::Displayed,
        }
    }

    /// The loaded image, in every state but `Idle`.
    #[must_use]
    pub const fn image(&self) -> Option<&ImageGrid> {
        match self {
            Self::Idle => None,
            Self::ImageLoaded { image }
            | Self::SpectrumComputed { image, .. }
            | Self::Displayed { image, .. } => Some(image),
        }
    }

    /// The magnitude spectrum, once computed.
    #[must_use]
    pub const fn spectrum(&self) -> Option<&MagnitudeSpectrumGrid> {
        match self {
            Self::SpectrumComputed { spectrum, .. } | Self::Displayed { spectrum, .. } => {
                Some(spectrum)
            }
            _ => None,
        }
    }

    /// The `(original, spectrum)` display grids, once rendered.
    #[must_use]
    pub const fn displayed(&self) -> Option<(&DisplayGrid, &DisplayGrid)> {
        match self {
            Self::Displayed {
                original_display,
                spectrum_display,
                ..
            } => Some((original_display, spectrum_display)),
            _ => None,
        }
    }
}

/// Pipeline state without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageLoaded,
    SpectrumComputed,
    Displayed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ImageLoaded => "image loaded",
            Self::SpectrumComputed => "spectrum computed",
            Self::Displayed => "displayed",
        };
        f.write_str(name)
    }
}
