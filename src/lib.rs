//! # fftview
//!
//! View a grayscale image next to the log-magnitude spectrum of its 2D
//! discrete Fourier transform.
//!
//! The spectrum is computed with a separable FFT, shifted so the
//! zero-frequency term sits in the middle, compressed to decibels, and
//! stretched onto 0-255 for display. Zero magnitudes are clamped to a small
//! floor and constant grids normalize to black, so no NaN or infinity ever
//! reaches the screen.
//!
//! ## Example
//!
//! ```no_run
//! use fftview::{CanvasPresenter, Config, Pipeline};
//!
//! # fn main() -> fftview::Result<()> {
//! let mut pipeline = Pipeline::new(Config::default())?;
//! let mut presenter = CanvasPresenter::new();
//!
//! pipeline.process("photo.png", &mut presenter)?;
//! let canvas = presenter.canvas().expect("frame was presented");
//! println!("{}x{}", canvas.width(), canvas.height());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;
pub mod present;
pub mod spectrum;

pub use error::{Error, Result};
pub use pipeline::{Config, Phase, Pipeline, PipelineState};
pub use present::{CanvasPresenter, Frame, Layout, Presenter};
