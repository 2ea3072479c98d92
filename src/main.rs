//! `fftview` CLI - show an image beside its Fourier magnitude spectrum.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fftview::image::{gray_from_grid, save_image};
use fftview::present::{DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH};
use fftview::spectrum::DEFAULT_MAGNITUDE_FLOOR;
use fftview::{CanvasPresenter, Config, Pipeline};

/// Render a grayscale image and its log-magnitude 2D Fourier spectrum side by side.
#[derive(Parser, Debug)]
#[command(name = "fftview")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path (.jpg, .jpeg, .png, .bmp).
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the side-by-side canvas to this path.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the full-resolution spectrum to this path.
    #[arg(long, value_name = "PATH")]
    spectrum_output: Option<PathBuf>,

    /// Width of the box both images are fitted into.
    #[arg(long, default_value_t = DEFAULT_BOX_WIDTH, value_name = "INT")]
    box_width: u32,

    /// Height of the box both images are fitted into.
    #[arg(long, default_value_t = DEFAULT_BOX_HEIGHT, value_name = "INT")]
    box_height: u32,

    /// Smallest magnitude fed to the logarithm.
    #[arg(long, default_value_t = DEFAULT_MAGNITUDE_FLOOR, value_name = "FLOAT")]
    floor: f64,

    /// Stretch the original image to the full 0-255 range.
    #[arg(long)]
    stretch: bool,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fftview={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        magnitude_floor: args.floor,
        stretch_original: args.stretch,
        box_width: args.box_width,
        box_height: args.box_height,
        output_quality: args.quality,
    };

    let mut pipeline = Pipeline::new(config).context("Invalid configuration")?;
    let mut presenter = CanvasPresenter::new();

    pipeline
        .process(&args.input, &mut presenter)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    let quality = pipeline.config().output_quality;

    if let Some(path) = &args.output {
        let canvas = presenter
            .canvas()
            .context("Presenter produced no canvas")?;
        save_image(canvas, path, quality).context("Failed to write canvas")?;
        println!("Wrote canvas to {}", path.display());
    }

    if let Some(path) = &args.spectrum_output {
        let (_, spectrum) = pipeline
            .state()
            .displayed()
            .context("Spectrum was not rendered")?;
        let img = gray_from_grid(spectrum)?;
        save_image(&img, path, quality).context("Failed to write spectrum")?;
        println!("Wrote spectrum to {}", path.display());
    }

    if args.output.is_none() && args.spectrum_output.is_none() {
        if let Some(canvas) = presenter.canvas() {
            println!(
                "Rendered {} as a {}x{} canvas (use --output to save it)",
                args.input.display(),
                canvas.width(),
                canvas.height()
            );
        }
    }

    Ok(())
}
