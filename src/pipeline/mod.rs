//! Load → transform → normalize → render, as an explicit state machine.

mod config;
mod controller;
mod state;

pub use config::Config;
pub use controller::Pipeline;
pub use state::{Phase, PipelineState};
