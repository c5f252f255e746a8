//! Charts module - Chart rendering

mod interactive;
mod renderer;

pub use interactive::InteractiveChart;
pub use renderer::StaticChartRenderer;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to draw {chart} chart: {message}")]
    Drawing { chart: &'static str, message: String },
    #[error("Failed to serialize chart data: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    fn drawing(chart: &'static str, err: Box<dyn std::error::Error>) -> Self {
        RenderError::Drawing {
            chart,
            message: err.to_string(),
        }
    }
}

/// Open a written chart with the system default application.
///
/// Headless environments have no viewer; that is logged, not fatal.
pub fn open_chart(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!("Could not open {}: {}", path.display(), e);
    }
}
