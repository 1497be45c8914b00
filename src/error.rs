//! Errors raised by the plotting layer.
//!
//! The bar graph widget performs no validation of its own; anything the figure model or
//! a renderer rejects surfaces here and is handed back to the caller unchanged.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    /// A per-bar sequence does not line up with the bar positions.
    #[error("shape mismatch: {what} has {found} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// `set_xticklabels` was given a different number of labels than there are ticks.
    #[error("number of tick labels ({labels}) does not match number of ticks ({ticks})")]
    TickLabelMismatch { ticks: usize, labels: usize },

    #[error("figure has no axes to render")]
    NoAxes,

    /// Zero-sized (or otherwise unusable) render target.
    #[error("invalid render size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Failure reported by the drawing backend.
    #[error("render failed: {0}")]
    Render(String),
}

impl PlotError {
    /// Wrap any backend error (plotters reports through `Debug`).
    pub(crate) fn render<E: std::fmt::Debug>(e: E) -> Self {
        PlotError::Render(format!("{:?}", e))
    }
}

pub type PlotResult<T> = Result<T, PlotError>;
