//! A renderer that draws nothing and records what it was asked to draw.

use serde::Serialize;

use super::{RenderBackend, check_size};
use crate::error::{PlotError, PlotResult};
use crate::plot::Figure;

/// What a render pass would have put on screen for the first axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedSurface {
    pub size: (u32, u32),
    pub bar_count: usize,
    pub ylim: (f64, f64),
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub xtick_labels: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub render_count: usize,
    pub last: Option<RecordedSurface>,
}

impl RenderBackend for RecordingRenderer {
    type Surface = RecordedSurface;

    fn render(&mut self, figure: &Figure, size: (u32, u32)) -> PlotResult<RecordedSurface> {
        check_size(size)?;
        let ax = figure.axes().first().ok_or(PlotError::NoAxes)?;
        let surface = RecordedSurface {
            size,
            bar_count: figure.bar_count(),
            ylim: ax.ylim(),
            xlabel: ax.xlabel().map(str::to_string),
            ylabel: ax.ylabel().map(str::to_string),
            xtick_labels: ax.xtick_labels(),
        };
        self.render_count += 1;
        self.last = Some(surface.clone());
        Ok(surface)
    }
}
