//! Bar chart widget with optional error indicators.
//!
//! Every [`BarGraphGeneric::draw`] builds a fresh [`Figure`]:
//! - one green bar per category at positions `0..N`, width [`BAR_WIDTH`]
//! - error indicators from `error_primary`
//! - y axis fixed to [`Y_RANGE`] and labelled [`Y_AXIS_LABEL`]
//! - ticks one bar width right of each group's left edge, labelled with
//!   `tick_labels` or their positions
//! - rotated tick text
//!
//! The figure is bound to the plot base, which renders it to fit the display area.

use log::debug;

use crate::error::PlotResult;
use crate::models::DrawOptions;
use crate::plot::ticks::arange;
use crate::plot::{BarStyle, Figure};
use crate::plot_base::PlotBase;
use crate::render::{BitmapRenderer, RenderBackend};
use crate::style::Rgb8;

pub const BAR_WIDTH: f64 = 0.35;
pub const Y_AXIS_LABEL: &str = "Tree Crossing Fit";
pub const Y_RANGE: (f64, f64) = (0.0, 1.0);
/// Bar fill (`g`, half-intensity green).
pub const BAR_COLOR: Rgb8 = Rgb8::GREEN;

/// Tick-label rotation in degrees and the bottom fraction reserved for it.
const TICK_ROTATION: f64 = 30.0;
const TICK_BOTTOM: f64 = 0.2;

pub struct BarGraphGeneric<R: RenderBackend = BitmapRenderer> {
    base: PlotBase<R>,
}

impl<R: RenderBackend + Default> Default for BarGraphGeneric<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: RenderBackend> BarGraphGeneric<R> {
    /// A widget with a white background; nothing is drawn until [`Self::draw`].
    pub fn new(renderer: R) -> Self {
        Self {
            base: PlotBase::new(renderer, Rgb8::WHITE),
        }
    }

    /// Replace the chart with `values` over `categories`.
    ///
    /// Only `categories.len()` is used. Inputs are not validated here: length
    /// mismatches are reported by the figure model and returned unchanged, and the
    /// previous chart stays on screen in that case. A renderer error comes after the
    /// new figure is bound: [`Self::figure`] is the new chart and [`Self::canvas`] is `None`.
    pub fn draw<C>(
        &mut self,
        categories: &[C],
        values: &[f64],
        options: &DrawOptions,
    ) -> PlotResult<()> {
        let n = categories.len();
        let ind = arange(n);

        let mut figure = Figure::new();
        let ax = figure.add_subplot();
        ax.bar(
            &ind,
            values,
            BarStyle {
                width: BAR_WIDTH,
                color: BAR_COLOR,
                yerr: options.error_primary.clone(),
                ..BarStyle::default()
            },
        )?;
        if options.error_secondary.is_some() {
            debug!("bar graph: secondary error magnitudes supplied, not rendered");
        }

        ax.set_ylabel(Y_AXIS_LABEL);
        if let Some(label) = &options.axis_label {
            ax.set_xlabel(label.clone());
        }
        ax.set_xticks(ind.iter().map(|i| i + BAR_WIDTH).collect());
        if let Some(labels) = &options.tick_labels {
            ax.set_xticklabels(labels.iter().cloned())?;
        }
        ax.set_ylim(Y_RANGE.0, Y_RANGE.1);

        figure.autofmt_xdate(TICK_BOTTOM, TICK_ROTATION);

        debug!("bar graph: drawing {} bars", n);
        self.base.set_figure(figure);
        self.base.set_plot_size()
    }

    /// Forward a new display area from the parent; re-fits the current chart.
    pub fn resize(&mut self, size: (u32, u32)) -> PlotResult<()> {
        self.base.resize(size)
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.base.figure()
    }

    pub fn canvas(&self) -> Option<&R::Surface> {
        self.base.canvas()
    }

    pub fn base(&self) -> &PlotBase<R> {
        &self.base
    }
}
