//! A single plot area: bar containers, labels, ticks and limits.

use log::debug;

use super::ticks::{format_tick, nice_step, nice_ticks};
use crate::error::{PlotError, PlotResult};
use crate::style::Rgb8;

/// Fraction of the data span added on each non-sticky side when limits are automatic.
const AUTO_MARGIN: f64 = 0.05;
/// Upper bound on the number of automatically placed ticks.
const MAX_AUTO_TICKS: usize = 9;

/// Horizontal anchoring of tick text relative to its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Rect {
    /// Clip vertically to `lo..=hi`. Returns `None` when nothing remains visible.
    pub fn clip_y(&self, lo: f64, hi: f64) -> Option<Rect> {
        let (a, b) = (self.y0.min(self.y1), self.y0.max(self.y1));
        let (a, b) = (a.max(lo), b.min(hi));
        if a >= b {
            return None;
        }
        Some(Rect {
            y0: a,
            y1: b,
            ..*self
        })
    }
}

/// Vertical error indicators attached to a bar container.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBars {
    /// Indicator x positions (bar centres).
    pub x: Vec<f64>,
    /// Bar tops the indicators are centred on.
    pub y: Vec<f64>,
    pub yerr: Vec<f64>,
    pub color: Rgb8,
    /// Cap half-width in data units; `0.0` draws no caps.
    pub capsize: f64,
}

impl ErrorBars {
    /// `(x, low, high)` for every indicator.
    pub fn segments(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .zip(self.yerr.iter())
            .map(|((x, y), e)| (*x, y - e.abs(), y + e.abs()))
    }
}

/// Styling for one `bar` call.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    pub width: f64,
    pub color: Rgb8,
    pub yerr: Option<Vec<f64>>,
    pub ecolor: Rgb8,
    pub capsize: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width: 0.8,
            color: Rgb8::new(31, 119, 180),
            yerr: None,
            ecolor: Rgb8::BLACK,
            capsize: 0.0,
        }
    }
}

/// The bars produced by one `bar` call.
#[derive(Debug, Clone, PartialEq)]
pub struct BarContainer {
    /// Left edges.
    pub x: Vec<f64>,
    pub heights: Vec<f64>,
    pub width: f64,
    pub color: Rgb8,
    pub errorbars: Option<ErrorBars>,
}

impl BarContainer {
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// One rectangle per bar, from the zero baseline to its height.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.x.iter().zip(self.heights.iter()).map(|(x, h)| Rect {
            x0: *x,
            x1: *x + self.width,
            y0: 0.0f64.min(*h),
            y1: 0.0f64.max(*h),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    containers: Vec<BarContainer>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    xticks: Option<Vec<f64>>,
    xticklabels: Option<Vec<String>>,
    ylim: Option<(f64, f64)>,
    xtick_rotation: f64,
    xtick_align: HAlign,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bar series with left edges at `x`.
    ///
    /// ### Errors
    /// `LengthMismatch` when `heights` or `style.yerr` do not have one entry per position.
    pub fn bar(&mut self, x: &[f64], heights: &[f64], style: BarStyle) -> PlotResult<&BarContainer> {
        if heights.len() != x.len() {
            return Err(PlotError::LengthMismatch {
                what: "heights",
                expected: x.len(),
                found: heights.len(),
            });
        }
        let errorbars = match style.yerr {
            Some(yerr) => {
                if yerr.len() != x.len() {
                    return Err(PlotError::LengthMismatch {
                        what: "yerr",
                        expected: x.len(),
                        found: yerr.len(),
                    });
                }
                Some(ErrorBars {
                    x: x.iter().map(|v| v + style.width / 2.0).collect(),
                    y: heights.to_vec(),
                    yerr,
                    color: style.ecolor,
                    capsize: style.capsize,
                })
            }
            None => None,
        };
        debug!("axes: adding {} bars (width {})", x.len(), style.width);
        self.containers.push(BarContainer {
            x: x.to_vec(),
            heights: heights.to_vec(),
            width: style.width,
            color: style.color,
            errorbars,
        });
        // just pushed
        Ok(&self.containers[self.containers.len() - 1])
    }

    pub fn containers(&self) -> &[BarContainer] {
        &self.containers
    }

    /// Total number of bars across all containers.
    pub fn bar_count(&self) -> usize {
        self.containers.iter().map(BarContainer::len).sum()
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    /// Fix tick positions. Any labels set earlier are dropped.
    pub fn set_xticks(&mut self, ticks: Vec<f64>) {
        self.xticks = Some(ticks);
        self.xticklabels = None;
    }

    /// Replace the text of the current ticks, in order.
    pub fn set_xticklabels<S: Into<String>>(
        &mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> PlotResult<()> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let ticks = self.xticks().len();
        if labels.len() != ticks {
            return Err(PlotError::TickLabelMismatch {
                ticks,
                labels: labels.len(),
            });
        }
        if self.xticks.is_none() {
            // pin the automatic positions so the labels stay attached to them
            self.xticks = Some(self.xticks());
        }
        self.xticklabels = Some(labels);
        Ok(())
    }

    /// Resolved tick positions (explicit, or automatic across the x limits).
    pub fn xticks(&self) -> Vec<f64> {
        match &self.xticks {
            Some(t) => t.clone(),
            None => {
                let (lo, hi) = self.xlim();
                nice_ticks(lo, hi, MAX_AUTO_TICKS)
            }
        }
    }

    /// Resolved tick text: explicit labels, or the formatted tick positions.
    pub fn xtick_labels(&self) -> Vec<String> {
        match &self.xticklabels {
            Some(l) => l.clone(),
            None => self.xticks().into_iter().map(format_tick).collect(),
        }
    }

    pub fn has_custom_xticklabels(&self) -> bool {
        self.xticklabels.is_some()
    }

    pub fn set_xtick_rotation(&mut self, degrees: f64, align: HAlign) {
        self.xtick_rotation = degrees;
        self.xtick_align = align;
    }

    pub fn xtick_rotation(&self) -> f64 {
        self.xtick_rotation
    }

    pub fn xtick_align(&self) -> HAlign {
        self.xtick_align
    }

    pub fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.ylim = Some((lo, hi));
    }

    /// Current y limits: fixed if set, otherwise data extents with margins.
    ///
    /// The zero baseline of bars is sticky and never receives a margin.
    pub fn ylim(&self) -> (f64, f64) {
        if let Some(l) = self.ylim {
            return l;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for c in &self.containers {
            for r in c.rects() {
                lo = lo.min(r.y0);
                hi = hi.max(r.y1);
            }
            if let Some(eb) = &c.errorbars {
                for (_, a, b) in eb.segments() {
                    lo = lo.min(a);
                    hi = hi.max(b);
                }
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        let span = hi - lo;
        if span <= 0.0 {
            return (lo - 0.5, hi + 0.5);
        }
        let lo = if lo == 0.0 { lo } else { lo - span * AUTO_MARGIN };
        let hi = if hi == 0.0 { hi } else { hi + span * AUTO_MARGIN };
        (lo, hi)
    }

    /// Bar extents with margins; `(0, 1)` for empty axes.
    pub fn xlim(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for c in &self.containers {
            for r in c.rects() {
                lo = lo.min(r.x0);
                hi = hi.max(r.x1);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        let pad = (hi - lo) * AUTO_MARGIN;
        (lo - pad, hi + pad)
    }

    /// Y tick positions within the current limits.
    pub fn yticks(&self) -> Vec<f64> {
        let (lo, hi) = self.ylim();
        nice_ticks(lo, hi, 6)
    }

    /// Step between y ticks, used to pick the label precision.
    pub fn ytick_step(&self) -> f64 {
        let (lo, hi) = self.ylim();
        nice_step(lo, hi, 6)
    }
}
