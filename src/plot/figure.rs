//! Top-level figure: owns its axes and the figure-wide layout settings.

use log::debug;

use super::axes::{Axes, HAlign};
use crate::style::Rgb8;

/// Default fraction of the figure height below the bottom axes.
pub const DEFAULT_SUBPLOT_BOTTOM: f64 = 0.11;

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    axes: Vec<Axes>,
    facecolor: Rgb8,
    subplot_bottom: f64,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// A new, empty figure. Every figure is independent; there is no "current figure".
    pub fn new() -> Self {
        Self {
            axes: Vec::new(),
            facecolor: Rgb8::WHITE,
            subplot_bottom: DEFAULT_SUBPLOT_BOTTOM,
        }
    }

    /// Add a full-size subplot (the `111` layout) and return it.
    pub fn add_subplot(&mut self) -> &mut Axes {
        self.axes.push(Axes::new());
        debug!("figure: added subplot #{}", self.axes.len());
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn facecolor(&self) -> Rgb8 {
        self.facecolor
    }

    pub fn set_facecolor(&mut self, color: Rgb8) {
        self.facecolor = color;
    }

    /// Fraction of the figure height reserved below the axes for tick text and labels.
    pub fn subplot_bottom(&self) -> f64 {
        self.subplot_bottom
    }

    /// Rotate and right-align x tick labels so long (date-like) labels don't overlap,
    /// and reserve `bottom` of the figure height for them.
    ///
    /// The angle is recorded as given. Renderers can only turn text in quarter turns, so
    /// any non-zero rotation is drawn as vertical text ending at the tick.
    pub fn autofmt_xdate(&mut self, bottom: f64, rotation: f64) {
        for ax in &mut self.axes {
            ax.set_xtick_rotation(rotation, HAlign::Right);
        }
        self.subplot_bottom = bottom.clamp(0.0, 0.9);
    }

    /// Total bars across all axes.
    pub fn bar_count(&self) -> usize {
        self.axes.iter().map(Axes::bar_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_figure_is_empty_and_white() {
        let f = Figure::new();
        assert!(f.axes().is_empty());
        assert_eq!(f.facecolor(), Rgb8::WHITE);
        assert_eq!(f.bar_count(), 0);
    }

    #[test]
    fn autofmt_rotates_every_axes() {
        let mut f = Figure::new();
        f.add_subplot();
        f.add_subplot();
        f.autofmt_xdate(0.2, 30.0);
        assert!(f.axes().iter().all(|a| a.xtick_rotation() == 30.0));
        assert!(f.axes().iter().all(|a| a.xtick_align() == HAlign::Right));
        assert_eq!(f.subplot_bottom(), 0.2);
    }
}
