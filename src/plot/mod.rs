//! Figure/axes object model used by the bar graph widget.
//!
//! - `Figure` owns one or more `Axes`; nothing is global
//! - `Axes::bar` builds `BarContainer`s with optional `ErrorBars`
//! - Labels, fixed tick positions with optional text, fixed or automatic limits
//! - Tick-label rotation (`Figure::autofmt_xdate`)
//!
//! Pixels are produced separately by a [`crate::render::RenderBackend`].

pub mod axes;
pub mod figure;
pub mod ticks;

pub use axes::{Axes, BarContainer, BarStyle, ErrorBars, HAlign, Rect};
pub use figure::Figure;
