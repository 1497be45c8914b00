//! bargraph-rs
//!
//! A bar chart widget with optional error bars, built on a small figure/axes model and
//! rendered with plotters. Pairs with the `bargraph` CLI and the `bargraph-gui` viewer.
//!
//! ### Features
//! - One bar per category, fixed y range `[0, 1]`, rotated tick labels
//! - Optional error indicators, axis description and per-bar tick text
//! - Pluggable renderers: RGB bitmap (GUI), SVG, PNG, or a recording renderer
//! - Chart requests loaded from JSON or CSV
//!
//! ### Example
//! ```no_run
//! use bargraph_rs::{BarGraphGeneric, DrawOptions, render::SvgRenderer};
//!
//! let mut widget = BarGraphGeneric::new(SvgRenderer);
//! widget.resize((800, 480))?;
//! widget.draw(
//!     &["near", "mid", "far"],
//!     &[0.82, 0.64, 0.31],
//!     &DrawOptions::new()
//!         .error_primary(vec![0.05, 0.08, 0.04])
//!         .axis_label("Distance (m)")
//!         .tick_labels(["A", "B", "C"]),
//! )?;
//! let svg: &String = widget.canvas().expect("drawn");
//! # let _ = svg;
//! # Ok::<(), bargraph_rs::PlotError>(())
//! ```

pub mod bar_graph;
pub mod error;
pub mod gui;
pub mod models;
pub mod plot;
pub mod plot_base;
pub mod render;
pub mod storage;
pub mod style;

pub use bar_graph::BarGraphGeneric;
pub use error::{PlotError, PlotResult};
pub use models::{ChartInput, DrawOptions};
