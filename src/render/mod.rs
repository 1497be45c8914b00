//! Rendering: turn a [`Figure`] into pixels (or an SVG document).
//!
//! - [`RenderBackend`] is the seam the widget is generic over
//! - [`BitmapRenderer`] rasterises into an RGB buffer (what the GUI shows)
//! - [`SvgRenderer`] produces an SVG string
//! - [`RecordingRenderer`] only records what would be drawn (headless use, tests)
//!
//! Bars and error indicators are clipped to the axes' y limits here; the figure model
//! keeps the raw values.

pub mod bitmap;
pub mod recording;
pub mod style;
pub mod svg;
pub mod text;

pub use bitmap::{BitmapRenderer, RgbSurface};
pub use recording::{RecordedSurface, RecordingRenderer};
pub use svg::SvgRenderer;

use log::{debug, warn};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontTransform};
use std::sync::Once;

use crate::error::{PlotError, PlotResult};
use crate::plot::ticks::format_value_tick;
use crate::plot::{Axes, Figure, HAlign};
use crate::style::Rgb8;
use style::{fill_style, line_style, rgb_color};
use text::{estimate_text_width_px, truncate_to_width};

/// Turns a figure into a toolkit-specific surface of the requested pixel size.
pub trait RenderBackend {
    type Surface;

    fn render(&mut self, figure: &Figure, size: (u32, u32)) -> PlotResult<Self::Surface>;
}

const MARGIN: u32 = 12;
const TICK_FONT_PX: u32 = 12;
const DESC_FONT_PX: u32 = 14;
const TICK_LEN_PX: i32 = 4;

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

pub(crate) fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            epaint_default_fonts::UBUNTU_LIGHT,
        )
        .is_err()
        {
            warn!("could not register the bundled sans-serif font; text may not render");
        }
    });
}

pub(crate) fn check_size((width, height): (u32, u32)) -> PlotResult<()> {
    if width == 0 || height == 0 {
        return Err(PlotError::InvalidSize { width, height });
    }
    Ok(())
}

/// Draw `figure` onto any plotters drawing area, stacking multiple axes vertically.
pub fn draw_figure<DB>(root: DrawingArea<DB, Shift>, figure: &Figure) -> PlotResult<()>
where
    DB: DrawingBackend,
{
    if figure.axes().is_empty() {
        return Err(PlotError::NoAxes);
    }
    ensure_fonts_registered();

    root.fill(&rgb_color(figure.facecolor()))
        .map_err(PlotError::render)?;

    let areas = root.split_evenly((figure.axes().len(), 1));
    for (ax, area) in figure.axes().iter().zip(areas.iter()) {
        draw_axes(area, ax, figure.subplot_bottom())?;
    }

    root.present().map_err(PlotError::render)?;
    Ok(())
}

/// Pixel height of the band below the plot: tick marks, tick text, x description.
fn bottom_band_px(ax: &Axes, area_h: u32, subplot_bottom: f64, labels: &[String]) -> u32 {
    let reserved = (area_h as f64 * subplot_bottom).round() as u32;
    let tick_text = if ax.xtick_rotation() != 0.0 {
        labels
            .iter()
            .map(|l| estimate_text_width_px(l, TICK_FONT_PX))
            .max()
            .unwrap_or(0)
    } else {
        TICK_FONT_PX
    };
    let desc = if ax.xlabel().is_some() {
        DESC_FONT_PX + 10
    } else {
        0
    };
    let needed = tick_text + TICK_LEN_PX as u32 + 8 + desc;
    reserved.max(needed).min(area_h / 2)
}

/// Left label area sized to the widest y tick text (plus the y description).
fn left_band_px(ax: &Axes, y_step: f64) -> u32 {
    let widest = ax
        .yticks()
        .iter()
        .map(|v| estimate_text_width_px(&format_value_tick(*v, y_step), TICK_FONT_PX))
        .max()
        .unwrap_or(0);
    let desc = if ax.ylabel().is_some() {
        DESC_FONT_PX + 10
    } else {
        0
    };
    (widest + 18 + desc).clamp(48, 160)
}

fn draw_axes<DB>(area: &DrawingArea<DB, Shift>, ax: &Axes, subplot_bottom: f64) -> PlotResult<()>
where
    DB: DrawingBackend,
{
    let (_, area_h) = area.dim_in_pixel();

    let (x_lo, x_hi) = ax.xlim();
    let (y_lo, mut y_hi) = ax.ylim();
    if y_hi <= y_lo {
        y_hi = y_lo + 1.0;
    }
    let y_step = ax.ytick_step();

    // Rotated labels may not eat more than 40% of the height.
    let max_label_px = (area_h as f64 * 0.4) as u32;
    let labels: Vec<String> = ax
        .xtick_labels()
        .iter()
        .map(|l| truncate_to_width(l, TICK_FONT_PX, max_label_px))
        .collect();
    let bottom_px = bottom_band_px(ax, area_h, subplot_bottom, &labels);
    let left_px = left_band_px(ax, y_step);

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom_px)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(PlotError::render)?;

    let y_label_fmt = |v: &f64| format_value_tick(*v, y_step);
    let y_tick_count = ax.yticks().len().max(2);

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(y_tick_count)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, TICK_FONT_PX as f64))
        .axis_desc_style((FontFamily::SansSerif, DESC_FONT_PX as f64));
    if let Some(xl) = ax.xlabel() {
        mesh.x_desc(xl);
    }
    if let Some(yl) = ax.ylabel() {
        mesh.y_desc(yl);
    }
    mesh.draw().map_err(PlotError::render)?;

    // Bars, clipped to the visible y range
    for container in ax.containers() {
        let style = fill_style(container.color);
        let rects: Vec<_> = container
            .rects()
            .filter_map(|r| r.clip_y(y_lo, y_hi))
            .map(|r| Rectangle::new([(r.x0, r.y0), (r.x1, r.y1)], style.clone()))
            .collect();
        chart.draw_series(rects).map_err(PlotError::render)?;

        if let Some(eb) = &container.errorbars {
            let stroke = line_style(eb.color, 1);
            let mut paths: Vec<PathElement<(f64, f64)>> = Vec::new();
            for (x, lo, hi) in eb.segments() {
                let (a, b) = (lo.max(y_lo), hi.min(y_hi));
                if a > b {
                    continue;
                }
                paths.push(PathElement::new(vec![(x, a), (x, b)], stroke.clone()));
                if eb.capsize > 0.0 {
                    for cap in [lo, hi] {
                        if cap >= y_lo && cap <= y_hi {
                            paths.push(PathElement::new(
                                vec![(x - eb.capsize, cap), (x + eb.capsize, cap)],
                                stroke.clone(),
                            ));
                        }
                    }
                }
            }
            chart.draw_series(paths).map_err(PlotError::render)?;
        }
    }

    // Frame on all four sides
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_lo, y_lo), (x_hi, y_hi)],
            line_style(Rgb8::BLACK, 1),
        )))
        .map_err(PlotError::render)?;

    // X ticks at explicit positions, drawn in area pixel space
    let base = area.get_base_pixel();
    let rotated = ax.xtick_rotation() != 0.0;
    let font = (FontFamily::SansSerif, TICK_FONT_PX as f64).into_font();
    let tick_text_style = if rotated {
        // plotters only rotates in quarter turns: read bottom-up, end at the tick
        TextStyle::from(font)
            .pos(Pos::new(HPos::Right, VPos::Center))
            .transform(FontTransform::Rotate270)
    } else {
        let h = match ax.xtick_align() {
            HAlign::Left => HPos::Left,
            HAlign::Center => HPos::Center,
            HAlign::Right => HPos::Right,
        };
        TextStyle::from(font).pos(Pos::new(h, VPos::Top))
    };
    for (t, label) in ax.xticks().iter().zip(labels.iter()) {
        if *t < x_lo || *t > x_hi {
            continue;
        }
        let (px, py) = chart.backend_coord(&(*t, y_lo));
        let (px, py) = (px - base.0, py - base.1);
        area.draw(&PathElement::new(
            vec![(px, py), (px, py + TICK_LEN_PX)],
            line_style(Rgb8::BLACK, 1),
        ))
        .map_err(PlotError::render)?;
        if label.is_empty() {
            continue;
        }
        area.draw(&Text::new(
            label.clone(),
            (px, py + TICK_LEN_PX + 3),
            tick_text_style.clone(),
        ))
        .map_err(PlotError::render)?;
    }

    debug!(
        "render: axes with {} bars, ylim ({}, {}), {} ticks",
        ax.bar_count(),
        y_lo,
        y_hi,
        labels.len()
    );
    Ok(())
}
