//! egui integration: shows a [`BarGraphGeneric`] as a texture that tracks the space
//! it is given.

use egui::{ColorImage, TextureHandle, TextureOptions, Ui};
use log::debug;

use crate::bar_graph::BarGraphGeneric;
use crate::error::PlotResult;
use crate::models::{ChartInput, parse_list};
use crate::render::{BitmapRenderer, RgbSurface};

/// Copy an RGB surface into an egui image.
pub fn to_color_image(surface: &RgbSurface) -> ColorImage {
    ColorImage::from_rgb(
        [surface.width as usize, surface.height as usize],
        &surface.pixels,
    )
}

/// Physical pixel size for an area of `points` at the given scale factor.
pub fn physical_size(points: egui::Vec2, pixels_per_point: f32) -> (u32, u32) {
    let w = (points.x * pixels_per_point).round().max(1.0) as u32;
    let h = (points.y * pixels_per_point).round().max(1.0) as u32;
    (w, h)
}

/// Text the viewer's side panel lays over the loaded chart request.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOverrides {
    pub axis_label: String,
    pub tick_labels: String,
    pub show_errors: bool,
}

impl Default for PanelOverrides {
    fn default() -> Self {
        Self {
            axis_label: String::new(),
            tick_labels: String::new(),
            show_errors: true,
        }
    }
}

impl PanelOverrides {
    /// Panel state for a freshly loaded request: the axis text mirrors the file, so a
    /// file without an axis label clears any previous one.
    pub fn for_input(input: &ChartInput) -> Self {
        Self {
            axis_label: input.options.axis_label.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// `input` with the panel applied. Blank fields leave the request as is, except the
    /// axis text, which always wins.
    pub fn apply(&self, input: &ChartInput) -> ChartInput {
        let mut out = input.clone();
        let label = self.axis_label.trim();
        out.options.axis_label = (!label.is_empty()).then(|| label.to_string());
        let ticks = parse_list(&self.tick_labels);
        if !ticks.is_empty() {
            out.options.tick_labels = Some(ticks);
        }
        if !self.show_errors {
            out.options.error_primary = None;
        }
        out
    }
}

#[derive(Default)]
pub struct BarGraphView {
    widget: BarGraphGeneric<BitmapRenderer>,
    texture: Option<TextureHandle>,
    last_size: Option<(u32, u32)>,
    dirty: bool,
}

impl BarGraphView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget(&self) -> &BarGraphGeneric<BitmapRenderer> {
        &self.widget
    }

    /// Redraw from a chart request; the texture is refreshed on the next [`Self::ui`].
    pub fn draw(&mut self, input: &ChartInput) -> PlotResult<()> {
        self.widget
            .draw(&input.categories, &input.values, &input.options)?;
        self.dirty = true;
        Ok(())
    }

    /// Fill the remaining space of `ui` with the chart.
    pub fn ui(&mut self, ui: &mut Ui) -> PlotResult<()> {
        let avail = ui.available_size();
        let size = physical_size(avail, ui.ctx().pixels_per_point());
        if self.last_size != Some(size) {
            self.widget.resize(size)?;
            self.last_size = Some(size);
            self.dirty = true;
        }

        if self.dirty {
            if let Some(surface) = self.widget.canvas() {
                let image = to_color_image(surface);
                match &mut self.texture {
                    Some(tex) => tex.set(image, TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ui.ctx().load_texture("bar-graph", image, TextureOptions::LINEAR))
                    }
                }
                debug!("gui: texture updated to {}x{}", size.0, size.1);
            }
            self.dirty = false;
        }

        match &self.texture {
            Some(tex) => {
                ui.image((tex.id(), avail));
            }
            None => {
                ui.centered_and_justified(|ui| ui.label("No chart drawn yet"));
            }
        }
        Ok(())
    }
}
