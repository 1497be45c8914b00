/*!
 * Desktop viewer for bargraph-rs
 *
 * Hosts the bar graph widget in a resizable window:
 * - Open a chart request (JSON or CSV) or start from the built-in sample
 * - Override the axis description and tick labels, toggle error bars
 * - Export the current chart as PNG or SVG
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::Result;
use bargraph_rs::gui::{BarGraphView, PanelOverrides};
use bargraph_rs::render::bitmap::save_png;
use bargraph_rs::render::svg::save_svg;
use bargraph_rs::{ChartInput, DrawOptions, storage};
use eframe::egui;
use std::path::{Path, PathBuf};

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Bar Graph - bargraph-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Bar Graph",
        options,
        Box::new(|_cc| Ok(Box::new(BarGraphApp::new()))),
    )
}

/// Main application state
struct BarGraphApp {
    // Loaded data
    input: ChartInput,
    source: String,

    overrides: PanelOverrides,

    // Export
    export_dir: PathBuf,
    export_width: u32,
    export_height: u32,

    view: BarGraphView,
    needs_draw: bool,

    status_message: String,
    error_message: String,
}

impl BarGraphApp {
    fn new() -> Self {
        let export_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let input = sample_input();
        Self {
            overrides: PanelOverrides::for_input(&input),
            input,
            source: "built-in sample".to_string(),
            export_dir,
            export_width: 1000,
            export_height: 600,
            view: BarGraphView::new(),
            needs_draw: true,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    fn redraw(&mut self) {
        self.needs_draw = false;
        match self.view.draw(&self.overrides.apply(&self.input)) {
            Ok(()) => self.error_message.clear(),
            Err(err) => self.error_message = format!("Failed to draw chart: {}", err),
        }
    }

    fn open_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Chart data", &["json", "csv"])
            .set_directory(&self.export_dir)
            .pick_file()
        else {
            return;
        };
        match storage::load(&path) {
            Ok(input) => {
                self.overrides = PanelOverrides::for_input(&input);
                self.input = input;
                self.source = path.display().to_string();
                self.status_message = format!("Loaded {} categories", self.input.len());
                self.needs_draw = true;
            }
            Err(err) => self.error_message = format!("Failed to load {}: {:#}", path.display(), err),
        }
    }

    fn export(&mut self, ext: &str) {
        let Some(figure) = self.view.widget().figure() else {
            self.error_message = "Nothing to export yet".to_string();
            return;
        };
        let path = self.export_dir.join(format!("bargraph.{}", ext));
        let size = (self.export_width, self.export_height);
        let result = match ext {
            "svg" => save_svg(figure, &path, size),
            _ => save_png(figure, &path, size),
        };
        match result {
            Ok(()) => {
                self.status_message = format!("Saved {}", path.display());
                self.error_message.clear();
            }
            Err(err) => self.error_message = format!("Failed to save {}: {}", path.display(), err),
        }
    }
}

impl eframe::App for BarGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_draw {
            self.redraw();
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Bar Graph");
                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.label("Data");
                    ui.label(format!("Source: {}", short_name(&self.source)));
                    ui.label(format!("{} categories", self.input.len()));
                    if ui.button("Open...").clicked() {
                        self.open_file();
                    }
                });

                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.label("Labels");
                    ui.horizontal(|ui| {
                        ui.label("Axis:");
                        if ui.text_edit_singleline(&mut self.overrides.axis_label).changed() {
                            self.needs_draw = true;
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.label("Ticks:");
                        if ui
                            .text_edit_singleline(&mut self.overrides.tick_labels)
                            .on_hover_text("Labels separated by commas, one per bar (e.g., A,B,C)")
                            .changed()
                        {
                            self.needs_draw = true;
                        }
                    });
                    if ui.checkbox(&mut self.overrides.show_errors, "Error bars").changed() {
                        self.needs_draw = true;
                    }
                });

                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.label("Export");
                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::DragValue::new(&mut self.export_width).range(200..=3000));
                        ui.label("x");
                        ui.add(egui::DragValue::new(&mut self.export_height).range(200..=3000));
                    });
                    ui.horizontal(|ui| {
                        ui.label("Folder:");
                        ui.label(short_name(&self.export_dir.display().to_string()));
                    });
                    if ui.button("Choose folder...").clicked()
                        && let Some(dir) = rfd::FileDialog::new().pick_folder()
                    {
                        self.export_dir = dir;
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Save PNG").clicked() {
                            self.export("png");
                        }
                        if ui.button("Save SVG").clicked() {
                            self.export("svg");
                        }
                    });
                });

                ui.add_space(10.0);

                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Err(err) = self.view.ui(ui) {
                self.error_message = format!("Failed to render chart: {}", err);
            }
        });
    }
}

fn short_name(s: &str) -> String {
    Path::new(s)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| s.to_string())
}

fn sample_input() -> ChartInput {
    ChartInput {
        categories: ["0-5", "5-10", "10-20", "20-50", "50+"]
            .into_iter()
            .map(String::from)
            .collect(),
        values: vec![0.91, 0.84, 0.72, 0.55, 0.38],
        options: DrawOptions::new()
            .axis_label("Distance (m)")
            .error_primary(vec![0.03, 0.05, 0.06, 0.08, 0.11]),
    }
}
