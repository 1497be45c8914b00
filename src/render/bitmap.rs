//! Raster output: an in-memory RGB surface for on-screen display, and PNG files.

use log::debug;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use std::path::Path;

use super::{RenderBackend, check_size, draw_figure};
use crate::error::PlotResult;
use crate::plot::Figure;

/// Tightly packed RGB8 pixels, row-major, `width * height * 3` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbSurface {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbSurface {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGB at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }
}

/// Rasterises figures with plotters' bitmap backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmapRenderer;

impl RenderBackend for BitmapRenderer {
    type Surface = RgbSurface;

    fn render(&mut self, figure: &Figure, size: (u32, u32)) -> PlotResult<RgbSurface> {
        check_size(size)?;
        let (width, height) = size;
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, size).into_drawing_area();
            draw_figure(root, figure)?;
        }
        debug!("bitmap: rendered {}x{}", width, height);
        Ok(RgbSurface {
            width,
            height,
            pixels,
        })
    }
}

/// Render `figure` straight to a PNG (or any format the `image` crate infers from the extension).
pub fn save_png<P: AsRef<Path>>(figure: &Figure, path: P, size: (u32, u32)) -> PlotResult<()> {
    check_size(size)?;
    let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    draw_figure(root, figure)?;
    Ok(())
}
