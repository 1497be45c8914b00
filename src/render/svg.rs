//! SVG output, as a string or a file.

use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;

use super::{RenderBackend, check_size, draw_figure};
use crate::error::PlotResult;
use crate::plot::Figure;

#[derive(Debug, Default, Clone, Copy)]
pub struct SvgRenderer;

impl RenderBackend for SvgRenderer {
    type Surface = String;

    fn render(&mut self, figure: &Figure, size: (u32, u32)) -> PlotResult<String> {
        check_size(size)?;
        let mut doc = String::new();
        {
            let root = SVGBackend::with_string(&mut doc, size).into_drawing_area();
            draw_figure(root, figure)?;
        }
        Ok(doc)
    }
}

pub fn save_svg<P: AsRef<Path>>(figure: &Figure, path: P, size: (u32, u32)) -> PlotResult<()> {
    check_size(size)?;
    let root = SVGBackend::new(path.as_ref(), size).into_drawing_area();
    draw_figure(root, figure)?;
    Ok(())
}
