//! Generic plotting base shared by chart widgets.
//!
//! Owns the background colour, the current figure and the render surface ("canvas")
//! bound to it, and the sizing policy that fits the surface into the display area the
//! parent container reports.

use log::debug;

use crate::error::PlotResult;
use crate::plot::Figure;
use crate::render::RenderBackend;
use crate::style::Rgb8;

/// Display area assumed until the parent reports one.
pub const DEFAULT_DISPLAY_SIZE: (u32, u32) = (640, 480);

pub struct PlotBase<R: RenderBackend> {
    renderer: R,
    background: Rgb8,
    display_size: (u32, u32),
    figure: Option<Figure>,
    canvas: Option<R::Surface>,
}

impl<R: RenderBackend> PlotBase<R> {
    pub fn new(renderer: R, background: Rgb8) -> Self {
        Self {
            renderer,
            background,
            display_size: DEFAULT_DISPLAY_SIZE,
            figure: None,
            canvas: None,
        }
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn canvas(&self) -> Option<&R::Surface> {
        self.canvas.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Bind a new figure. The old figure and its surface are dropped; the new surface
    /// exists once [`PlotBase::set_plot_size`] has succeeded. If rendering fails, the new
    /// figure stays bound with no canvas.
    pub fn set_figure(&mut self, mut figure: Figure) {
        figure.set_facecolor(self.background);
        self.canvas = None;
        self.figure = Some(figure);
    }

    /// The parent's display area changed. Re-fits the current figure, if any.
    pub fn resize(&mut self, size: (u32, u32)) -> PlotResult<()> {
        let size = fit_to(size);
        if size == self.display_size && self.canvas.is_some() {
            return Ok(());
        }
        self.display_size = size;
        if self.figure.is_some() {
            self.set_plot_size()?;
        }
        Ok(())
    }

    /// Sizing policy: render the bound figure to fill the display area and replace the
    /// surface. Without a figure there is nothing to fit.
    pub fn set_plot_size(&mut self) -> PlotResult<()> {
        let Some(figure) = self.figure.as_ref() else {
            return Ok(());
        };
        let size = fit_to(self.display_size);
        let surface = self.renderer.render(figure, size)?;
        debug!("plot base: surface fitted to {}x{}", size.0, size.1);
        self.canvas = Some(surface);
        Ok(())
    }
}

/// A surface must cover at least one pixel in each direction.
fn fit_to((w, h): (u32, u32)) -> (u32, u32) {
    (w.max(1), h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;
    use crate::render::RecordingRenderer;

    fn figure() -> Figure {
        let mut f = Figure::new();
        f.add_subplot();
        f
    }

    #[test]
    fn no_figure_means_no_canvas() {
        let mut base = PlotBase::new(RecordingRenderer::default(), Rgb8::WHITE);
        base.set_plot_size().unwrap();
        assert!(base.canvas().is_none());
        assert_eq!(base.renderer().render_count, 0);
    }

    #[test]
    fn set_figure_applies_background_and_drops_canvas() {
        let mut base = PlotBase::new(RecordingRenderer::default(), Rgb8::new(1, 2, 3));
        base.set_figure(figure());
        base.set_plot_size().unwrap();
        assert!(base.canvas().is_some());
        base.set_figure(figure());
        assert!(base.canvas().is_none());
        assert_eq!(base.figure().unwrap().facecolor(), Rgb8::new(1, 2, 3));
    }

    #[test]
    fn resize_refits_existing_figure() {
        let mut base = PlotBase::new(RecordingRenderer::default(), Rgb8::WHITE);
        base.set_figure(figure());
        base.set_plot_size().unwrap();
        base.resize((300, 200)).unwrap();
        assert_eq!(base.canvas().unwrap().size, (300, 200));
        // same size again is a no-op
        base.resize((300, 200)).unwrap();
        assert_eq!(base.renderer().render_count, 2);
    }

    struct FailingRenderer;

    impl RenderBackend for FailingRenderer {
        type Surface = ();

        fn render(&mut self, _figure: &Figure, _size: (u32, u32)) -> PlotResult<()> {
            Err(PlotError::Render("backend gone".into()))
        }
    }

    #[test]
    fn render_failure_keeps_new_figure_without_canvas() {
        let mut base = PlotBase::new(FailingRenderer, Rgb8::WHITE);
        base.set_figure(figure());
        let err = base.set_plot_size().unwrap_err();
        assert_eq!(err, PlotError::Render("backend gone".into()));
        assert!(base.figure().is_some());
        assert!(base.canvas().is_none());
    }

    #[test]
    fn zero_area_is_fitted_to_one_pixel() {
        let mut base = PlotBase::new(RecordingRenderer::default(), Rgb8::WHITE);
        base.set_figure(figure());
        base.resize((0, 0)).unwrap();
        assert_eq!(base.canvas().unwrap().size, (1, 1));
    }
}
