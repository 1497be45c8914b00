//! Adapter helpers from the figure model's colours to plotters styles.

use plotters::prelude::*;

use crate::style::Rgb8;

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Stroke style for error indicators, ticks and frames.
pub fn line_style(c: Rgb8, width: u32) -> ShapeStyle {
    rgb_color(c).stroke_width(width)
}

/// Filled style for bars.
pub fn fill_style(c: Rgb8) -> ShapeStyle {
    rgb_color(c).filled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_filled_and_line_is_not() {
        let g = Rgb8::new(0, 128, 0);
        assert!(fill_style(g).filled);
        let l = line_style(g, 2);
        assert!(!l.filled);
        assert_eq!(l.stroke_width, 2);
    }
}
