//! Colours used by the figure model and the renderers.
//!
//! Colours are kept as plain RGB triples so the figure model stays independent of the
//! drawing backend; `render::style` converts them into plotters styles.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    /// The `g` colour code: half-intensity green (`#008000`), not pure green.
    pub const GREEN: Rgb8 = Rgb8::new(0, 128, 0);
}
