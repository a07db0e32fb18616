//! Drawing target abstraction.

use serde::{Deserialize, Serialize};

/// Fill or stroke color.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Color {
    /// A named color ("red", "darkblue", ...).
    Named(&'static str),
    /// A `#rrggbb` hex string.
    Hex(&'static str),
    /// RGB with alpha in `[0, 1]`.
    Rgba(u8, u8, u8, f32),
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Named(name) | Color::Hex(name) => f.write_str(name),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

/// Font request: pixel size and weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub size_px: u16,
    pub bold: bool,
}

impl Font {
    #[must_use]
    pub const fn regular(size_px: u16) -> Self {
        Self { size_px, bold: false }
    }

    #[must_use]
    pub const fn bold(size_px: u16) -> Self {
        Self { size_px, bold: true }
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bold {
            write!(f, "bold {}px Arial", self.size_px)
        } else {
            write!(f, "{}px Arial", self.size_px)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// An external drawing target.
///
/// Mirrors the small subset of a 2D canvas the engines use: style state plus
/// filled/stroked rectangles and text. Nothing is returned; a surface that
/// cannot draw simply drops the command.
pub trait Surface {
    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_font(&mut self, font: Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    /// Draw text anchored at `(x, y)` according to the current alignment.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
