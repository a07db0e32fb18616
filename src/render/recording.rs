//! A surface that records commands instead of drawing them.

use serde::Serialize;

use super::surface::{Color, Font, Rect, Surface, TextAlign, TextBaseline};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DrawCommand {
    FillStyle(Color),
    StrokeStyle(Color),
    Font(Font),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    FillRect(Rect),
    StrokeRect(Rect),
    FillText { text: String, x: f64, y: f64 },
}

/// Headless [`Surface`] for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether `text` was drawn at least once.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }

    /// How many times `text` was drawn.
    #[must_use]
    pub fn count_text(&self, text: &str) -> usize {
        self.texts().filter(|&t| t == text).count()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn set_font(&mut self, font: Font) {
        self.commands.push(DrawCommand::Font(font));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_style(Color::Named("black"));
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        surface.fill_text("hi", 1.0, 2.0);

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.commands()[0], DrawCommand::FillStyle(Color::Named("black")));
        assert!(surface.contains_text("hi"));
        assert_eq!(surface.count_text("hi"), 1);

        surface.clear();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_command_serializes() {
        let cmd = DrawCommand::FillText {
            text: "Score: 0".to_string(),
            x: 10.0,
            y: 20.0,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("Score: 0"));
    }

    #[test]
    fn test_style_display() {
        assert_eq!(Color::Rgba(0, 0, 0, 0.7).to_string(), "rgba(0, 0, 0, 0.7)");
        assert_eq!(Font::bold(30).to_string(), "bold 30px Arial");
        assert_eq!(Font::regular(12).to_string(), "12px Arial");
    }
}
