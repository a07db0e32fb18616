//! Drawing the minefield.

use super::config::{number_color, BOARD_PX, CELL_PX};
use super::engine::Minesweeper;
use crate::render::{Color, Font, Rect, Surface, TextAlign, TextBaseline};

const MINE_GLYPH: &str = "💣";
const FLAG_GLYPH: &str = "🚩";

impl Minesweeper {
    /// Draw the board. No-op until [`init`](Self::init) has been called.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_active() {
            return;
        }

        surface.set_fill_style(Color::Hex("#ccc"));
        surface.fill_rect(Rect::new(0.0, 0.0, BOARD_PX, BOARD_PX));

        surface.set_text_align(TextAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);
        surface.set_font(Font::regular(20));

        for (pos, cell) in self.grid().iter() {
            let (x, y) = pos.origin_px();
            let (cx, cy) = (x + CELL_PX / 2.0, y + CELL_PX / 2.0);
            let full = Rect::new(x, y, CELL_PX, CELL_PX);

            surface.set_stroke_style(Color::Hex("#888"));
            surface.stroke_rect(full);

            if cell.is_revealed {
                if cell.is_mine {
                    surface.set_fill_style(Color::Hex("#ffcccc"));
                    surface.fill_rect(full);
                    surface.set_fill_style(Color::Named("black"));
                    surface.fill_text(MINE_GLYPH, cx, cy);
                } else {
                    surface.set_fill_style(Color::Hex("#eee"));
                    surface.fill_rect(full);
                    if cell.neighbor_count > 0 {
                        surface.set_fill_style(Color::Named(number_color(cell.neighbor_count)));
                        surface.fill_text(&cell.neighbor_count.to_string(), cx, cy);
                    }
                }
            } else {
                surface.set_fill_style(Color::Hex("#999"));
                surface.fill_rect(Rect::new(x + 1.0, y + 1.0, CELL_PX - 2.0, CELL_PX - 2.0));
                if cell.is_flagged {
                    surface.set_fill_style(Color::Named("red"));
                    surface.fill_text(FLAG_GLYPH, cx, cy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::games::minesweeper::{CellPos, InputMode, Minesweeper};
    use crate::render::{DrawCommand, RecordingSurface};

    fn corner_mines() -> Vec<CellPos> {
        (0..3).flat_map(|r| (0..3).map(move |c| CellPos::new(r, c))).collect()
    }

    #[test]
    fn test_inactive_draws_nothing() {
        let game = Minesweeper::new(5);
        let mut surface = RecordingSurface::new();
        game.render(&mut surface);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_hidden_board() {
        let mut game = Minesweeper::new(5);
        game.init();

        let mut surface = RecordingSurface::new();
        game.render(&mut surface);

        let borders = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect(_)))
            .count();
        assert_eq!(borders, 81);
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn test_flags_numbers_and_mines() {
        let mut game = Minesweeper::new(5);
        game.init_with_mines(&corner_mines());

        game.set_mode(InputMode::Flag);
        game.toggle_flag(CellPos::new(8, 8));
        game.reveal(CellPos::new(1, 3));

        let mut surface = RecordingSurface::new();
        game.render(&mut surface);
        assert!(surface.contains_text("🚩"));
        assert!(surface.contains_text("3"));
        assert!(!surface.contains_text("💣"));

        game.reveal(CellPos::new(0, 0));
        surface.clear();
        game.render(&mut surface);
        assert_eq!(surface.count_text("💣"), 9);
    }
}
