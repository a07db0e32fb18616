//! Drawing the catch field.

use super::basket::Basket;
use super::config::FIELD_SIZE;
use super::engine::{CatchGame, RoundPhase};
use crate::core::Clock;
use crate::render::{Color, Font, Rect, Surface, TextAlign, TextBaseline};

const BASKET_GLYPH: &str = "🧺";

impl<C: Clock> CatchGame<C> {
    /// Draw the basket, live items and HUD, plus the game-over panel once
    /// the round has ended. Draws nothing before the first round.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.phase() == RoundPhase::Inactive {
            return;
        }

        surface.set_font(Font::regular(30));
        draw_glyph(surface, BASKET_GLYPH, self.basket().x(), Basket::Y);

        surface.set_font(Font::regular(24));
        for item in self.items() {
            draw_glyph(surface, item.kind.glyph(), item.x(), item.y);
        }

        surface.set_fill_style(Color::Named("black"));
        surface.set_font(Font::regular(12));
        surface.fill_text(&format!("Score: {}", self.score()), 10.0, 20.0);
        surface.fill_text(&format!("Time: {}", self.time_left()), 150.0, 20.0);
        surface.fill_text(&format!("Lv: {}", self.level()), 90.0, 20.0);

        if self.is_game_over() {
            draw_game_over(surface, self.score());
        }
    }
}

/// Centered glyph; alignment is restored afterwards.
fn draw_glyph<S: Surface + ?Sized>(surface: &mut S, glyph: &str, x: f64, y: f64) {
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Middle);
    surface.fill_text(glyph, x, y);
    surface.set_text_align(TextAlign::Start);
    surface.set_text_baseline(TextBaseline::Alphabetic);
}

fn draw_game_over<S: Surface + ?Sized>(surface: &mut S, score: i64) {
    let center = FIELD_SIZE / 2.0;

    surface.set_fill_style(Color::Rgba(0, 0, 0, 0.7));
    surface.fill_rect(Rect::new(0.0, 0.0, FIELD_SIZE, FIELD_SIZE));

    surface.set_text_align(TextAlign::Center);
    surface.set_fill_style(Color::Named("white"));
    surface.set_font(Font::bold(30));
    surface.fill_text("GAME OVER", center, 80.0);

    surface.set_fill_style(Color::Hex("#FF4D80"));
    surface.set_font(Font::bold(24));
    surface.fill_text(&format!("Score: {}", score), center, 120.0);

    surface.set_text_align(TextAlign::Start);
}
