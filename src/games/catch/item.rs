//! Falling items and weighted category selection.

use serde::{Deserialize, Serialize};

use super::basket::Lane;
use super::config::{CATCH_BAND, DESPAWN_Y};

/// What kind of thing is falling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Apple,
    Grape,
    Bomb,
}

impl ItemKind {
    /// Catching a bomb ends the round.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, ItemKind::Bomb)
    }

    #[must_use]
    pub fn category(self) -> &'static ItemCategory {
        match self {
            ItemKind::Apple => &CATEGORIES[0],
            ItemKind::Grape => &CATEGORIES[1],
            ItemKind::Bomb => &CATEGORIES[2],
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            ItemKind::Apple => "🍎",
            ItemKind::Grape => "🍇",
            ItemKind::Bomb => "💣",
        }
    }
}

/// Score delta and spawn weight of an item kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemCategory {
    pub kind: ItemKind,
    pub score: i64,
    pub weight: f64,
}

/// Spawn table. Order matters: draws on a boundary go to the earlier entry.
pub static CATEGORIES: [ItemCategory; 3] = [
    ItemCategory { kind: ItemKind::Apple, score: 100, weight: 0.6 },
    ItemCategory { kind: ItemKind::Grape, score: 200, weight: 0.3 },
    ItemCategory { kind: ItemKind::Bomb, score: -500, weight: 0.1 },
];

/// Pick a category for a uniform draw in `[0, 1)`.
///
/// Walks the table accumulating weights and returns the first entry whose
/// running total meets or exceeds `draw`. Rounding can leave the total a
/// hair under 1.0; such draws belong to the last entry.
#[must_use]
pub fn pick_category(draw: f64) -> &'static ItemCategory {
    let mut cumulative = 0.0;
    for category in &CATEGORIES {
        cumulative += category.weight;
        if draw <= cumulative {
            return category;
        }
    }
    &CATEGORIES[CATEGORIES.len() - 1]
}

/// A live falling item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub lane: Lane,
    /// Fall progress in pixels from the top.
    pub y: f64,
    pub kind: ItemKind,
    pub score: i64,
    /// Pixels per frame.
    pub speed: f64,
}

impl Item {
    /// A fresh item at the top of `lane`.
    #[must_use]
    pub fn new(lane: Lane, kind: ItemKind, speed: f64) -> Self {
        Self {
            lane,
            y: 0.0,
            kind,
            score: kind.category().score,
            speed,
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.lane.x()
    }

    /// Whether the item is at basket height.
    #[must_use]
    pub fn in_catch_band(&self) -> bool {
        (CATCH_BAND.0..=CATCH_BAND.1).contains(&self.y)
    }

    #[must_use]
    pub fn is_off_screen(&self) -> bool {
        self.y > DESPAWN_Y
    }
}
