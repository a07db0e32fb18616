//! Lanes and the player's basket.

use serde::{Deserialize, Serialize};

use super::config::{BASKET_HEIGHT, BASKET_WIDTH, BASKET_Y};

/// One of the three fixed columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    /// Horizontal pixel position of the lane.
    #[must_use]
    pub const fn x(self) -> f64 {
        match self {
            Lane::Left => 40.0,
            Lane::Center => 100.0,
            Lane::Right => 160.0,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Lane for an index in `0..3`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a classifier label to a lane.
    ///
    /// Only "left" and "right" move the basket sideways. The classifier's
    /// Korean labels are accepted as well. Anything else, including empty
    /// or unknown labels, lands in the center.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("left") || label == "왼쪽" {
            Lane::Left
        } else if label.eq_ignore_ascii_case("right") || label == "오른쪽" {
            Lane::Right
        } else {
            Lane::Center
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Lane::Left => "LEFT",
            Lane::Center => "CENTER",
            Lane::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// The catcher. Its height is fixed; only the lane changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub lane: Lane,
}

impl Basket {
    pub const Y: f64 = BASKET_Y;
    pub const WIDTH: f64 = BASKET_WIDTH;
    pub const HEIGHT: f64 = BASKET_HEIGHT;

    #[must_use]
    pub fn x(&self) -> f64 {
        self.lane.x()
    }
}
