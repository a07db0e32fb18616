//! 9x9 minesweeper with nine mines.
//!
//! Clicks arrive as board pixels and are interpreted by the current
//! [`InputMode`]. Revealing a cell with no adjacent mines flood-reveals the
//! surrounding zero region and its numbered border.
//!
//! ```
//! use arcade_rules::games::minesweeper::{CellPos, Minesweeper};
//!
//! let mut game = Minesweeper::new(1);
//! let corner: Vec<_> = (0..3)
//!     .flat_map(|r| (0..3).map(move |c| CellPos::new(r, c)))
//!     .collect();
//! game.init_with_mines(&corner);
//!
//! // Bottom-right cell: no neighbors are mines, so everything safe opens.
//! game.handle_click(490.0, 490.0);
//! assert!(game.is_game_won());
//! ```

mod cell;
pub mod config;
mod engine;
mod grid;
mod render;

pub use cell::{Cell, CellPos};
pub use engine::{Alert, InputMode, Minesweeper};
pub use grid::{neighbors, Grid, Neighbors};
