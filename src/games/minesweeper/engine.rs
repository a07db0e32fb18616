//! The minesweeper engine: input modes, clicks, win/loss.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellPos};
use super::grid::Grid;
use crate::core::GameRng;

/// How a click is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    /// Uncover the cell.
    #[default]
    Reveal,
    /// Toggle a flag on the cell.
    Flag,
}

/// Terminal, user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alert {
    MineHit,
}

impl Alert {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Alert::MineHit => "💥 Boom! You stepped on a mine.",
        }
    }
}

/// 9x9, 9-mine minesweeper.
///
/// Hosts read [`is_active`](Self::is_active),
/// [`is_game_over`](Self::is_game_over) and [`is_game_won`](Self::is_game_won)
/// directly to drive their UI; the engine does not push notifications for
/// them. A lost game additionally leaves an [`Alert`] for
/// [`take_alert`](Self::take_alert).
#[derive(Clone, Debug)]
pub struct Minesweeper {
    rng: GameRng,
    grid: Grid,
    mode: InputMode,
    active: bool,
    game_over: bool,
    game_won: bool,
    alert: Option<Alert>,
}

impl Minesweeper {
    /// An inactive engine; call [`init`](Self::init) to deal a board.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            grid: Grid::empty(),
            mode: InputMode::Reveal,
            active: false,
            game_over: false,
            game_won: false,
            alert: None,
        }
    }

    /// Deal a fresh random board and reset all flags.
    pub fn init(&mut self) {
        let grid = Grid::random(&mut self.rng);
        self.reset(grid);
        info!("Minesweeper board dealt (seed {})", self.rng.seed());
    }

    /// Start a game on a board with mines exactly at `mines`.
    pub fn init_with_mines(&mut self, mines: &[CellPos]) {
        self.reset(Grid::with_mines(mines));
        info!("Minesweeper board set from {} fixed mines", mines.len());
    }

    fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.mode = InputMode::Reveal;
        self.active = true;
        self.game_over = false;
        self.game_won = false;
        self.alert = None;
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        debug!("Input mode set to {:?}", mode);
    }

    /// Apply a click at pixel `(x, y)` according to the current mode.
    ///
    /// Ignored unless a game is in progress or when the pixel is off the
    /// board. Returns the cell acted on.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Option<CellPos> {
        if !self.active || self.game_over || self.game_won {
            return None;
        }

        let pos = CellPos::from_pixel(x, y)?;
        match self.mode {
            InputMode::Reveal => self.reveal(pos),
            InputMode::Flag => self.toggle_flag(pos),
        }
        self.check_win_condition();
        Some(pos)
    }

    /// Flip the flag on a hidden cell. Revealed cells are left alone.
    pub fn toggle_flag(&mut self, pos: CellPos) {
        let cell = &mut self.grid[pos];
        if cell.is_revealed {
            return;
        }
        cell.is_flagged = !cell.is_flagged;
    }

    /// Uncover a cell. Flagged or already revealed cells are left alone.
    ///
    /// A mine ends the game and exposes every mine. A cell with no adjacent
    /// mines flood-reveals its neighbors.
    pub fn reveal(&mut self, pos: CellPos) {
        let cell = self.grid[pos];
        if cell.is_revealed || cell.is_flagged {
            return;
        }

        if cell.is_mine {
            self.grid[pos].is_revealed = true;
            self.game_over = true;
            self.grid.reveal_all_mines();
            self.alert = Some(Alert::MineHit);
            info!("Mine hit at {}", pos);
            return;
        }

        let revealed = self.grid.flood_reveal(pos);
        if revealed > 1 {
            debug!("Flood from {} revealed {} cells", pos, revealed);
        }
    }

    /// Mark the game won once every safe cell is revealed.
    pub fn check_win_condition(&mut self) {
        if self.game_over {
            return;
        }
        if self.grid.unrevealed_safe_count() == 0 {
            self.game_won = true;
            self.game_over = true;
            info!("Minesweeper cleared");
        }
    }

    /// The pending loss notification, handed out once.
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    // === Accessors ===

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.game_won
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cell(&self, pos: CellPos) -> &Cell {
        &self.grid[pos]
    }
}

impl Default for Minesweeper {
    fn default() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }
}
