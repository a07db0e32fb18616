//! The 9x9 board: mine placement, neighbor counts, flood reveal.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, CellPos};
use super::config::{COLS, MINE_COUNT, ROWS};
use crate::core::GameRng;

/// Up to eight neighbor positions, stack allocated.
pub type Neighbors = SmallVec<[CellPos; 8]>;

/// Fixed-size minefield.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// A board with no mines and nothing revealed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::default(); COLS]; ROWS],
        }
    }

    /// A board with `MINE_COUNT` mines at random positions.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let mut grid = Self::empty();
        grid.place_mines(rng);
        grid.compute_neighbor_counts();
        grid
    }

    /// A board with mines exactly at `mines`.
    ///
    /// Panics unless `mines` holds `MINE_COUNT` distinct positions.
    #[must_use]
    pub fn with_mines(mines: &[CellPos]) -> Self {
        assert_eq!(mines.len(), MINE_COUNT, "A board needs exactly {} mines", MINE_COUNT);

        let mut grid = Self::empty();
        for &pos in mines {
            assert!(!grid[pos].is_mine, "Duplicate mine at {}", pos);
            grid[pos].is_mine = true;
        }
        grid.compute_neighbor_counts();
        grid
    }

    /// Place mines by rejection sampling: a draw that hits an existing mine
    /// is retried.
    fn place_mines(&mut self, rng: &mut GameRng) {
        let mut placed = 0;
        while placed < MINE_COUNT {
            let pos = CellPos {
                row: rng.gen_range_usize(0..ROWS),
                col: rng.gen_range_usize(0..COLS),
            };
            if !self[pos].is_mine {
                self[pos].is_mine = true;
                placed += 1;
            }
        }
    }

    fn compute_neighbor_counts(&mut self) {
        for pos in CellPos::all() {
            if self[pos].is_mine {
                continue;
            }
            let count = neighbors(pos).into_iter().filter(|&n| self[n].is_mine).count();
            // At most 8.
            self[pos].neighbor_count = count as u8;
        }
    }

    /// Reveal `start` and, while the revealed cell has no adjacent mines,
    /// keep going outward. Neighbors reached this way are revealed even if
    /// flagged, and lose the flag. Each cell is revealed at most once.
    ///
    /// Returns the number of cells newly revealed.
    pub fn flood_reveal(&mut self, start: CellPos) -> usize {
        let mut stack = vec![start];
        let mut revealed = 0;

        while let Some(pos) = stack.pop() {
            let cell = &mut self[pos];
            if cell.is_revealed {
                continue;
            }
            cell.is_revealed = true;
            cell.is_flagged = false;
            revealed += 1;

            if cell.is_mine || cell.neighbor_count > 0 {
                continue;
            }
            stack.extend(neighbors(pos).into_iter().filter(|&n| !self[n].is_revealed));
        }

        revealed
    }

    /// Reveal every mine. Returns how many were newly revealed.
    pub fn reveal_all_mines(&mut self) -> usize {
        let mut revealed = 0;
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_mine && !cell.is_revealed {
                cell.is_revealed = true;
                revealed += 1;
            }
        }
        revealed
    }

    /// Safe cells still hidden. Zero means the board is cleared.
    #[must_use]
    pub fn unrevealed_safe_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.is_safe() && !c.is_revealed).count()
    }

    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.is_mine).count()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.is_revealed).count()
    }

    #[must_use]
    pub fn flag_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.is_flagged).count()
    }

    #[must_use]
    pub fn mines(&self) -> Vec<CellPos> {
        self.iter().filter(|(_, c)| c.is_mine).map(|(p, _)| p).collect()
    }

    /// All cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &Cell)> + '_ {
        CellPos::all().map(move |pos| (pos, &self[pos]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<CellPos> for Grid {
    type Output = Cell;

    fn index(&self, pos: CellPos) -> &Cell {
        &self.cells[pos.row][pos.col]
    }
}

impl IndexMut<CellPos> for Grid {
    fn index_mut(&mut self, pos: CellPos) -> &mut Cell {
        &mut self.cells[pos.row][pos.col]
    }
}

/// On-board positions adjacent to `pos`, including diagonals.
#[must_use]
pub fn neighbors(pos: CellPos) -> Neighbors {
    let mut out = Neighbors::new();
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let row = pos.row.checked_add_signed(dr);
            let col = pos.col.checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col) {
                if let Some(n) = CellPos::try_new(row, col) {
                    out.push(n);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> CellPos {
        CellPos::new(row, col)
    }

    /// Mines filling the top-left 3x3 block.
    fn corner_mines() -> Vec<CellPos> {
        (0..3).flat_map(|r| (0..3).map(move |c| p(r, c))).collect()
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(neighbors(p(0, 0)).len(), 3);
        assert_eq!(neighbors(p(0, 4)).len(), 5);
        assert_eq!(neighbors(p(4, 4)).len(), 8);
        assert_eq!(neighbors(p(8, 8)).len(), 3);
        assert!(!neighbors(p(4, 4)).contains(&p(4, 4)));
    }

    #[test]
    fn test_random_has_exact_mine_count() {
        for seed in 0..50 {
            let grid = Grid::random(&mut GameRng::new(seed));
            assert_eq!(grid.mine_count(), MINE_COUNT, "seed {}", seed);
            assert_eq!(grid.revealed_count(), 0);
        }
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::with_mines(&corner_mines());
        assert_eq!(grid[p(3, 3)].neighbor_count, 1);
        assert_eq!(grid[p(0, 3)].neighbor_count, 2);
        assert_eq!(grid[p(1, 3)].neighbor_count, 3);
        assert_eq!(grid[p(3, 0)].neighbor_count, 2);
        assert_eq!(grid[p(8, 8)].neighbor_count, 0);
    }

    #[test]
    fn test_flood_reveals_region_and_border() {
        let mut grid = Grid::with_mines(&corner_mines());
        let revealed = grid.flood_reveal(p(8, 8));

        // Everything but the mines is connected here.
        assert_eq!(revealed, 72);
        assert_eq!(grid.unrevealed_safe_count(), 0);
        assert!(grid.mines().iter().all(|&m| !grid[m].is_revealed));
    }

    #[test]
    fn test_flood_stops_at_numbers() {
        let mut grid = Grid::with_mines(&corner_mines());
        let revealed = grid.flood_reveal(p(1, 3));
        assert_eq!(revealed, 1);
        assert!(grid[p(1, 3)].is_revealed);
        assert!(!grid[p(1, 4)].is_revealed);
    }

    #[test]
    fn test_flood_clears_flags_on_the_way() {
        let mut grid = Grid::with_mines(&corner_mines());
        grid[p(5, 5)].is_flagged = true;

        grid.flood_reveal(p(8, 8));
        assert!(grid[p(5, 5)].is_revealed);
        assert!(!grid[p(5, 5)].is_flagged);
    }

    #[test]
    fn test_flood_on_revealed_is_noop() {
        let mut grid = Grid::with_mines(&corner_mines());
        grid.flood_reveal(p(1, 3));
        assert_eq!(grid.flood_reveal(p(1, 3)), 0);
    }

    #[test]
    fn test_reveal_all_mines() {
        let mut grid = Grid::with_mines(&corner_mines());
        assert_eq!(grid.reveal_all_mines(), 9);
        assert_eq!(grid.reveal_all_mines(), 0);
        assert_eq!(grid.revealed_count(), 9);
    }

    #[test]
    #[should_panic(expected = "Duplicate mine")]
    fn test_with_mines_rejects_duplicates() {
        let mut mines = corner_mines();
        mines[8] = mines[0];
        let _ = Grid::with_mines(&mines);
    }

    #[test]
    fn test_grid_serde() {
        let grid = Grid::random(&mut GameRng::new(3));
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
