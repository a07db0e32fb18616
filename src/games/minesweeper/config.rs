//! Board dimensions and styling constants.

pub const ROWS: usize = 9;
pub const COLS: usize = 9;
pub const MINE_COUNT: usize = 9;
pub const CELL_COUNT: usize = ROWS * COLS;
pub const SAFE_CELL_COUNT: usize = CELL_COUNT - MINE_COUNT;

/// Board edge length in pixels (the board is square).
pub const BOARD_PX: f64 = 500.0;
pub const CELL_PX: f64 = BOARD_PX / COLS as f64;

const NUMBER_COLORS: [&str; 8] = ["blue", "green", "red", "darkblue", "brown", "cyan", "black", "gray"];

/// Text color for a neighbor count. Out-of-range counts are black.
#[must_use]
pub fn number_color(count: u8) -> &'static str {
    usize::from(count)
        .checked_sub(1)
        .and_then(|i| NUMBER_COLORS.get(i))
        .copied()
        .unwrap_or("black")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(CELL_COUNT, 81);
        assert_eq!(SAFE_CELL_COUNT, 72);
    }

    #[test]
    fn test_number_color() {
        assert_eq!(number_color(1), "blue");
        assert_eq!(number_color(3), "red");
        assert_eq!(number_color(8), "gray");
        assert_eq!(number_color(0), "black");
        assert_eq!(number_color(9), "black");
    }
}
