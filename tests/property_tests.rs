//! Property tests for both engines.

use std::collections::BTreeSet;
use std::time::Duration;

use proptest::prelude::*;

use arcade_rules::core::{GameRng, ManualClock};
use arcade_rules::games::catch::config::{level_for_score, spawn_interval_for_level};
use arcade_rules::games::catch::{CatchConfig, CatchGame, ItemKind, Lane};
use arcade_rules::games::minesweeper::config::SAFE_CELL_COUNT;
use arcade_rules::games::minesweeper::{neighbors, CellPos, Grid, Minesweeper};

fn lane() -> impl Strategy<Value = Lane> {
    prop_oneof![Just(Lane::Left), Just(Lane::Center), Just(Lane::Right)]
}

fn scoring_kind() -> impl Strategy<Value = ItemKind> {
    prop_oneof![Just(ItemKind::Apple), Just(ItemKind::Grape)]
}

fn label_for(lane: Lane) -> &'static str {
    match lane {
        Lane::Left => "left",
        Lane::Center => "center",
        Lane::Right => "right",
    }
}

/// Reference flood: breadth-first over zero cells, collecting borders.
fn expected_region(grid: &Grid, start: CellPos) -> BTreeSet<CellPos> {
    let mut seen = BTreeSet::new();
    let mut queue = vec![start];
    while let Some(pos) = queue.pop() {
        if !seen.insert(pos) {
            continue;
        }
        if grid[pos].neighbor_count == 0 {
            queue.extend(neighbors(pos));
        }
    }
    seen
}

proptest! {
    #[test]
    fn spawn_interval_bounded_and_non_increasing(level in 1u32..10_000) {
        let here = spawn_interval_for_level(level);
        let next = spawn_interval_for_level(level + 1);
        prop_assert!(here >= Duration::from_millis(400));
        prop_assert!(here <= Duration::from_millis(1000));
        prop_assert!(next <= here);
    }

    #[test]
    fn level_formula_is_monotonic(score in 0i64..1_000_000, bump in 0i64..1000) {
        prop_assert!(level_for_score(score + bump) >= level_for_score(score));
        prop_assert_eq!(level_for_score(score), score / 500 + 1);
    }

    /// Score only moves when the item's lane matches the basket's.
    #[test]
    fn catch_requires_matching_lane(item_lane in lane(), basket_lane in lane(), kind in scoring_kind()) {
        let mut game = CatchGame::with_clock(ManualClock::new(), 0);
        game.start(&CatchConfig::new());
        game.spawn_item(item_lane, kind);

        while !game.items().is_empty() {
            game.update(label_for(basket_lane));
        }

        let expected = if item_lane == basket_lane { kind.category().score } else { 0 };
        prop_assert_eq!(game.score(), expected);
    }

    #[test]
    fn random_boards_have_nine_mines(seed in any::<u64>()) {
        let grid = Grid::random(&mut GameRng::new(seed));
        prop_assert_eq!(grid.mine_count(), 9);
        for (pos, cell) in grid.iter() {
            if cell.is_mine {
                continue;
            }
            let around = neighbors(pos).into_iter().filter(|&n| grid[n].is_mine).count();
            prop_assert_eq!(usize::from(cell.neighbor_count), around);
        }
    }

    /// A reveal opens exactly the connected zero region plus its border.
    #[test]
    fn flood_matches_reference(seed in any::<u64>(), pick in 0usize..72) {
        let mut game = Minesweeper::new(seed);
        game.init();

        let safe: Vec<_> = game.grid().iter().filter(|(_, c)| !c.is_mine).map(|(p, _)| p).collect();
        prop_assert_eq!(safe.len(), SAFE_CELL_COUNT);
        let start = safe[pick];
        let expected = expected_region(game.grid(), start);

        game.reveal(start);

        let revealed: BTreeSet<_> = game.grid().iter().filter(|(_, c)| c.is_revealed).map(|(p, _)| p).collect();
        prop_assert_eq!(revealed, expected);
    }

    /// Won is set exactly when all 72 safe cells are revealed.
    #[test]
    fn win_iff_all_safe_revealed(seed in any::<u64>()) {
        let mut game = Minesweeper::new(seed);
        game.init();

        let safe: Vec<_> = game.grid().iter().filter(|(_, c)| !c.is_mine).map(|(p, _)| p).collect();
        for pos in safe {
            game.reveal(pos);
            game.check_win_condition();
            let all = game.grid().unrevealed_safe_count() == 0;
            prop_assert_eq!(game.is_game_won(), all);
        }
        prop_assert!(game.is_game_won());
    }
}
