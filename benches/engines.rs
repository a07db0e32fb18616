//! Hot-path benchmarks for both engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arcade_rules::core::{GameRng, ManualClock};
use arcade_rules::games::catch::{CatchConfig, CatchGame};
use arcade_rules::games::minesweeper::{CellPos, Grid, Minesweeper};

fn bench_catch_frames(c: &mut Criterion) {
    c.bench_function("catch_1000_frames", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let mut game = CatchGame::with_clock(clock.clone(), 42);
            game.start(&CatchConfig::new().with_time_limit(600));
            for frame in 0..1000u32 {
                clock.advance_ms(16);
                game.update(if frame % 120 < 60 { "left" } else { "right" });
                game.poll_timer();
            }
            black_box(game.score())
        })
    });
}

fn bench_board_deal(c: &mut Criterion) {
    let mut rng = GameRng::new(7);
    c.bench_function("minesweeper_deal", |b| b.iter(|| black_box(Grid::random(&mut rng))));
}

fn bench_flood(c: &mut Criterion) {
    let corner: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| CellPos::new(r, c))).collect();
    c.bench_function("minesweeper_full_flood", |b| {
        b.iter(|| {
            let mut game = Minesweeper::new(0);
            game.init_with_mines(&corner);
            game.handle_click(490.0, 490.0);
            black_box(game.is_game_won())
        })
    });
}

criterion_group!(benches, bench_catch_frames, bench_board_deal, bench_flood);
criterion_main!(benches);
