//! "Catch" - a three-lane falling-item game.
//!
//! - The basket follows a discrete position label (left / center / right)
//! - Apples and grapes score, a bomb ends the round
//! - Every 500 points is a level; higher levels spawn faster and fall faster
//! - A one-second countdown ends the round when it reaches zero
//!
//! ```
//! use arcade_rules::core::ManualClock;
//! use arcade_rules::games::catch::{CatchConfig, CatchEvent, CatchGame};
//!
//! let clock = ManualClock::new();
//! let mut game = CatchGame::with_clock(clock.clone(), 7);
//! game.start(&CatchConfig::new().with_time_limit(3));
//!
//! for _ in 0..3 {
//!     clock.advance_ms(1000);
//!     game.update("left");
//!     game.poll_timer();
//! }
//!
//! assert!(game.is_game_over());
//! let ended = game
//!     .drain_events()
//!     .filter(|e| matches!(e, CatchEvent::RoundEnded { .. }))
//!     .count();
//! assert_eq!(ended, 1);
//! ```

mod basket;
pub mod config;
mod engine;
mod events;
mod item;
mod render;

pub use basket::{Basket, Lane};
pub use config::CatchConfig;
pub use engine::{CatchGame, CatchSnapshot, RoundPhase};
pub use events::{Alert, CatchEvent};
pub use item::{pick_category, Item, ItemCategory, ItemKind, CATEGORIES};
