//! Core building blocks shared by the engines: RNG, clocks, timers.
//!
//! Nothing in here knows about a particular game.

pub mod clock;
pub mod rng;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use rng::{GameRng, GameRngState};
pub use timer::{IntervalTimer, TimerId};
