//! # arcade-rules
//!
//! Rule engines for two small arcade games.
//!
//! ## Design Principles
//!
//! 1. **Externally Driven**: Engines never spawn threads or read the system
//!    time on their own. A host calls them per frame or per event and owns
//!    their lifetimes.
//!
//! 2. **Deterministic When Seeded**: Every engine takes a seed, and the
//!    catch engine takes a `Clock`, so any game can be replayed exactly.
//!
//! 3. **No Error Paths**: Unknown labels, off-board clicks and repeated
//!    actions fall back to a defined default instead of failing.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, cancellable interval timer
//! - `render`: `Surface` drawing seam and a recording implementation
//! - `games::catch`: three-lane falling-item game
//! - `games::minesweeper`: 9x9 minesweeper
//!
//! Logging goes through the `log` facade; install any logger to see it.

pub mod core;
pub mod games;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Clock, GameRng, GameRngState, IntervalTimer, ManualClock, SystemClock, TimerId};

pub use crate::render::{Color, DrawCommand, Font, Rect, RecordingSurface, Surface, TextAlign, TextBaseline};

pub use crate::games::catch::{CatchConfig, CatchEvent, CatchGame, ItemKind, Lane, RoundPhase};

pub use crate::games::minesweeper::{CellPos, InputMode, Minesweeper};
