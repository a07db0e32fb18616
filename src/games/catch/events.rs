//! Notifications produced by the catch engine.

use serde::{Deserialize, Serialize};

/// Terminal, user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alert {
    /// A bomb landed in the basket.
    BombCaught,
}

impl Alert {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Alert::BombCaught => "You caught a bomb! Game over!",
        }
    }
}

/// Something the host may want to react to.
///
/// Events queue up in the engine in the order they happen and are handed
/// out by `CatchGame::drain_events`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchEvent {
    /// Score changed after a catch.
    ScoreChanged { score: i64, level: u32 },
    /// The round stopped.
    RoundEnded { score: i64, level: u32 },
    Alert(Alert),
}
