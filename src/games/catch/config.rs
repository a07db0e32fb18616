//! Fixed tuning constants and the per-round configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Playfield width and height in pixels.
pub const FIELD_SIZE: f64 = 200.0;

/// Basket anchor height.
pub const BASKET_Y: f64 = 180.0;
pub const BASKET_WIDTH: f64 = 40.0;
pub const BASKET_HEIGHT: f64 = 20.0;

/// Inclusive fall-progress band in which an item can be caught.
pub const CATCH_BAND: (f64, f64) = (BASKET_Y - BASKET_HEIGHT / 2.0, BASKET_Y + BASKET_HEIGHT / 2.0);

/// Items whose fall progress exceeds this are gone.
pub const DESPAWN_Y: f64 = FIELD_SIZE;

pub const BASE_SPEED: f64 = 2.0;
/// Extra fall speed per level.
pub const SPEED_PER_LEVEL: f64 = 0.5;

/// Points needed per level.
pub const POINTS_PER_LEVEL: i64 = 500;

pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;

pub const INITIAL_SPAWN_INTERVAL: Duration = Duration::from_millis(1000);
pub const MIN_SPAWN_INTERVAL: Duration = Duration::from_millis(400);
/// Spawn interval reduction per level above 1.
pub const SPAWN_INTERVAL_STEP: Duration = Duration::from_millis(100);

/// Countdown cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawn interval for a level: `max(400ms, 1000ms - (level - 1) * 100ms)`.
#[must_use]
pub fn spawn_interval_for_level(level: u32) -> Duration {
    let steps = level.saturating_sub(1);
    INITIAL_SPAWN_INTERVAL
        .checked_sub(SPAWN_INTERVAL_STEP.saturating_mul(steps))
        .map_or(MIN_SPAWN_INTERVAL, |d| d.max(MIN_SPAWN_INTERVAL))
}

/// Fall speed of an item spawned at `level`.
#[must_use]
pub fn fall_speed_for_level(level: u32) -> f64 {
    BASE_SPEED + f64::from(level) * SPEED_PER_LEVEL
}

/// Level implied by a score: `floor(score / 500) + 1`.
#[must_use]
pub fn level_for_score(score: i64) -> i64 {
    score.div_euclid(POINTS_PER_LEVEL) + 1
}

/// Options for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchConfig {
    /// Round length in seconds. `None` or zero means the default.
    pub time_limit: Option<u32>,
}

impl CatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the round length.
    #[must_use]
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit = Some(secs);
        self
    }

    /// Round length after applying the default.
    #[must_use]
    pub fn effective_time_limit(&self) -> u32 {
        match self.time_limit {
            Some(secs) if secs > 0 => secs,
            _ => DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_curve() {
        assert_eq!(spawn_interval_for_level(1), Duration::from_millis(1000));
        assert_eq!(spawn_interval_for_level(2), Duration::from_millis(900));
        assert_eq!(spawn_interval_for_level(7), Duration::from_millis(400));
        assert_eq!(spawn_interval_for_level(8), Duration::from_millis(400));
        assert_eq!(spawn_interval_for_level(u32::MAX), Duration::from_millis(400));
        // Level 0 never occurs, but must not underflow.
        assert_eq!(spawn_interval_for_level(0), Duration::from_millis(1000));
    }

    #[test]
    fn test_fall_speed() {
        assert_eq!(fall_speed_for_level(1), 2.5);
        assert_eq!(fall_speed_for_level(4), 4.0);
    }

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(500), 2);
        assert_eq!(level_for_score(1200), 3);
        assert_eq!(level_for_score(-100), 0);
    }

    #[test]
    fn test_catch_band() {
        assert_eq!(CATCH_BAND, (170.0, 190.0));
    }

    #[test]
    fn test_config_time_limit() {
        assert_eq!(CatchConfig::new().effective_time_limit(), 60);
        assert_eq!(CatchConfig::new().with_time_limit(5).effective_time_limit(), 5);
        assert_eq!(CatchConfig::new().with_time_limit(0).effective_time_limit(), 60);
    }

    #[test]
    fn test_config_serde() {
        let config = CatchConfig::new().with_time_limit(30);
        let json = serde_json::to_string(&config).unwrap();
        let back: CatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
