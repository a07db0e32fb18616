//! The catch engine: round lifecycle, spawning, falling, scoring.

use std::time::Duration;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::basket::{Basket, Lane};
use super::config::{
    fall_speed_for_level, level_for_score, spawn_interval_for_level, CatchConfig,
    DEFAULT_TIME_LIMIT_SECS, INITIAL_SPAWN_INTERVAL, TICK_PERIOD,
};
use super::events::{Alert, CatchEvent};
use super::item::{pick_category, Item, ItemKind};
use crate::core::{Clock, GameRng, IntervalTimer, SystemClock, TimerId};

/// Round lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Never started.
    #[default]
    Inactive,
    Active,
    Ended,
}

/// Serializable view of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatchSnapshot {
    pub phase: RoundPhase,
    pub score: i64,
    pub level: u32,
    pub time_left: u32,
    pub basket: Basket,
    pub items: Vec<Item>,
    pub spawn_interval_ms: u64,
}

/// Outcome of catching one item.
enum Catch {
    Scored,
    Fatal,
}

/// Lane-based falling-item game.
///
/// The host calls [`update`](Self::update) once per frame with the latest
/// position label and [`poll_timer`](Self::poll_timer) (or
/// [`on_timer`](Self::on_timer)) to run the one-second countdown.
/// Notifications accumulate until [`drain_events`](Self::drain_events).
#[derive(Debug)]
pub struct CatchGame<C: Clock = SystemClock> {
    clock: C,
    lane_rng: GameRng,
    category_rng: GameRng,

    phase: RoundPhase,
    score: i64,
    level: u32,
    time_left: u32,

    basket: Basket,
    items: Vec<Item>,

    spawn_interval: Duration,
    last_spawn: Duration,
    countdown: IntervalTimer,

    events: Vec<CatchEvent>,
}

impl CatchGame<SystemClock> {
    /// Real-time engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new(), GameRng::from_entropy().seed())
    }

    /// Real-time engine with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_clock(SystemClock::new(), seed)
    }
}

impl Default for CatchGame<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CatchGame<C> {
    /// Engine driven by `clock` with a fixed seed.
    pub fn with_clock(clock: C, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self {
            clock,
            lane_rng: rng.for_context("lanes"),
            category_rng: rng.for_context("categories"),
            phase: RoundPhase::Inactive,
            score: 0,
            level: 1,
            time_left: DEFAULT_TIME_LIMIT_SECS,
            basket: Basket::default(),
            items: Vec::new(),
            spawn_interval: INITIAL_SPAWN_INTERVAL,
            last_spawn: Duration::ZERO,
            countdown: IntervalTimer::new(TICK_PERIOD),
            events: Vec::new(),
        }
    }

    // === Lifecycle ===

    /// Begin a new round. Any running countdown is cancelled before the
    /// counters reset.
    pub fn start(&mut self, config: &CatchConfig) {
        let now = self.clock.now();

        self.phase = RoundPhase::Active;
        self.score = 0;
        self.level = 1;
        self.time_left = config.effective_time_limit();
        self.items.clear();
        self.basket.lane = Lane::Center;
        self.spawn_interval = INITIAL_SPAWN_INTERVAL;
        self.last_spawn = now;

        let timer = self.countdown.arm(now);
        info!("Catch round started ({}s, {})", self.time_left, timer);
    }

    /// End the round and report the final score.
    ///
    /// Always cancels the countdown. Every call emits one `RoundEnded`.
    pub fn stop(&mut self) {
        self.countdown.cancel();
        self.phase = RoundPhase::Ended;
        self.events.push(CatchEvent::RoundEnded {
            score: self.score,
            level: self.level,
        });
        info!("Catch round ended (score {}, level {})", self.score, self.level);
    }

    // === Countdown ===

    /// Id of the live countdown, if a round is running.
    #[must_use]
    pub fn timer_id(&self) -> Option<TimerId> {
        self.countdown.current()
    }

    /// Countdown callback. Ignored unless `id` is the live countdown.
    ///
    /// An accepted tick also advances the schedule, so a later
    /// [`poll_timer`](Self::poll_timer) does not count the same second again.
    /// Returns whether the tick was applied.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.countdown.accepts(id) {
            trace!("Dropping stale {}", id);
            return false;
        }
        self.countdown.fire();
        self.tick();
        true
    }

    /// Fire every countdown tick that is due according to the clock.
    ///
    /// Returns the number of ticks applied.
    pub fn poll_timer(&mut self) -> u32 {
        let due = self.countdown.due_ticks(self.clock.now());
        let mut applied = 0;
        for _ in 0..due {
            if !self.countdown.is_armed() {
                break;
            }
            self.tick();
            applied += 1;
        }
        applied
    }

    fn tick(&mut self) {
        self.time_left = self.time_left.saturating_sub(1);
        trace!("Countdown: {}s left", self.time_left);
        if self.time_left == 0 {
            self.stop();
        }
    }

    // === Per-frame ===

    /// Advance one frame using the latest position label.
    ///
    /// No-op unless a round is active.
    pub fn update(&mut self, label: &str) {
        if self.phase != RoundPhase::Active {
            return;
        }

        self.basket.lane = Lane::from_label(label);

        let now = self.clock.now();
        if now.saturating_sub(self.last_spawn) > self.spawn_interval {
            self.spawn_random();
            self.last_spawn = now;
            self.spawn_interval = spawn_interval_for_level(self.level);
        }

        self.advance_items();
    }

    fn spawn_random(&mut self) {
        let lane = Lane::ALL[self.lane_rng.gen_range_usize(0..Lane::ALL.len())];
        let kind = pick_category(self.category_rng.gen_unit()).kind;
        self.spawn_item(lane, kind);
    }

    /// Drop a new item of `kind` from the top of `lane` at the current
    /// level's speed.
    pub fn spawn_item(&mut self, lane: Lane, kind: ItemKind) -> &Item {
        let item = Item::new(lane, kind, fall_speed_for_level(self.level));
        debug!("Spawned {:?} in {} at speed {}", kind, lane, item.speed);
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    fn advance_items(&mut self) {
        let mut pending = std::mem::take(&mut self.items).into_iter();
        let mut survivors = Vec::with_capacity(pending.len());

        for mut item in pending.by_ref() {
            item.y += item.speed;

            if item.in_catch_band() && item.lane == self.basket.lane {
                match self.catch_item(&item) {
                    Catch::Scored => continue,
                    Catch::Fatal => break,
                }
            }

            if item.is_off_screen() {
                trace!("{:?} left the field", item.kind);
                continue;
            }

            survivors.push(item);
        }

        // Items after a fatal catch are left as they were.
        survivors.extend(pending);
        self.items = survivors;
    }

    fn catch_item(&mut self, item: &Item) -> Catch {
        if item.kind.is_fatal() {
            debug!("Caught a bomb in {}", item.lane);
            self.stop();
            self.events.push(CatchEvent::Alert(Alert::BombCaught));
            Catch::Fatal
        } else {
            self.add_score(item.score);
            Catch::Scored
        }
    }

    fn add_score(&mut self, points: i64) {
        self.score += points;

        // Level only moves up.
        let reached = level_for_score(self.score);
        if reached > i64::from(self.level) {
            self.level = u32::try_from(reached).unwrap_or(u32::MAX);
            debug!("Level up: {}", self.level);
        }

        self.events.push(CatchEvent::ScoreChanged {
            score: self.score,
            level: self.level,
        });
    }

    // === Events ===

    /// Notifications not yet handed out.
    #[must_use]
    pub fn pending_events(&self) -> &[CatchEvent] {
        &self.events
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CatchEvent> {
        self.events.drain(..)
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::Ended
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Seconds remaining in the round.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn spawn_interval(&self) -> Duration {
        self.spawn_interval
    }

    #[must_use]
    pub fn snapshot(&self) -> CatchSnapshot {
        CatchSnapshot {
            phase: self.phase,
            score: self.score,
            level: self.level,
            time_left: self.time_left,
            basket: self.basket,
            items: self.items.clone(),
            spawn_interval_ms: u64::try_from(self.spawn_interval.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
