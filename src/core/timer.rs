//! Cancellable fixed-cadence timer.
//!
//! The timer does not run by itself. Whoever owns it asks how many periods
//! have elapsed (`due_ticks`) or routes an external callback through a
//! `TimerId`. Every `arm` starts a new generation, so a callback that was
//! scheduled before a restart can be recognised and dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one arming of an [`IntervalTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Fixed-period repeating timer.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    period: Duration,
    generation: u64,
    /// Time of the next fire, `None` while cancelled.
    next_fire: Option<Duration>,
}

impl IntervalTimer {
    /// Create a cancelled timer with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "Timer period must be non-zero");
        Self {
            period,
            generation: 0,
            next_fire: None,
        }
    }

    /// Start (or restart) the timer. Any previous arming is cancelled first.
    pub fn arm(&mut self, now: Duration) -> TimerId {
        self.cancel();
        self.generation += 1;
        self.next_fire = Some(now + self.period);
        TimerId(self.generation)
    }

    /// Stop the timer. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Id of the current arming, if armed.
    #[must_use]
    pub fn current(&self) -> Option<TimerId> {
        self.next_fire.map(|_| TimerId(self.generation))
    }

    /// Whether `id` belongs to the live arming.
    #[must_use]
    pub fn accepts(&self, id: TimerId) -> bool {
        self.current() == Some(id)
    }

    /// Record one fire delivered from outside (a callback), pushing the
    /// schedule forward a period so `due_ticks` does not count it again.
    pub fn fire(&mut self) {
        if let Some(next) = self.next_fire.as_mut() {
            *next += self.period;
        }
    }

    /// Number of whole periods elapsed since the last fire, advancing the
    /// schedule past them. Zero when cancelled.
    pub fn due_ticks(&mut self, now: Duration) -> u32 {
        let Some(mut next) = self.next_fire else {
            return 0;
        };

        let mut ticks = 0;
        while next <= now {
            ticks += 1;
            next += self.period;
        }
        self.next_fire = Some(next);
        ticks
    }
}
