//! Maps real elapsed time onto the displayed simulated time.
//!
//! The clock is informational only. One tick is one fixed step of cell time
//! no matter how much simulated time the clock reports for it, so changing
//! the speed changes the displayed rate and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Simulated span broken down for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimDuration {
    pub total_seconds: f64,
}

impl SimDuration {
    #[must_use]
    pub fn from_seconds(total_seconds: f64) -> Self {
        Self {
            total_seconds: total_seconds.max(0.0),
        }
    }

    fn whole(&self) -> u64 {
        self.total_seconds.floor() as u64
    }

    #[must_use]
    pub fn days(&self) -> u64 {
        self.whole() / SECONDS_PER_DAY
    }

    #[must_use]
    pub fn hours(&self) -> u64 {
        (self.whole() % SECONDS_PER_DAY) / 3600
    }

    #[must_use]
    pub fn minutes(&self) -> u64 {
        (self.whole() % 3600) / 60
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.whole() % 60
    }
}

impl fmt::Display for SimDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days(),
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    origin: Instant,
    last_tick: Instant,
    /// Multiples of the baseline rate. Never below 1.
    speed: u32,
    seconds_per_baseline: f64,
    total_simulated: f64,
}

impl SimulationClock {
    #[must_use]
    pub fn new(now: Instant, seconds_per_baseline: f64, speed: u32) -> Self {
        Self {
            origin: now,
            last_tick: now,
            speed: speed.max(1),
            seconds_per_baseline,
            total_simulated: 0.0,
        }
    }

    /// Converts the real time since the previous call into simulated time and
    /// moves the tick mark to `now`.
    pub fn advance(&mut self, now: Instant) -> SimDuration {
        let real_delta = now.saturating_duration_since(self.last_tick).as_secs_f64();
        let simulated = real_delta * self.rate();
        self.last_tick = now;
        self.total_simulated += simulated;
        SimDuration::from_seconds(simulated)
    }

    /// Simulated seconds per real second at the current speed.
    #[must_use]
    pub fn rate(&self) -> f64 {
        f64::from(self.speed) * self.seconds_per_baseline
    }

    /// Sets the speed multiplier, clamped to at least one baseline unit.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.speed.saturating_add(1));
    }

    pub fn speed_down(&mut self) {
        self.set_speed(self.speed.saturating_sub(1));
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Moves the tick mark to `now` without accruing time. Called on resume so
    /// the paused interval is not replayed as one huge delta.
    pub fn resume(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Re-originates the clock at `now` and drops the accumulated total.
    pub fn reset(&mut self, now: Instant) {
        self.origin = now;
        self.last_tick = now;
        self.total_simulated = 0.0;
    }

    /// Simulated time accumulated since the origin.
    #[must_use]
    pub fn total(&self) -> SimDuration {
        SimDuration::from_seconds(self.total_simulated)
    }

    #[must_use]
    pub fn origin(&self) -> Instant {
        self.origin
    }
}
