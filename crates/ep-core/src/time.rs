//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter plus a day counter.
//! A fixed number of ticks (`ticks_per_day`) makes one simulated day:
//!
//!   tick:        0  1  2 … 23 | 24 25 … 47 | 48 …
//!   tick_in_day: 0  1  2 … 23 |  0  1 … 23 |  0 …
//!   day:         0  0  0 …  0 |  1  1 …  1 |  2 …
//!
//! The day closes on the last tick of the day; `day` increments when
//! `tick_in_day` wraps.  Day-gated policies read `day`, never the raw tick.
//!
//! `tick_in_day` is tracked explicitly instead of derived as
//! `tick % ticks_per_day` so a live change of `ticks_per_day` only affects
//! the current and future days.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick and day counters of a run.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    /// The tick currently being (or about to be) simulated.
    pub current_tick: Tick,
    /// Completed days.  Equals the index of the day in progress.
    pub day: u32,
    /// Position of `current_tick` inside the day, `0 .. ticks_per_day`.
    pub tick_in_day: u32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` on the first tick of a day.
    #[inline]
    pub fn is_day_start(&self) -> bool {
        self.tick_in_day == 0
    }

    /// `true` if the tick about to be simulated is the last of its day.
    #[inline]
    pub fn closes_day(&self, ticks_per_day: u32) -> bool {
        self.tick_in_day + 1 >= ticks_per_day
    }

    /// Advance by one tick.  Returns `true` if this closed the day.
    pub fn advance(&mut self, ticks_per_day: u32) -> bool {
        let closed = self.closes_day(ticks_per_day);
        self.current_tick = self.current_tick + 1;
        if closed {
            self.day += 1;
            self.tick_in_day = 0;
        } else {
            self.tick_in_day += 1;
        }
        closed
    }

    /// Fraction of a day one tick represents; the integration step `dt`.
    #[inline]
    pub fn time_step(ticks_per_day: u32) -> f64 {
        1.0 / f64::from(ticks_per_day.max(1))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} tick {})", self.current_tick, self.day, self.tick_in_day)
    }
}
