//! Probability units.
//!
//! A bare `f64` probability is ambiguous: per contact? per tick? per day?
//! Each unit gets its own type and conversions happen once, when the engine
//! derives its [`TickRates`][crate::TickRates], never inline at a call site.

use serde::{Deserialize, Serialize};

/// Chance that one infectious–susceptible pair within the infection radius
/// transmits during one tick.  Not amortized across `ticks_per_day`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerContact(pub f64);

/// Chance that an event happens at least once over one simulated day.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerDay(pub f64);

/// Chance that an event happens during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerTick(pub f64);

impl PerDay {
    /// The per-tick probability that compounds to `self` over
    /// `ticks_per_day` independent ticks: `1 - (1 - p)^(1/n)`.
    pub fn per_tick(self, ticks_per_day: u32) -> PerTick {
        let p = self.0.clamp(0.0, 1.0);
        if p >= 1.0 {
            return PerTick(1.0);
        }
        let n = f64::from(ticks_per_day.max(1));
        PerTick(1.0 - (1.0 - p).powf(1.0 / n))
    }
}
