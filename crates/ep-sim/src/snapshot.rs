//! Read-only view of the simulation at a tick boundary.

use serde::{Deserialize, Serialize};

use ep_agent::{Agent, AgentArena, StateCounts};
use ep_core::{AgentId, SimClock, SimMode, Tick};
use ep_stats::{DailyStats, DayTally};

/// Everything needed to render a frame or to resume the run with
/// [`Engine::restore`](crate::Engine::restore).
///
/// `agents` holds the whole arena, dead tombstones included, so ids in a
/// snapshot are the same ids the engine uses.  `history` and `tally` carry
/// the statistics so a restored run keeps its daily rows and peaks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick:        Tick,
    pub day:         u32,
    pub tick_in_day: u32,
    pub mode:        SimMode,
    pub agents:      AgentArena,
    /// Every closed day's row, day 0 first.
    #[serde(default)]
    pub history:     Vec<DailyStats>,
    /// Transitions of the day in progress.
    #[serde(default)]
    pub tally:       DayTally,
}

impl Snapshot {
    /// Agents a renderer should draw.
    pub fn live(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.live()
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        self.agents.get(id)
    }

    pub fn counts(&self) -> StateCounts {
        self.agents.counts()
    }

    pub fn clock(&self) -> SimClock {
        SimClock { current_tick: self.tick, day: self.day, tick_in_day: self.tick_in_day }
    }
}
