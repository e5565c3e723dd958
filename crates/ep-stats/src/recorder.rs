//! Per-day state tallies and running peaks.

use serde::{Deserialize, Serialize};

use ep_agent::{AgentArena, StateCounts};

// ── DayTally ──────────────────────────────────────────────────────────────────

/// Transitions counted by the engine while a day is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTally {
    pub new_infections: u32,
    pub new_recoveries: u32,
    pub new_deaths:     u32,
}

// ── DailyStats ────────────────────────────────────────────────────────────────

/// One row of the daily history: state counts at the close of `day` plus
/// the transitions that happened during it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub day:            u32,
    pub susceptible:    u32,
    pub exposed:        u32,
    pub symptomatic:    u32,
    pub asymptomatic:   u32,
    pub removed:        u32,
    pub dead:           u32,
    pub quarantined:    u32,
    pub new_infections: u32,
    pub new_recoveries: u32,
    pub new_deaths:     u32,
}

impl DailyStats {
    pub fn new(day: u32, counts: StateCounts, tally: DayTally) -> Self {
        Self {
            day,
            susceptible:    counts.susceptible,
            exposed:        counts.exposed,
            symptomatic:    counts.symptomatic,
            asymptomatic:   counts.asymptomatic,
            removed:        counts.removed,
            dead:           counts.dead,
            quarantined:    counts.quarantined,
            new_infections: tally.new_infections,
            new_recoveries: tally.new_recoveries,
            new_deaths:     tally.new_deaths,
        }
    }

    /// Currently infectious, symptomatic or not.
    #[inline]
    pub fn infected(&self) -> u32 {
        self.symptomatic + self.asymptomatic
    }

    pub fn alive(&self) -> u32 {
        self.susceptible + self.exposed + self.infected() + self.removed
    }

    pub fn total(&self) -> u32 {
        self.alive() + self.dead
    }
}

// ── Peaks ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peaks {
    pub max_infected:     u32,
    /// First day `max_infected` was reached.
    pub max_infected_day: u32,
    pub max_quarantined:  u32,
    pub max_exposed:      u32,
}

impl Peaks {
    fn observe(&mut self, row: &DailyStats) {
        if row.infected() > self.max_infected {
            self.max_infected = row.infected();
            self.max_infected_day = row.day;
        }
        self.max_quarantined = self.max_quarantined.max(row.quarantined);
        self.max_exposed = self.max_exposed.max(row.exposed);
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Summary view: the latest row, the peaks, and the population it is
/// measured against.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub latest:             DailyStats,
    pub peaks:              Peaks,
    pub initial_population: u32,
}

impl Stats {
    /// `count` as a percentage of the initial population.
    pub fn percent(&self, count: u32) -> f64 {
        if self.initial_population == 0 {
            0.0
        } else {
            100.0 * f64::from(count) / f64::from(self.initial_population)
        }
    }

    pub fn infected_percent(&self) -> f64 {
        self.percent(self.latest.infected())
    }

    pub fn dead_percent(&self) -> f64 {
        self.percent(self.latest.dead)
    }

    /// Share of the population that has left the susceptible state.
    pub fn attack_rate_percent(&self) -> f64 {
        self.percent(self.initial_population.saturating_sub(self.latest.susceptible))
    }
}

// ── StatisticsRecorder ────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct StatisticsRecorder {
    history:            Vec<DailyStats>,
    peaks:              Peaks,
    initial_population: u32,
}

impl StatisticsRecorder {
    pub fn new(initial_population: u32) -> Self {
        Self { history: Vec::new(), peaks: Peaks::default(), initial_population }
    }

    /// Continue a recorded history.  Peaks are recomputed from the rows,
    /// which must be in increasing day order.
    pub fn resume(initial_population: u32, history: Vec<DailyStats>) -> Self {
        let mut peaks = Peaks::default();
        for row in &history {
            peaks.observe(row);
        }
        Self { history, peaks, initial_population }
    }

    /// Append the row for `day`.  Rows must arrive in increasing day order.
    pub fn record(&mut self, day: u32, arena: &AgentArena, tally: DayTally) -> DailyStats {
        debug_assert!(self.history.last().is_none_or(|last| last.day < day));
        let row = DailyStats::new(day, arena.counts(), tally);
        self.peaks.observe(&row);
        self.history.push(row);
        row
    }

    pub fn latest(&self) -> Option<&DailyStats> {
        self.history.last()
    }

    pub fn history(&self) -> &[DailyStats] {
        &self.history
    }

    pub fn peaks(&self) -> Peaks {
        self.peaks
    }

    pub fn initial_population(&self) -> u32 {
        self.initial_population
    }

    pub fn stats(&self) -> Stats {
        Stats {
            latest:             self.latest().copied().unwrap_or_default(),
            peaks:              self.peaks,
            initial_population: self.initial_population,
        }
    }
}
