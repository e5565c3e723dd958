//! The `Engine` struct and its tick loop.

use log::{debug, info, trace};

use ep_agent::{AgentArena, EpiState, PopulationBuilder};
use ep_core::{
    AgentId, Intervention, ParamKey, ParamValue, SimClock, SimMode, SimRng, SimulationParameters,
    Tick, TickRates,
};
use ep_spatial::SpatialIndex;
use ep_stats::{DailyStats, DayTally, Stats, StatisticsRecorder};
use ep_zones::{MarketplacePolicy, QuarantinePolicy, TravelPolicy, WorldLayout};

use crate::infection::resolve_infections;
use crate::movement::move_agents;
use crate::{NoopObserver, SimError, SimObserver, SimResult, Snapshot};

/// The simulation.
///
/// Owns all run state.  The caller owns the [`SimRng`] and passes it to
/// every call that draws randomness; `&mut self` on `step` and `reset`
/// serializes them.
pub struct Engine {
    params: SimulationParameters,
    mode:   SimMode,
    /// Derived from `params` whenever they change.
    rates:  TickRates,
    layout: WorldLayout,

    clock: SimClock,
    arena: AgentArena,
    /// Rebuilt from `arena` before every use.
    index: SpatialIndex,

    stats: StatisticsRecorder,
    /// Transitions of the day in progress.
    tally: DayTally,
}

impl Engine {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `params`, lay out the world for `mode`, and spawn and seed
    /// the population.  Records the day-0 statistics row.
    ///
    /// `SimMode::Quarantine` forces `quarantine_enabled`.
    pub fn initialize(
        mut params: SimulationParameters,
        mode: SimMode,
        rng: &mut SimRng,
    ) -> SimResult<Self> {
        if mode == SimMode::Quarantine {
            params.quarantine_enabled = true;
        }
        params.validate()?;

        let layout = WorldLayout::new(mode, &params);
        let mut builder = PopulationBuilder::new(&params)?;
        match layout.communities() {
            None => {
                let group = builder.spawn_group(layout.home_area(None), params.population, None, rng);
                builder.infect_among(&group, params.initial_infected(params.population), 0, rng);
            }
            Some(topology) => {
                let per_tile = params.num_per_community;
                let groups: Vec<Vec<AgentId>> = topology
                    .populated()
                    .into_iter()
                    .map(|tile| builder.spawn_group(topology.interior(tile), per_tile, Some(tile), rng))
                    .collect();
                let seeded_count = (params.communities_to_infect as usize).min(groups.len());
                let mut seeded = rng.sample_indices(groups.len(), seeded_count);
                seeded.sort_unstable();
                for g in seeded {
                    builder.infect_among(&groups[g], params.initial_infected(per_tile), 0, rng);
                }
            }
        }
        let arena = builder.build();

        let clock = SimClock::new();
        let mut stats = StatisticsRecorder::new(arena.len() as u32);
        let seeded = DayTally { new_infections: arena.counts().infectious(), ..DayTally::default() };
        stats.record(clock.day, &arena, seeded);

        let engine = Self::assemble(params, mode, clock, arena, stats, DayTally::default())?;
        info!(
            "[day {:03}] initialized {mode} run: {} agents, {} infected",
            engine.clock.day,
            engine.arena.len(),
            engine.arena.counts().infectious()
        );
        Ok(engine)
    }

    /// Rebuild an engine at `snapshot`, history and peaks included.  A
    /// snapshot without history starts a fresh one with a row of the
    /// snapshot's counts and no transitions.
    ///
    /// Stepping the result with a clone of the RNG state captured alongside
    /// the snapshot reproduces the snapshotted run tick for tick.
    pub fn restore(mut params: SimulationParameters, snapshot: Snapshot) -> SimResult<Self> {
        if snapshot.mode == SimMode::Quarantine {
            params.quarantine_enabled = true;
        }
        params.validate()?;
        check_snapshot(&snapshot)?;

        let clock = snapshot.clock();
        let population = snapshot.agents.len() as u32;
        let stats = if snapshot.history.is_empty() {
            let mut stats = StatisticsRecorder::new(population);
            stats.record(clock.day, &snapshot.agents, DayTally::default());
            stats
        } else {
            StatisticsRecorder::resume(population, snapshot.history)
        };
        let engine =
            Self::assemble(params, snapshot.mode, clock, snapshot.agents, stats, snapshot.tally)?;
        info!(
            "[day {:03}] restored {} run at {}",
            engine.clock.day, engine.mode, engine.clock.current_tick
        );
        Ok(engine)
    }

    fn assemble(
        params: SimulationParameters,
        mode: SimMode,
        clock: SimClock,
        arena: AgentArena,
        stats: StatisticsRecorder,
        tally: DayTally,
    ) -> SimResult<Self> {
        let layout = WorldLayout::new(mode, &params);
        let index = SpatialIndex::new(layout.world_bounds(), params.infection_radius)?;

        Ok(Self {
            rates: TickRates::derive(&params),
            params,
            mode,
            layout,
            clock,
            arena,
            index,
            stats,
            tally,
        })
    }

    /// Start over with the current parameters and mode.
    pub fn reset(&mut self, rng: &mut SimRng) -> SimResult<()> {
        *self = Self::initialize(self.params.clone(), self.mode, rng)?;
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick and return the resulting snapshot.
    pub fn step(&mut self, rng: &mut SimRng) -> Snapshot {
        self.step_observed(rng, &mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_observed<O: SimObserver>(&mut self, rng: &mut SimRng, observer: &mut O) -> Snapshot {
        self.process_tick(rng, observer);
        self.snapshot()
    }

    /// Step until `days` more days have closed.
    pub fn run_days<O: SimObserver>(&mut self, days: u32, rng: &mut SimRng, observer: &mut O) {
        let target = self.clock.day + days;
        while self.clock.day < target {
            self.process_tick(rng, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    fn process_tick<O: SimObserver>(&mut self, rng: &mut SimRng, observer: &mut O) {
        let now = self.clock.current_tick;
        let day = self.clock.day;
        let closes_day = self.clock.closes_day(self.params.ticks_per_day);
        observer.on_tick_start(now);

        // ── ① Movement ────────────────────────────────────────────────────
        let distancing = self.params.social_distance_factor > 0.0;
        if distancing {
            self.index.rebuild(self.arena.live_positions());
        }
        move_agents(
            &mut self.arena,
            &self.layout,
            distancing.then_some(&self.index),
            &self.params,
            self.rates.time_step,
            rng,
        );

        // ── ② Spatial index ───────────────────────────────────────────────
        self.index.rebuild(self.arena.live_positions());

        // ── ③ Infection ───────────────────────────────────────────────────
        let infected =
            resolve_infections(&mut self.arena, &self.index, &self.params, &self.rates, day, rng);
        self.tally.new_infections += infected.len() as u32;
        if !infected.is_empty() {
            trace!("[day {day:03}] {now}: {} new infection(s)", infected.len());
        }

        // ── ④ Disease bookkeeping ─────────────────────────────────────────
        if closes_day {
            self.close_day_transitions(day, rng);
        }

        // ── ⑤ Interventions ───────────────────────────────────────────────
        if closes_day {
            QuarantinePolicy::transfer(&mut self.arena, &self.layout, &self.params, day, rng);
        }
        MarketplacePolicy::advance_visits(&mut self.arena, day);
        if MarketplacePolicy::opens_now(&self.params, &self.clock) {
            MarketplacePolicy::open(&mut self.arena, &self.layout, &self.params, day, rng);
        }
        if let Some(topology) = self.layout.communities() {
            TravelPolicy::apply(&mut self.arena, topology, self.rates.travel, day, rng);
        }

        // ── ⑥ Statistics, clock ───────────────────────────────────────────
        if closes_day {
            let tally = std::mem::take(&mut self.tally);
            let row = self.stats.record(day + 1, &self.arena, tally);
            debug!(
                "[day {day:03}] closed: +{} infected, {} recovered, {} died; {} infectious",
                row.new_infections,
                row.new_recoveries,
                row.new_deaths,
                row.infected()
            );
            observer.on_day_end(&row);
        }
        self.clock.advance(self.params.ticks_per_day);

        observer.on_tick_end(now, infected.len());
    }

    /// Day-close disease progression for every live agent, in id order.
    fn close_day_transitions(&mut self, day: u32, rng: &mut SimRng) {
        let incubation = self.params.incubation_days;
        let duration = self.params.infection_duration_days;
        let mortality = self.params.mortality_rate;
        let mut deaths = 0;

        for agent in self.arena.live_mut() {
            agent.days_in_state += 1;
            match agent.state {
                EpiState::Exposed if agent.days_in_state >= incubation => {
                    agent.end_incubation();
                }
                EpiState::InfectedSymptomatic | EpiState::InfectedAsymptomatic
                    if f64::from(agent.days_in_state) >= duration * agent.recovery_modifier =>
                {
                    let died = rng.gen_bool(mortality);
                    let was_quarantined = agent.is_quarantined;
                    agent.resolve(died);
                    if died {
                        deaths += 1;
                    } else {
                        self.tally.new_recoveries += 1;
                        if was_quarantined {
                            QuarantinePolicy::release(agent, &self.layout, rng);
                        }
                    }
                }
                _ => {}
            }
        }

        self.tally.new_deaths += deaths;
        if deaths > 0 {
            info!("[day {day:03}] {deaths} death(s)");
        }
    }

    // ── Live control ──────────────────────────────────────────────────────

    /// Validate and apply one parameter change.  On error nothing changes.
    ///
    /// Takes effect on the next `step`; population-shape parameters
    /// (`population`, `num_per_community`, `communities_to_infect`,
    /// `fraction_infected_init`, trait distributions) on the next `reset`.
    pub fn set_parameter(&mut self, key: ParamKey, value: ParamValue) -> SimResult<()> {
        let mut params = self.params.clone();
        params.set(key, value)?;
        let index = if params.infection_radius != self.params.infection_radius {
            Some(SpatialIndex::new(self.layout.world_bounds(), params.infection_radius)?)
        } else {
            None
        };

        debug!("[day {:03}] {} = {value}", self.clock.day, key.as_str());
        self.params = params;
        if let Some(index) = index {
            self.index = index;
        }
        self.refresh_derived();
        Ok(())
    }

    /// Switch an intervention on or off.  Disabling never releases agents
    /// already quarantined and lets marketplace visits in progress finish.
    pub fn toggle_intervention(&mut self, kind: Intervention, enabled: bool) {
        match kind {
            Intervention::Quarantine  => self.params.quarantine_enabled = enabled,
            Intervention::Marketplace => self.params.marketplace_enabled = enabled,
        }
        info!(
            "[day {:03}] {kind} {}",
            self.clock.day,
            if enabled { "enabled" } else { "disabled" }
        );
    }

    fn refresh_derived(&mut self) {
        self.rates = TickRates::derive(&self.params);
        self.layout = WorldLayout::new(self.mode, &self.params);
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick:        self.clock.current_tick,
            day:         self.clock.day,
            tick_in_day: self.clock.tick_in_day,
            mode:        self.mode,
            agents:      self.arena.clone(),
            history:     self.stats.history().to_vec(),
            tally:       self.tally,
        }
    }

    /// Latest row, peaks, and the population they are measured against.
    pub fn daily_statistics(&self) -> Stats {
        self.stats.stats()
    }

    /// Every recorded row, day 0 first.
    pub fn history(&self) -> &[DailyStats] {
        self.stats.history()
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn mode(&self) -> SimMode {
        self.mode
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn arena(&self) -> &AgentArena {
        &self.arena
    }

    pub fn layout(&self) -> &WorldLayout {
        &self.layout
    }
}

/// Structural checks a deserialized snapshot must pass before it can seed
/// an engine.
fn check_snapshot(snapshot: &Snapshot) -> SimResult<()> {
    let agents = snapshot.agents.as_slice();
    if agents.iter().enumerate().any(|(i, a)| a.id.index() != i) {
        return Err(SimError::SnapshotMismatch("agent ids do not match their positions".into()));
    }
    if snapshot.tick.0 < u64::from(snapshot.tick_in_day) {
        return Err(SimError::SnapshotMismatch(format!(
            "tick_in_day {} exceeds tick {}",
            snapshot.tick_in_day, snapshot.tick.0
        )));
    }
    if snapshot.history.windows(2).any(|w| w[0].day >= w[1].day) {
        return Err(SimError::SnapshotMismatch("history days are not increasing".into()));
    }
    if let Some(last) = snapshot.history.last() {
        if last.day != snapshot.day {
            return Err(SimError::SnapshotMismatch(format!(
                "history ends on day {} but the snapshot is at day {}",
                last.day, snapshot.day
            )));
        }
    }
    let communities = snapshot.mode.has_communities();
    for agent in agents {
        if agent.is_quarantined && agent.state != EpiState::InfectedSymptomatic {
            return Err(SimError::SnapshotMismatch(format!(
                "{} is quarantined while {}",
                agent.id, agent.state
            )));
        }
        if agent.community.is_some() != communities {
            return Err(SimError::SnapshotMismatch(format!(
                "{} community {:?} does not fit {} mode",
                agent.id, agent.community, snapshot.mode
            )));
        }
        if !agent.position.is_finite() || !agent.velocity.is_finite() {
            return Err(SimError::SnapshotMismatch(format!("{} has a non-finite position", agent.id)));
        }
    }
    Ok(())
}
