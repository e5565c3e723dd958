//! The per-agent record and its state transitions.
//!
//! Transitions are methods on [`Agent`] so the invariants that tie fields
//! together (`days_in_state` resets, quarantine only while symptomatic, no
//! revival of the dead) live in one place.  Deciding *when* a transition
//! fires is the engine's job.

use serde::{Deserialize, Serialize};

use ep_core::{AgentId, CommunityId, Point};

use crate::EpiState;

/// Individual traits drawn once at spawn time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentTraits {
    /// Multiplier on the per-contact transmission probability.
    pub susceptibility: f64,
    /// Multiplier on the infectious period.
    pub recovery_modifier: f64,
    pub obeys_social_distancing: bool,
}

impl Default for AgentTraits {
    fn default() -> Self {
        Self {
            susceptibility:          1.0,
            recovery_modifier:       1.0,
            obeys_social_distancing: true,
        }
    }
}

/// One simulated individual.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id:       AgentId,
    pub position: Point,
    pub velocity: Point,

    pub state: EpiState,
    /// Whole days spent in `state`.  Reset on every transition.
    pub days_in_state: u32,
    /// Day the agent was infected; `None` while never infected.
    pub infection_day: Option<u32>,
    /// Outcome of the symptom roll, fixed at infection time.
    pub asymptomatic: bool,

    pub susceptibility:          f64,
    pub recovery_modifier:       f64,
    pub obeys_social_distancing: bool,

    pub is_quarantined: bool,
    /// Where a marketplace visitor returns to.
    pub home_position: Point,
    /// Ticks left at the marketplace; `0` when not visiting.
    pub market_ticks_left: u32,
    /// Home tile in communities mode.
    pub community: Option<CommunityId>,
    /// Secondary infections caused by this agent.
    pub infections_caused: u32,
}

impl Agent {
    /// A susceptible agent at `position`.
    pub fn new(
        id: AgentId,
        position: Point,
        velocity: Point,
        traits: AgentTraits,
        community: Option<CommunityId>,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            state: EpiState::Susceptible,
            days_in_state: 0,
            infection_day: None,
            asymptomatic: false,
            susceptibility: traits.susceptibility,
            recovery_modifier: traits.recovery_modifier,
            obeys_social_distancing: traits.obeys_social_distancing,
            is_quarantined: false,
            home_position: position,
            market_ticks_left: 0,
            community,
            infections_caused: 0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.state.is_infectious()
    }

    #[inline]
    pub fn is_visiting_market(&self) -> bool {
        self.market_ticks_left > 0
    }

    /// Alive, not quarantined, not at the marketplace.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.is_alive() && !self.is_quarantined && !self.is_visiting_market()
    }

    fn enter(&mut self, state: EpiState) {
        self.state = state;
        self.days_in_state = 0;
    }

    /// Susceptible → Exposed (when `incubating`) or straight to the
    /// infectious state picked by the symptom roll.
    pub fn infect(&mut self, day: u32, asymptomatic: bool, incubating: bool) {
        debug_assert_eq!(self.state, EpiState::Susceptible, "{} infected twice", self.id);
        self.infection_day = Some(day);
        self.asymptomatic = asymptomatic;
        if incubating {
            self.enter(EpiState::Exposed);
        } else {
            self.enter(EpiState::infected(asymptomatic));
        }
    }

    /// Exposed → infectious, keeping the symptom roll made at infection.
    pub fn end_incubation(&mut self) {
        debug_assert_eq!(self.state, EpiState::Exposed);
        self.enter(EpiState::infected(self.asymptomatic));
    }

    /// Infectious period over: died or recovered.  Clears quarantine.
    pub fn resolve(&mut self, died: bool) {
        debug_assert!(self.state.is_infectious());
        self.is_quarantined = false;
        if died {
            self.market_ticks_left = 0;
            self.velocity = Point::ORIGIN;
            self.enter(EpiState::Dead);
        } else {
            self.enter(EpiState::Removed);
        }
    }

    /// Move into quarantine at `position`.  Cancels any marketplace visit.
    pub fn quarantine(&mut self, position: Point, velocity: Point) {
        debug_assert_eq!(self.state, EpiState::InfectedSymptomatic);
        self.is_quarantined = true;
        self.market_ticks_left = 0;
        self.position = position;
        self.velocity = velocity;
    }
}
