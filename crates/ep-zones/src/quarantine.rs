//! Isolation of symptomatic agents.
//!
//! Transfers run at day close, after disease bookkeeping.  An agent leaves
//! quarantine only through its disease: recovery relocates it home, death
//! leaves a tombstone.  Disabling the policy stops new transfers but does
//! not release anyone early.

use log::info;

use ep_agent::{Agent, AgentArena, EpiState};
use ep_core::{AgentId, Point, SimRng, SimulationParameters};

use crate::WorldLayout;

/// New arrivals get a velocity uniform in `[-MAX, MAX)` per axis.
const QUARANTINE_SPEED: f64 = 0.05;

pub struct QuarantinePolicy;

impl QuarantinePolicy {
    #[inline]
    pub fn is_active(params: &SimulationParameters, day: u32) -> bool {
        params.quarantine_enabled && day >= params.quarantine_activation_day
    }

    /// Move every symptomatic agent that has shown symptoms for at least
    /// `quarantine_after_days` into the quarantine region.  Returns the ids
    /// moved, ascending.
    pub fn transfer(
        arena: &mut AgentArena,
        layout: &WorldLayout,
        params: &SimulationParameters,
        day: u32,
        rng: &mut SimRng,
    ) -> Vec<AgentId> {
        if !Self::is_active(params, day) {
            return Vec::new();
        }
        let region = layout.quarantine_region();
        let mut moved = Vec::new();
        for agent in arena.live_mut() {
            let due = agent.state == EpiState::InfectedSymptomatic
                && !agent.is_quarantined
                && agent.days_in_state >= params.quarantine_after_days;
            if !due {
                continue;
            }
            let position = region.sample(rng);
            let velocity = Point::new(rng.jitter(QUARANTINE_SPEED), rng.jitter(QUARANTINE_SPEED));
            agent.quarantine(position, velocity);
            moved.push(agent.id);
        }
        if !moved.is_empty() {
            info!("[day {day:03}] {} agent(s) moved to quarantine", moved.len());
        }
        moved
    }

    /// Put a recovered former inmate back at a uniform point of its home
    /// area.
    pub fn release(agent: &mut Agent, layout: &WorldLayout, rng: &mut SimRng) {
        debug_assert!(!agent.is_quarantined);
        agent.position = layout.home_area(agent.community).sample(rng);
        agent.home_position = agent.position;
    }
}
