//! Periodic gatherings at a central marketplace.
//!
//! On the first tick of every day divisible by `marketplace_interval_days`
//! a share of the free population is teleported to the marketplace.  Each
//! visitor stays `marketplace_duration_ticks` ticks, moving inside the
//! marketplace region, then returns to where it left from.

use log::{debug, info};

use ep_agent::AgentArena;
use ep_core::{AgentId, SimClock, SimRng, SimulationParameters};

use crate::WorldLayout;

pub struct MarketplacePolicy;

impl MarketplacePolicy {
    /// `true` if a gathering starts on the tick `clock` is about to run.
    pub fn opens_now(params: &SimulationParameters, clock: &SimClock) -> bool {
        params.marketplace_enabled
            && clock.is_day_start()
            && clock.day % params.marketplace_interval_days.max(1) == 0
    }

    /// Send `round(eligible × attendance)` free agents, sampled without
    /// replacement, to the marketplace.  Returns their ids, ascending.
    pub fn open(
        arena: &mut AgentArena,
        layout: &WorldLayout,
        params: &SimulationParameters,
        day: u32,
        rng: &mut SimRng,
    ) -> Vec<AgentId> {
        let eligible: Vec<AgentId> = arena.live().filter(|a| a.is_free()).map(|a| a.id).collect();
        let amount = ((eligible.len() as f64 * params.marketplace_attendance).round() as usize)
            .min(eligible.len());

        let mut attendees: Vec<AgentId> = rng
            .sample_indices(eligible.len(), amount)
            .into_iter()
            .map(|i| eligible[i])
            .collect();
        attendees.sort_unstable();

        let region = layout.marketplace_region();
        for &id in &attendees {
            let agent = arena.get_mut(id);
            agent.home_position = agent.position;
            agent.position = region.sample(rng);
            agent.market_ticks_left = params.marketplace_duration_ticks;
        }
        info!(
            "[day {day:03}] marketplace opened at {}: {} of {} eligible attending",
            layout.marketplace_center(),
            attendees.len(),
            eligible.len()
        );
        attendees
    }

    /// Count down every visit by one tick; visitors whose time is up return
    /// to their `home_position`.  Returns how many went home.
    pub fn advance_visits(arena: &mut AgentArena, day: u32) -> usize {
        let mut returned = 0;
        for agent in arena.live_mut().filter(|a| a.is_visiting_market()) {
            agent.market_ticks_left -= 1;
            if agent.market_ticks_left == 0 {
                agent.position = agent.home_position;
                returned += 1;
            }
        }
        if returned > 0 {
            debug!("[day {day:03}] {returned} marketplace visitor(s) returned home");
        }
        returned
    }
}
