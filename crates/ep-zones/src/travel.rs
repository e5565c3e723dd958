//! Inter-community travel.

use log::debug;

use ep_agent::AgentArena;
use ep_core::{CommunityId, PerTick, SimRng};

use crate::CommunityTopology;

pub struct TravelPolicy;

impl TravelPolicy {
    /// Each free agent moves, with probability `rate`, to a uniformly chosen
    /// other populated tile and lands uniformly inside its interior.  The
    /// destination becomes its new home.  Returns the number of moves.
    pub fn apply(
        arena: &mut AgentArena,
        topology: &CommunityTopology,
        rate: PerTick,
        day: u32,
        rng: &mut SimRng,
    ) -> usize {
        if rate.0 <= 0.0 {
            return 0;
        }
        let populated = topology.populated();
        let mut moves = 0;
        for agent in arena.live_mut().filter(|a| a.is_free()) {
            if !rng.gen_bool(rate.0) {
                continue;
            }
            let destinations: Vec<CommunityId> =
                populated.iter().copied().filter(|&c| Some(c) != agent.community).collect();
            let Some(&dest) = rng.choose(&destinations) else {
                continue;
            };
            agent.community = Some(dest);
            agent.position = topology.interior(dest).sample(rng);
            agent.home_position = agent.position;
            moves += 1;
        }
        if moves > 0 {
            debug!("[day {day:03}] {moves} agent(s) travelled between communities");
        }
        moves
    }
}
