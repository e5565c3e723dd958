//! Population construction.
//!
//! # Usage
//!
//! ```rust
//! use ep_agent::PopulationBuilder;
//! use ep_core::{Bounds, SimRng, SimulationParameters};
//!
//! let params = SimulationParameters::default();
//! let mut rng = SimRng::new(42);
//!
//! let mut builder = PopulationBuilder::new(&params).unwrap();
//! let group = builder.spawn_group(Bounds::new(-0.85, 0.85, -0.85, 0.85), 200, None, &mut rng);
//! builder.infect_among(&group, 2, 0, &mut rng);
//! let arena = builder.build();
//!
//! assert_eq!(arena.len(), 200);
//! assert_eq!(arena.counts().infectious(), 2);
//! ```

use ep_core::{AgentId, Bounds, CommunityId, ConfigResult, Point, SimRng, SimulationParameters};

use crate::{Agent, AgentArena, TraitSampler};

/// Initial velocities are uniform in `[-MAX, MAX)` per axis.
const INITIAL_SPEED: f64 = 0.2;

/// Spawns agents into a fresh [`AgentArena`].
pub struct PopulationBuilder {
    sampler:          TraitSampler,
    prob_no_symptoms: f64,
    arena:            AgentArena,
}

impl PopulationBuilder {
    pub fn new(params: &SimulationParameters) -> ConfigResult<Self> {
        Ok(Self {
            sampler:          TraitSampler::new(params)?,
            prob_no_symptoms: params.prob_no_symptoms,
            arena:            AgentArena::new(),
        })
    }

    /// Spawn `count` susceptible agents uniformly inside `area`.  Returns
    /// their ids in creation order.
    pub fn spawn_group(
        &mut self,
        area: Bounds,
        count: u32,
        community: Option<CommunityId>,
        rng: &mut SimRng,
    ) -> Vec<AgentId> {
        (0..count)
            .map(|_| {
                let position = area.sample(rng);
                let velocity = Point::new(rng.jitter(INITIAL_SPEED), rng.jitter(INITIAL_SPEED));
                let traits = self.sampler.sample(rng);
                let id = self.arena.next_id();
                self.arena.push(Agent::new(id, position, velocity, traits, community))
            })
            .collect()
    }

    /// Infect `count` distinct members of `group`, chosen uniformly.
    ///
    /// Seeded infections skip incubation so the outbreak starts with
    /// infectious agents.  `count` is capped at the group size.
    pub fn infect_among(&mut self, group: &[AgentId], count: u32, day: u32, rng: &mut SimRng) {
        let amount = (count as usize).min(group.len());
        for index in rng.sample_indices(group.len(), amount) {
            let asymptomatic = rng.gen_bool(self.prob_no_symptoms);
            self.arena.get_mut(group[index]).infect(day, asymptomatic, false);
        }
    }

    pub fn build(self) -> AgentArena {
        self.arena
    }
}
