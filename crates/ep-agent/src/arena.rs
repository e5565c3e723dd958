//! Dense agent storage.
//!
//! `AgentArena` is a `Vec<Agent>` where `AgentId` is the index.  Dead agents
//! stay in place as tombstones so ids handed out earlier in a tick (the
//! infectious set, spatial-index entries) never dangle and never alias a
//! different agent.

use serde::{Deserialize, Serialize};

use ep_core::{AgentId, Point};

use crate::{Agent, EpiState};

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Agents per state, plus the quarantined subset of the symptomatic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub susceptible:  u32,
    pub exposed:      u32,
    pub symptomatic:  u32,
    pub asymptomatic: u32,
    pub removed:      u32,
    pub dead:         u32,
    pub quarantined:  u32,
}

impl StateCounts {
    pub fn add(&mut self, agent: &Agent) {
        match agent.state {
            EpiState::Susceptible          => self.susceptible += 1,
            EpiState::Exposed              => self.exposed += 1,
            EpiState::InfectedSymptomatic  => self.symptomatic += 1,
            EpiState::InfectedAsymptomatic => self.asymptomatic += 1,
            EpiState::Removed              => self.removed += 1,
            EpiState::Dead                 => self.dead += 1,
        }
        if agent.is_quarantined {
            self.quarantined += 1;
        }
    }

    pub fn get(&self, state: EpiState) -> u32 {
        match state {
            EpiState::Susceptible          => self.susceptible,
            EpiState::Exposed              => self.exposed,
            EpiState::InfectedSymptomatic  => self.symptomatic,
            EpiState::InfectedAsymptomatic => self.asymptomatic,
            EpiState::Removed              => self.removed,
            EpiState::Dead                 => self.dead,
        }
    }

    /// Currently infectious (symptomatic + asymptomatic).
    #[inline]
    pub fn infectious(&self) -> u32 {
        self.symptomatic + self.asymptomatic
    }

    /// Every agent ever created, dead included.
    pub fn total(&self) -> u32 {
        self.alive() + self.dead
    }

    pub fn alive(&self) -> u32 {
        self.susceptible + self.exposed + self.infectious() + self.removed
    }
}

impl<'a> FromIterator<&'a Agent> for StateCounts {
    fn from_iter<I: IntoIterator<Item = &'a Agent>>(iter: I) -> Self {
        let mut counts = StateCounts::default();
        for agent in iter {
            counts.add(agent);
        }
        counts
    }
}

// ── AgentArena ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentArena {
    agents: Vec<Agent>,
}

impl AgentArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an existing agent list.  Returns `None` if any agent's id does
    /// not match its position.
    pub fn from_agents(agents: Vec<Agent>) -> Option<Self> {
        let consistent = agents.iter().enumerate().all(|(i, a)| a.id.index() == i);
        consistent.then_some(Self { agents })
    }

    /// The id the next pushed agent will receive.
    pub fn next_id(&self) -> AgentId {
        AgentId(self.agents.len() as u32)
    }

    /// Append `agent`, which must carry [`next_id`](Self::next_id).
    pub fn push(&mut self, agent: Agent) -> AgentId {
        let id = self.next_id();
        assert_eq!(agent.id, id, "agent pushed out of order");
        self.agents.push(agent);
        id
    }

    /// Every agent ever created, tombstones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn get(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Non-dead agents in ascending id order.
    pub fn live(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(|a| a.is_alive())
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.iter_mut().filter(|a| a.is_alive())
    }

    /// Ids of agents currently able to transmit, ascending.
    pub fn infectious_ids(&self) -> Vec<AgentId> {
        self.agents.iter().filter(|a| a.is_infectious()).map(|a| a.id).collect()
    }

    /// `(id, position)` of every live agent, for index rebuilds.
    pub fn live_positions(&self) -> impl Iterator<Item = (AgentId, Point)> + '_ {
        self.live().map(|a| (a.id, a.position))
    }

    /// Position of every agent by index, tombstones included.
    pub fn positions(&self) -> Vec<Point> {
        self.agents.iter().map(|a| a.position).collect()
    }

    pub fn counts(&self) -> StateCounts {
        self.agents.iter().collect()
    }
}
