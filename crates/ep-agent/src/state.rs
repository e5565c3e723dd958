//! The epidemiological state of one agent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of disease states.  Exactly one applies to each agent.
///
/// ```text
/// Susceptible ─┬─► Exposed ─┬─► InfectedSymptomatic ──┬─► Removed
///              │            └─► InfectedAsymptomatic ─┤
///              └──────────────────────────────────────┘   └─► Dead
/// ```
///
/// `Removed` and `Dead` are terminal.  `Exposed` is only entered when
/// `incubation_days > 0`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum EpiState {
    #[default]
    Susceptible,
    /// Infected but not yet infectious.
    Exposed,
    InfectedSymptomatic,
    InfectedAsymptomatic,
    /// Recovered and immune.
    Removed,
    /// Tombstone.  Never revived.
    Dead,
}

impl EpiState {
    pub const ALL: [EpiState; 6] = [
        EpiState::Susceptible,
        EpiState::Exposed,
        EpiState::InfectedSymptomatic,
        EpiState::InfectedAsymptomatic,
        EpiState::Removed,
        EpiState::Dead,
    ];

    /// The infectious state an infection lands in after the symptom roll.
    #[inline]
    pub fn infected(asymptomatic: bool) -> EpiState {
        if asymptomatic {
            EpiState::InfectedAsymptomatic
        } else {
            EpiState::InfectedSymptomatic
        }
    }

    /// Can transmit to susceptible neighbours.
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(self, EpiState::InfectedSymptomatic | EpiState::InfectedAsymptomatic)
    }

    /// Carries the disease, infectious or not.
    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(
            self,
            EpiState::Exposed | EpiState::InfectedSymptomatic | EpiState::InfectedAsymptomatic
        )
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self != EpiState::Dead
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, EpiState::Removed | EpiState::Dead)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EpiState::Susceptible          => "susceptible",
            EpiState::Exposed              => "exposed",
            EpiState::InfectedSymptomatic  => "infected_symptomatic",
            EpiState::InfectedAsymptomatic => "infected_asymptomatic",
            EpiState::Removed              => "removed",
            EpiState::Dead                 => "dead",
        }
    }
}

impl fmt::Display for EpiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
