//! Simulation mode and intervention kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How the population is laid out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum SimMode {
    /// One shared population area.
    #[default]
    Simple,
    /// One shared population area with quarantine switched on from the start.
    Quarantine,
    /// A 3×3 grid of community tiles with inter-tile travel.
    Communities,
}

impl SimMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SimMode::Simple      => "simple",
            SimMode::Quarantine  => "quarantine",
            SimMode::Communities => "communities",
        }
    }

    #[inline]
    pub fn has_communities(self) -> bool {
        matches!(self, SimMode::Communities)
    }
}

impl std::fmt::Display for SimMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple"      => Ok(SimMode::Simple),
            "quarantine"  => Ok(SimMode::Quarantine),
            "communities" => Ok(SimMode::Communities),
            other         => Err(ConfigError::UnknownParameter(format!("mode {other}"))),
        }
    }
}

/// An intervention the caller can switch on or off at runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Intervention {
    Quarantine,
    Marketplace,
}

impl Intervention {
    pub fn as_str(self) -> &'static str {
        match self {
            Intervention::Quarantine  => "quarantine",
            Intervention::Marketplace => "marketplace",
        }
    }
}

impl std::fmt::Display for Intervention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
