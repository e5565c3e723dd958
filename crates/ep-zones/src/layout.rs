//! Areas and regions of the simulated world, per mode.
//!
//! | Mode                 | Residents                  | Quarantine region             | Marketplace centre          |
//! |----------------------|----------------------------|-------------------------------|-----------------------------|
//! | Simple / Quarantine  | `[-1, 1]²`                 | `[1.3, 1.8] × [-1, -0.5]`     | `(marketplace_x, marketplace_y)` |
//! | Communities          | tiles 1..=8 (see [`community`](crate::community)) | tile 0 interior | centre of tile 4  |
//!
//! The quarantine region never overlaps a resident area.

use ep_agent::Agent;
use ep_core::{Bounds, CommunityId, Point, SimMode, SimulationParameters};

use crate::CommunityTopology;

pub const POPULATION_AREA: Bounds = Bounds::new(-1.0, 1.0, -1.0, 1.0);
pub const QUARANTINE_REGION: Bounds = Bounds::new(1.3, 1.8, -1.0, -0.5);
/// Spawn and relocation margin inside the shared population area.
pub const POPULATION_INSET: f64 = 0.15;
/// Half side of the square marketplace region.
pub const MARKETPLACE_HALF_SIDE: f64 = 0.15;

#[derive(Clone, Debug, PartialEq)]
pub struct WorldLayout {
    mode:               SimMode,
    quarantine_region:  Bounds,
    marketplace_center: Point,
    communities:        Option<CommunityTopology>,
}

impl WorldLayout {
    pub fn new(mode: SimMode, params: &SimulationParameters) -> Self {
        if mode.has_communities() {
            let topology = CommunityTopology::new();
            Self {
                mode,
                quarantine_region:  topology.interior(CommunityTopology::QUARANTINE_TILE),
                marketplace_center: topology.tile(CommunityTopology::MARKETPLACE_TILE).center(),
                communities:        Some(topology),
            }
        } else {
            Self {
                mode,
                quarantine_region:  QUARANTINE_REGION,
                marketplace_center: Point::new(params.marketplace_x, params.marketplace_y),
                communities:        None,
            }
        }
    }

    #[inline]
    pub fn mode(&self) -> SimMode {
        self.mode
    }

    pub fn communities(&self) -> Option<&CommunityTopology> {
        self.communities.as_ref()
    }

    pub fn quarantine_region(&self) -> Bounds {
        self.quarantine_region
    }

    pub fn marketplace_center(&self) -> Point {
        self.marketplace_center
    }

    pub fn marketplace_region(&self) -> Bounds {
        Bounds::around(self.marketplace_center, MARKETPLACE_HALF_SIDE)
    }

    /// Where residents of `community` spawn and where a released agent is
    /// relocated.  `None` means the shared population area.
    pub fn home_area(&self, community: Option<CommunityId>) -> Bounds {
        match (&self.communities, community) {
            (Some(topology), Some(id)) => topology.interior(id),
            _ => POPULATION_AREA.inset(POPULATION_INSET),
        }
    }

    /// The rectangle an agent's movement is confined to this tick.
    pub fn movement_bounds(&self, agent: &Agent) -> Bounds {
        if agent.is_quarantined {
            self.quarantine_region
        } else if agent.is_visiting_market() {
            self.marketplace_region()
        } else {
            match (&self.communities, agent.community) {
                (Some(topology), Some(id)) => topology.tile(id),
                _ => POPULATION_AREA,
            }
        }
    }

    /// Rectangle covering every place an agent can be.  Used as the spatial
    /// index extent.
    pub fn world_bounds(&self) -> Bounds {
        match &self.communities {
            Some(topology) => topology.extent(),
            None => POPULATION_AREA.union(&self.quarantine_region).union(&self.marketplace_region()),
        }
    }
}
