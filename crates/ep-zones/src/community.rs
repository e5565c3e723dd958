//! The 3×3 community tile grid.
//!
//! ```text
//!   y
//!   ▲  ┌───┐ ┌───┐ ┌───┐
//!   │  │ 2 │ │ 5 │ │ 8 │
//!   │  └───┘ └───┘ └───┘
//!   │  ┌───┐ ┌───┐ ┌───┐
//!   │  │ 1 │ │ 4 │ │ 7 │      tile = col * 3 + row
//!   │  └───┘ └───┘ └───┘      0 = quarantine, 4 = marketplace
//!   │  ┌───┐ ┌───┐ ┌───┐
//!   │  │ 0 │ │ 3 │ │ 6 │
//!   │  └───┘ └───┘ └───┘
//!   └──────────────────────► x
//! ```
//!
//! Tiles have side 2 with 0.2 gaps; the lower-left tile starts at (-3, -3).

use ep_core::{Bounds, CommunityId};

pub const GRID_SIDE: usize = 3;
pub const TILE_SIDE: f64 = 2.0;
pub const TILE_GAP: f64 = 0.2;
const ORIGIN: f64 = -3.0;
/// Spawn and relocation margin inside a tile.
pub const TILE_INSET: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct CommunityTopology {
    tiles: Vec<Bounds>,
}

impl CommunityTopology {
    pub const QUARANTINE_TILE: CommunityId = CommunityId(0);
    pub const MARKETPLACE_TILE: CommunityId = CommunityId(4);

    pub fn new() -> Self {
        let stride = TILE_SIDE + TILE_GAP;
        let tiles = (0..GRID_SIDE * GRID_SIDE)
            .map(|id| {
                let (col, row) = ((id / GRID_SIDE) as f64, (id % GRID_SIDE) as f64);
                let min_x = ORIGIN + col * stride;
                let min_y = ORIGIN + row * stride;
                Bounds::new(min_x, min_x + TILE_SIDE, min_y, min_y + TILE_SIDE)
            })
            .collect();
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// # Panics
    /// Panics if `id` is not a tile of the grid.
    #[inline]
    pub fn tile(&self, id: CommunityId) -> Bounds {
        self.tiles[id.index()]
    }

    /// The tile minus its inset margin; where agents spawn and land.
    pub fn interior(&self, id: CommunityId) -> Bounds {
        self.tile(id).inset(TILE_INSET)
    }

    /// Tiles that hold a resident population, ascending.  Every tile except
    /// the quarantine tile.
    pub fn populated(&self) -> Vec<CommunityId> {
        (0..self.tiles.len() as u8)
            .map(CommunityId)
            .filter(|&id| id != Self::QUARANTINE_TILE)
            .collect()
    }

    /// Rectangle covering every tile.
    pub fn extent(&self) -> Bounds {
        self.tiles.iter().skip(1).fold(self.tiles[0], |acc, t| acc.union(t))
    }
}

impl Default for CommunityTopology {
    fn default() -> Self {
        Self::new()
    }
}
