//! Typed identifiers for agents and community tiles.
//!
//! Both are plain indices: an `AgentId` is a slot in the agent arena, a
//! `CommunityId` a tile of the 3×3 community grid.  Prefer `.index()` over
//! `id.0 as usize`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the arena.  Stable for the lifetime of a run:
    /// dead agents are tombstoned, never compacted away.
    pub struct AgentId(u32) = "agent";
}

typed_id! {
    /// Index of a community tile (row-major over the tile grid).
    pub struct CommunityId(u8) = "community";
}
