//! `ep-zones` — where agents may be, and the interventions that move them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`community`]   | `CommunityTopology` (3×3 tile grid)                       |
//! | [`layout`]      | `WorldLayout` (areas and regions per `SimMode`)           |
//! | [`quarantine`]  | `QuarantinePolicy` (day-close transfers and releases)     |
//! | [`marketplace`] | `MarketplacePolicy` (periodic gatherings)                 |
//! | [`travel`]      | `TravelPolicy` (inter-community moves)                    |
//!
//! Policies are stateless: everything they need to resume lives on the
//! agents (`is_quarantined`, `market_ticks_left`, `home_position`,
//! `community`), so a snapshot fully captures intervention state.
//!
//! Event messages use the `log` facade with a `[day NNN]` prefix.

pub mod community;
pub mod layout;
pub mod marketplace;
pub mod quarantine;
pub mod travel;


pub use community::CommunityTopology;
pub use layout::WorldLayout;
pub use marketplace::MarketplacePolicy;
pub use quarantine::QuarantinePolicy;
pub use travel::TravelPolicy;
