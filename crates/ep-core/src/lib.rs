//! `ep-core` — foundational types for the `ep_sim` epidemic engine.
//!
//! This crate is a dependency of every other `ep-*` crate.  It intentionally
//! has no `ep-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `CommunityId`                                   |
//! | [`geo`]    | `Point`, `Bounds`                                          |
//! | [`time`]   | `Tick`, `SimClock`                                         |
//! | [`rng`]    | `SimRng` (the single random source of a run)               |
//! | [`rates`]  | `PerContact`, `PerDay`, `PerTick` probability units        |
//! | [`mode`]   | `SimMode`, `Intervention`                                  |
//! | [`params`] | `SimulationParameters`, `ParamKey`, `ParamValue`, `TickRates` |
//! | [`error`]  | `ConfigError`, `ConfigResult`                              |

pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod params;
pub mod rates;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use geo::{Bounds, Point};
pub use ids::{AgentId, CommunityId};
pub use mode::{Intervention, SimMode};
pub use params::{ParamKey, ParamValue, SimulationParameters, TickRates};
pub use rates::{PerContact, PerDay, PerTick};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
