//! `ep-agent` — agent records and the dense agent arena for `ep_sim`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`state`]   | `EpiState` (closed epidemiological state enum)             |
//! | [`agent`]   | `Agent` (flat per-agent record), `AgentTraits`             |
//! | [`arena`]   | `AgentArena` (dense, tombstoned), `StateCounts`            |
//! | [`traits`]  | `TraitSampler` (susceptibility / recovery draws)           |
//! | [`builder`] | `PopulationBuilder` (spawning and initial infections)      |
//!
//! Agents are stored array-of-structs: the engine touches most fields of an
//! agent together (position, velocity, state) and the population is small
//! enough that the record layout is not the bottleneck.

pub mod agent;
pub mod arena;
pub mod builder;
pub mod state;
pub mod traits;


pub use agent::{Agent, AgentTraits};
pub use arena::{AgentArena, StateCounts};
pub use builder::PopulationBuilder;
pub use state::EpiState;
pub use traits::TraitSampler;
