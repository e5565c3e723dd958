//! `ep-sim` — tick loop orchestrator for the `ep_sim` epidemic engine.
//!
//! # Tick pipeline
//!
//! ```text
//! step(rng):
//!   ① Move        : (social distancing only) rebuild the index first, then
//!                   integrate forces and velocities for every live agent.
//!   ② Index       : rebuild the spatial grid from post-move positions.
//!   ③ Infect      : infectious set captured up front; each infectious agent
//!                   rolls once against every susceptible neighbour in range.
//!   ④ Bookkeeping : (day close) days_in_state++, Exposed → Infected,
//!                   Infected → Dead | Removed.
//!   ⑤ Intervene   : quarantine transfers at day close; marketplace visit
//!                   timers and openings; community travel.
//!   ⑥ Record      : (day close) append a DailyStats row; advance the day.
//! ```
//!
//! Everything random draws from the single [`SimRng`](ep_core::SimRng) the
//! caller passes in, in ascending `AgentId` order.
//!
//! # Quick-start
//!
//! ```rust
//! use ep_core::{SimMode, SimRng, SimulationParameters};
//! use ep_sim::{Engine, NoopObserver};
//!
//! let mut rng = SimRng::new(42);
//! let mut engine = Engine::initialize(SimulationParameters::default(), SimMode::Simple, &mut rng)?;
//! engine.run_days(5, &mut rng, &mut NoopObserver);
//! assert_eq!(engine.history().len(), 6);
//! # Ok::<(), ep_sim::SimError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod infection;
pub mod movement;
pub mod observer;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::Snapshot;
