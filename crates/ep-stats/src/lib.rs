//! `ep-stats` — daily aggregates of a run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`recorder`] | `StatisticsRecorder`, `DailyStats`, `DayTally`, `Peaks`, `Stats` |
//!
//! The recorder only reads the arena; it never mutates simulation state.

pub mod recorder;

#[cfg(test)]
mod tests;

pub use recorder::{DailyStats, DayTally, Peaks, Stats, StatisticsRecorder};
