//! Simulation observer trait for progress reporting and data collection.

use ep_core::Tick;
use ep_stats::DailyStats;

/// Callbacks invoked by [`Engine::step_observed`][crate::Engine::step_observed]
/// and [`Engine::run_days`][crate::Engine::run_days].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: daily printer
///
/// ```rust,ignore
/// struct DailyPrinter;
///
/// impl SimObserver for DailyPrinter {
///     fn on_day_end(&mut self, row: &DailyStats) {
///         println!("day {}: {} infected", row.day, row.infected());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of agents infected
    /// during it.
    fn on_tick_end(&mut self, _tick: Tick, _new_infections: usize) {}

    /// Called once per closed day, after its row has been recorded.
    fn on_day_end(&mut self, _row: &DailyStats) {}

    /// Called once after `run_days` completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
