//! Simulation observer trait for progress reporting and data collection.

use bt_core::{Point2, SimClock, Tick};

use crate::{BoundaryEvent, CollisionEvent, SearchResult};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see borrowed views of the
/// run's own arrays and cannot change them.
///
/// # Example — lead radius printer
///
/// ```rust,ignore
/// struct RadiusPrinter;
///
/// impl SimObserver for RadiusPrinter {
///     fn on_step(&mut self, tick: Tick, time: f64, positions: &[Point2], _: Option<&[f64]>) {
///         if tick.0 % 60 == 0 {
///             println!("t = {time}: lead at radius {:.3}", positions[0].norm());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before tick 0.
    fn on_run_start(&mut self, _clock: &SimClock, _link_count: usize) {}

    /// Called after each step's configuration (and speeds, when the velocity
    /// stage is on) has been recorded, before the stop conditions are
    /// reported.
    fn on_step(
        &mut self,
        _tick:      Tick,
        _time:      f64,
        _positions: &[Point2],
        _speeds:    Option<&[f64]>,
    ) {}

    /// Called every `snapshot_interval` worth of ticks, including tick 0.
    fn on_snapshot(&mut self, _tick: Tick, _time: f64, _positions: &[Point2]) {}

    /// Called when the collision stage halts the run.
    fn on_collision(&mut self, _event: &CollisionEvent) {}

    /// Called when the lead link reaches the boundary radius.
    fn on_boundary(&mut self, _event: &BoundaryEvent) {}

    /// Called once after the last recorded step of a successful run.
    fn on_run_end(&mut self, _final_tick: Tick) {}

    /// Called by [`execute_with_observer`][crate::execute_with_observer] when a
    /// grid search picks a winner, before the winner is re-run.
    fn on_search_complete(&mut self, _result: &SearchResult) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
