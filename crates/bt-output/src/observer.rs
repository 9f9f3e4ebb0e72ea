//! `TableObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use bt_core::{Point2, SimClock, Tick};
use bt_sim::{BoundaryEvent, CollisionEvent, SearchResult, SimObserver};

use crate::table::step_rows;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RunSummaryRow};

/// Which steps become rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capture {
    /// Every step, with speeds when the run records them.
    EveryStep,
    /// Only the steps reported through `on_snapshot` (no speeds).
    Snapshots,
}

/// A [`SimObserver`] that streams rows into any [`OutputWriter`] and writes
/// a [`RunSummaryRow`] when the run ends.
///
/// The summary's `search_parameter` is filled in when the observer is handed
/// to [`bt_sim::execute_with_observer`] with a search mode, and stays set for
/// later runs observed by the same instance.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TableObserver<W: OutputWriter> {
    writer:     W,
    capture:    Capture,
    summary:    RunSummaryRow,
    search:     Option<f64>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TableObserver<W> {
    pub fn new(writer: W, capture: Capture) -> Self {
        Self {
            writer,
            capture,
            summary:    RunSummaryRow::default(),
            search:     None,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TableObserver<W> {
    fn on_run_start(&mut self, _clock: &SimClock, _link_count: usize) {
        self.summary = RunSummaryRow::default();
    }

    fn on_step(&mut self, _tick: Tick, time: f64, positions: &[Point2], speeds: Option<&[f64]>) {
        self.summary.steps += 1;
        self.summary.final_time = time;
        if let Some(s) = speeds {
            let peak = s.iter().copied().fold(self.summary.peak_speed.unwrap_or(0.0), f64::max);
            self.summary.peak_speed = Some(peak);
        }

        if self.capture == Capture::EveryStep {
            let result = self.writer.write_samples(&step_rows(time, positions, speeds));
            self.store_err(result);
        }
    }

    fn on_snapshot(&mut self, _tick: Tick, time: f64, positions: &[Point2]) {
        if self.capture == Capture::Snapshots {
            let result = self.writer.write_samples(&step_rows(time, positions, None));
            self.store_err(result);
        }
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        self.summary.collision_time = Some(event.time);
        self.summary.collision_front = Some(event.front.0);
        self.summary.collision_rear = Some(event.rear.0);
    }

    fn on_boundary(&mut self, event: &BoundaryEvent) {
        self.summary.boundary_time = Some(event.time);
    }

    fn on_search_complete(&mut self, result: &SearchResult) {
        self.search = Some(result.parameter_value);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        self.summary.search_parameter = self.search;
        let summary = self.summary;
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
