//! Flatten a finished run into rows.

use bt_core::{Point2, Tick};
use bt_sim::{SearchResult, SimulationResult, TimeSeries};

use crate::{LeadPointRow, LinkSampleRow, OutputError, OutputResult, RunSummaryRow};

/// Rows for one step, lead link first.
pub fn step_rows(time: f64, positions: &[Point2], speeds: Option<&[f64]>) -> Vec<LinkSampleRow> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| LinkSampleRow {
            time,
            link_index: i as u32,
            x_position: p.x,
            y_position: p.y,
            speed:      speeds.and_then(|s| s.get(i).copied()),
        })
        .collect()
}

/// Every link at every step, step-major.
pub fn sample_rows(series: &TimeSeries) -> Vec<LinkSampleRow> {
    let mut rows = Vec::with_capacity(series.len() * series.link_count());
    for (tick, time, frame) in series.frames() {
        rows.extend(step_rows(time, frame, series.frame_speeds(tick)));
    }
    rows
}

/// Every link at every `interval` time units, starting at `t = 0`.
///
/// The stride is rounded to whole steps of the series and is at least one
/// step.
///
/// # Errors
///
/// [`OutputError::InvalidInterval`] for a non-positive or non-finite
/// interval.
pub fn snapshot_rows(series: &TimeSeries, interval: f64) -> OutputResult<Vec<LinkSampleRow>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(OutputError::InvalidInterval(interval));
    }
    let stride = match series.times() {
        [t0, t1, ..] => ((interval / (t1 - t0)).round() as usize).max(1),
        _ => 1,
    };

    let mut rows = Vec::new();
    for (tick, time, frame) in series.frames().step_by(stride) {
        rows.extend(step_rows(time, frame, series.frame_speeds(tick)));
    }
    Ok(rows)
}

/// The lead link's path over the run.
pub fn lead_rows(series: &TimeSeries) -> Vec<LeadPointRow> {
    series
        .lead_trajectory()
        .enumerate()
        .filter_map(|(k, p)| {
            let tick = Tick(k as u64);
            Some(LeadPointRow {
                time:   series.time(tick)?,
                x:      p.x,
                y:      p.y,
                radius: series.lead_radius(tick)?,
            })
        })
        .collect()
}

/// Scalar outcome row for `result`, tagged with the search winner if any.
pub fn summary_row(result: &SimulationResult, search: Option<&SearchResult>) -> RunSummaryRow {
    let series = &result.series;
    RunSummaryRow {
        steps:            series.len() as u64,
        final_time:       series.times().last().copied().unwrap_or(0.0),
        collision_time:   result.collision.map(|c| c.time),
        collision_front:  result.collision.map(|c| c.front.0),
        collision_rear:   result.collision.map(|c| c.rear.0),
        boundary_time:    result.boundary.map(|b| b.time),
        peak_speed:       result.peak_speed(),
        search_parameter: search.map(|s| s.parameter_value),
    }
}
