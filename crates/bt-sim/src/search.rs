//! Grid parameter search.
//!
//! Both searches walk a fixed candidate grid in order and run one full
//! simulation per candidate:
//!
//! - **Minimize pitch**: the first candidate whose lead link reaches the
//!   boundary radius within the horizon wins.  Grids are usually given in
//!   descending order, so "first" is the smallest pitch the scan reached.
//! - **Maximize lead speed**: candidates are tried in ascending order and the
//!   first one whose peak link speed stays within the cap wins.  This is only
//!   the largest feasible speed if feasibility holds on a prefix of the grid,
//!   which the scan assumes and never checks.
//!
//! With the `parallel` feature every candidate is evaluated up front on
//! Rayon's pool and the same in-order scan runs over the collected outcomes.

use tracing::{debug, info, warn};

use crate::{NoopObserver, RunConfig, SearchGrid, SearchResult, SimBuilder, SimError, SimResult};

/// What makes a candidate acceptable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Objective {
    /// The lead link must reach `path_parameters.boundary_radius`.
    ReachBoundary,
    /// Peak link speed over the run must stay `<= cap`.
    SpeedCap(f64),
}

impl Objective {
    fn mode(self) -> &'static str {
        match self {
            Objective::ReachBoundary => "minimize_pitch",
            Objective::SpeedCap(_)   => "maximize_speed",
        }
    }
}

/// Summary of one candidate run.  Only scalars are kept so a parallel sweep
/// does not hold every candidate's time series at once.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Outcome {
    value:         f64,
    feasible:      bool,
    boundary_time: Option<f64>,
    peak_speed:    Option<f64>,
}

/// Run `config` with the swept parameter set to `value`.
fn evaluate(config: &RunConfig, objective: Objective, value: f64) -> SimResult<Outcome> {
    let mut candidate = config.clone();
    match objective {
        Objective::ReachBoundary => candidate.path_parameters.pitch = value,
        Objective::SpeedCap(_) => {
            candidate.path_parameters.lead_speed = value;
            candidate.record_speeds = true;
        }
    }
    candidate.snapshot_interval = None;

    let result = SimBuilder::from_config(&candidate)?.build()?.run(&mut NoopObserver)?;

    let boundary_time = result.boundary.map(|b| b.time);
    let peak_speed = result.peak_speed();
    let feasible = match objective {
        Objective::ReachBoundary => boundary_time.is_some(),
        Objective::SpeedCap(cap) => peak_speed.is_some_and(|peak| peak <= cap),
    };
    debug!(value, feasible, ?boundary_time, ?peak_speed, "Evaluated search candidate");

    Ok(Outcome { value, feasible, boundary_time, peak_speed })
}

/// Walk outcomes in grid order and stop at the first feasible one.  Returns
/// the winner and how many outcomes were consumed.
fn scan<I>(outcomes: I) -> SimResult<(Option<Outcome>, usize)>
where
    I: IntoIterator<Item = SimResult<Outcome>>,
{
    let mut evaluated = 0;
    for outcome in outcomes {
        let outcome = outcome?;
        evaluated += 1;
        if outcome.feasible {
            return Ok((Some(outcome), evaluated));
        }
    }
    Ok((None, evaluated))
}

/// Sweep `candidates` against `objective` using `config` as the template run.
///
/// # Errors
///
/// - [`SimError::NoSolutionFound`] if no candidate qualifies.
/// - Any configuration or geometry error from a candidate run the scan
///   reached.
pub fn search(config: &RunConfig, objective: Objective, candidates: &[f64]) -> SimResult<SearchResult> {
    if candidates.is_empty() {
        return Err(SimError::Config("search grid has no candidates".into()));
    }
    if objective == Objective::ReachBoundary && config.path_parameters.boundary_radius.is_none() {
        return Err(SimError::Config("pitch search needs a boundary radius".into()));
    }

    info!(mode = objective.mode(), candidates = candidates.len(), "Starting parameter search");

    #[cfg(not(feature = "parallel"))]
    let (winner, evaluated) =
        scan(candidates.iter().map(|&value| evaluate(config, objective, value)))?;

    #[cfg(feature = "parallel")]
    let (winner, evaluated) = {
        use rayon::prelude::*;

        let outcomes: Vec<SimResult<Outcome>> = candidates
            .par_iter()
            .map(|&value| evaluate(config, objective, value))
            .collect();
        scan(outcomes)?
    };

    let Some(winner) = winner else {
        warn!(mode = objective.mode(), evaluated, "Parameter search found no solution");
        return Err(SimError::NoSolutionFound {
            mode:       objective.mode(),
            candidates: candidates.len(),
        });
    };

    info!(
        mode = objective.mode(),
        value = winner.value,
        evaluated,
        "Parameter search finished"
    );
    Ok(SearchResult {
        parameter_value: winner.value,
        boundary_time:   winner.boundary_time,
        peak_speed:      winner.peak_speed,
        evaluated,
    })
}

/// Smallest pitch (in grid order) at which the lead link reaches the
/// boundary radius within the horizon.
pub fn minimize_pitch(config: &RunConfig, grid: &SearchGrid) -> SimResult<SearchResult> {
    search(config, Objective::ReachBoundary, &grid.candidates()?)
}

/// First lead speed (in grid order) whose peak link speed stays within
/// `speed_cap`.
pub fn maximize_lead_speed(
    config:    &RunConfig,
    grid:      &SearchGrid,
    speed_cap: f64,
) -> SimResult<SearchResult> {
    search(config, Objective::SpeedCap(speed_cap), &grid.candidates()?)
}
