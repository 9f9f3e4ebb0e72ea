//! Single entry point for one configured invocation.

use tracing::info;

use crate::search::{Objective, search};
use crate::{EngineOutput, NoopObserver, RunConfig, SearchMode, SimBuilder, SimError, SimObserver, SimResult};

/// Validate `config` and run it, with no observer.
///
/// See [`execute_with_observer`].
pub fn execute(config: &RunConfig) -> SimResult<EngineOutput> {
    execute_with_observer(config, &mut NoopObserver)
}

/// Validate `config` and run it.
///
/// With `search_mode = none` this is a single run.  In a search mode the grid
/// is scanned first, then the winning candidate is run once more with
/// `observer` attached so its full time series is returned.  Candidate runs
/// are never observed; the observer hears about the search only through
/// [`SimObserver::on_search_complete`].
pub fn execute_with_observer<O: SimObserver>(
    config:   &RunConfig,
    observer: &mut O,
) -> SimResult<EngineOutput> {
    config.validate()?;

    let objective = match config.search_mode {
        SearchMode::None => {
            let result = SimBuilder::from_config(config)?.build()?.run(observer)?;
            return Ok(EngineOutput { result, search: None });
        }
        SearchMode::MinimizePitch => Objective::ReachBoundary,
        SearchMode::MaximizeSpeed { speed_cap } => Objective::SpeedCap(speed_cap),
    };

    let candidates = config
        .search_grid
        .as_ref()
        .ok_or_else(|| SimError::Config(format!("{} needs a search_grid", config.search_mode.as_str())))?
        .candidates()?;
    let found = search(config, objective, &candidates)?;

    let mut winner = config.clone();
    match objective {
        Objective::ReachBoundary => winner.path_parameters.pitch = found.parameter_value,
        Objective::SpeedCap(_)   => winner.path_parameters.lead_speed = found.parameter_value,
    }
    info!(value = found.parameter_value, "Re-running winning candidate");
    observer.on_search_complete(&found);
    let result = SimBuilder::from_config(&winner)?.build()?.run(observer)?;

    Ok(EngineOutput { result, search: Some(found) })
}
