//! The run configuration record handed in by external callers.
//!
//! Every field has a default (the 223-link spiral survey), so a JSON or TOML
//! document only needs to name what differs:
//!
//! ```json
//! {
//!   "path_family": "spiral_in",
//!   "time_horizon": 1000.0,
//!   "collision_clearance": 0.3
//! }
//! ```

use serde::{Deserialize, Serialize};

use bt_chain::{CollisionDetector, LinkLengths};
use bt_core::SimClock;
use bt_path::{PathFamily, PathModel, PathParams};

use crate::{SimError, SimResult};

// ── SearchGrid ────────────────────────────────────────────────────────────────

/// A fixed-resolution candidate grid.  Candidates are generated by index,
/// never by repeated addition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchGrid {
    /// `count` evenly spaced values from `start` to `stop`, both included.
    Linspace { start: f64, stop: f64, count: usize },
    /// `start + k·step` for every value strictly before `stop`.
    Arange { start: f64, stop: f64, step: f64 },
}

impl SearchGrid {
    /// Expand the grid into its candidates, in iteration order.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] for non-finite bounds, a zero count, or a step
    /// that is zero or points away from `stop`.
    pub fn candidates(&self) -> SimResult<Vec<f64>> {
        match *self {
            SearchGrid::Linspace { start, stop, count } => {
                if !start.is_finite() || !stop.is_finite() || count == 0 {
                    return Err(SimError::Config(format!("invalid linspace grid {self:?}")));
                }
                if count == 1 {
                    return Ok(vec![start]);
                }
                let step = (stop - start) / (count - 1) as f64;
                Ok((0..count)
                    .map(|k| if k == count - 1 { stop } else { start + k as f64 * step })
                    .collect())
            }
            SearchGrid::Arange { start, stop, step } => {
                let span = stop - start;
                if !span.is_finite() || !step.is_finite() || step == 0.0 || span * step < 0.0 {
                    return Err(SimError::Config(format!("invalid arange grid {self:?}")));
                }
                let count = (span / step).ceil() as usize;
                Ok((0..count)
                    .map(|k| start + k as f64 * step)
                    .filter(|&v| if step > 0.0 { v < stop } else { v > stop })
                    .collect())
            }
        }
    }
}

// ── SearchMode ────────────────────────────────────────────────────────────────

/// Which parameter the engine sweeps, if any.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchMode {
    /// A single run with the configured parameters.
    #[default]
    None,
    /// Sweep the spiral pitch; the first candidate whose lead link reaches
    /// `path_parameters.boundary_radius` within the horizon wins.
    MinimizePitch,
    /// Sweep the lead speed upward; the first candidate whose peak link
    /// speed stays within `speed_cap` wins.
    MaximizeSpeed { speed_cap: f64 },
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::None               => "none",
            SearchMode::MinimizePitch      => "minimize_pitch",
            SearchMode::MaximizeSpeed { .. } => "maximize_speed",
        }
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Everything one engine invocation needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub num_links: usize,

    /// Lead-first link lengths; must hold exactly `num_links` entries.
    pub link_lengths: Vec<f64>,

    pub path_family: PathFamily,

    pub path_parameters: PathParams,

    /// Last simulated time `T`; ticks cover `[0, T]` inclusive.
    pub time_horizon: f64,

    /// Model time per tick.  Default: 1.
    pub time_step: f64,

    /// Enables the collision stage when set.
    pub collision_clearance: Option<f64>,

    /// Enables the velocity stage.  Forced on by `maximize_speed`.
    pub record_speeds: bool,

    /// Report a configuration snapshot to observers every this many time
    /// units.  `None` disables snapshots.
    pub snapshot_interval: Option<f64>,

    pub search_mode: SearchMode,

    /// Candidate grid; required unless `search_mode` is `none`.
    pub search_grid: Option<SearchGrid>,
}

impl Default for RunConfig {
    fn default() -> Self {
        crate::presets::spiral_survey()
    }
}

impl RunConfig {
    /// Validated link lengths.
    pub fn lengths(&self) -> SimResult<LinkLengths> {
        if self.link_lengths.len() != self.num_links {
            return Err(SimError::LinkCountMismatch {
                expected: self.num_links,
                got:      self.link_lengths.len(),
                what:     "link_lengths",
            });
        }
        Ok(LinkLengths::new(self.link_lengths.clone())?)
    }

    pub fn clock(&self) -> SimResult<SimClock> {
        Ok(SimClock::new(self.time_step, self.time_horizon)?)
    }

    pub fn path_model(&self) -> SimResult<PathModel> {
        Ok(PathModel::new(
            self.path_family,
            &self.path_parameters,
            self.time_horizon,
            self.time_step,
        )?)
    }

    /// `true` when the velocity stage must run.
    #[inline]
    pub fn wants_speeds(&self) -> bool {
        self.record_speeds || matches!(self.search_mode, SearchMode::MaximizeSpeed { .. })
    }

    /// Check every field before any run starts.
    pub fn validate(&self) -> SimResult<()> {
        self.lengths()?;
        self.clock()?;
        self.path_model()?;
        if let Some(clearance) = self.collision_clearance {
            CollisionDetector::new(clearance)?;
        }
        if let Some(interval) = self.snapshot_interval {
            if !interval.is_finite() || interval <= 0.0 {
                return Err(SimError::Config(format!(
                    "snapshot interval must be positive, got {interval}"
                )));
            }
        }

        match &self.search_mode {
            SearchMode::None => return Ok(()),
            SearchMode::MinimizePitch => {
                if !matches!(self.path_family, PathFamily::SpiralIn | PathFamily::SpiralOut) {
                    return Err(SimError::Config(format!(
                        "minimize_pitch needs a spiral path, got {}",
                        self.path_family
                    )));
                }
                if self.path_parameters.boundary_radius.is_none() {
                    return Err(SimError::Config(
                        "minimize_pitch needs path_parameters.boundary_radius".into(),
                    ));
                }
            }
            SearchMode::MaximizeSpeed { speed_cap } => {
                if !speed_cap.is_finite() || *speed_cap <= 0.0 {
                    return Err(SimError::Config(format!(
                        "speed cap must be positive, got {speed_cap}"
                    )));
                }
            }
        }

        let grid = self.search_grid.as_ref().ok_or_else(|| {
            SimError::Config(format!("{} needs a search_grid", self.search_mode.as_str()))
        })?;
        if grid.candidates()?.is_empty() {
            return Err(SimError::Config("search grid has no candidates".into()));
        }
        Ok(())
    }
}
