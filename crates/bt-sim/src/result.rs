//! Owned per-run output: the time series and the events that ended a run.

use bt_chain::ChainConfiguration;
use bt_core::{LinkId, Point2, Tick};

use crate::{SimError, SimResult};

// ── TimeSeries ────────────────────────────────────────────────────────────────

/// Every sample of one run, laid out step-major in flat arrays.
///
/// Sample `k` is tick `k`: a run always starts at tick 0 and never skips.
/// The positions of step `k` occupy `positions[k·N .. (k+1)·N]`, and the
/// speeds (when the velocity stage ran) use the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    pub(crate) link_count: usize,
    pub(crate) times:      Vec<f64>,
    pub(crate) lead_radii: Vec<f64>,
    pub(crate) positions:  Vec<Point2>,
    pub(crate) speeds:     Option<Vec<f64>>,
}

/// Upper bound on elements reserved up front per array; longer runs grow.
const PREALLOC_LIMIT: usize = 1 << 20;

impl TimeSeries {
    /// Empty series sized for `steps` samples of `link_count` links.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] when `steps × link_count` overflows `usize`.
    pub(crate) fn with_capacity(link_count: usize, steps: usize, with_speeds: bool) -> SimResult<Self> {
        let cells = steps.checked_mul(link_count).ok_or_else(|| {
            SimError::Config(format!("{steps} steps of {link_count} links overflow the series size"))
        })?;
        let reserve = cells.min(PREALLOC_LIMIT);
        Ok(Self {
            link_count,
            times:      Vec::with_capacity(steps.min(PREALLOC_LIMIT)),
            lead_radii: Vec::with_capacity(steps.min(PREALLOC_LIMIT)),
            positions:  Vec::with_capacity(reserve),
            speeds:     with_speeds.then(|| Vec::with_capacity(reserve)),
        })
    }

    /// Number of recorded time steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    #[inline]
    pub fn has_speeds(&self) -> bool {
        self.speeds.is_some()
    }

    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The last recorded tick, or `None` for an empty series.
    pub fn last_tick(&self) -> Option<Tick> {
        self.len().checked_sub(1).map(|k| Tick(k as u64))
    }

    pub fn time(&self, tick: Tick) -> Option<f64> {
        self.times.get(tick.0 as usize).copied()
    }

    /// Polar radius of the lead path at `tick`.
    pub fn lead_radius(&self, tick: Tick) -> Option<f64> {
        self.lead_radii.get(tick.0 as usize).copied()
    }

    /// All link positions at `tick`.
    pub fn frame(&self, tick: Tick) -> Option<&[Point2]> {
        let range = self.range(tick)?;
        Some(&self.positions[range])
    }

    /// All link speeds at `tick`; `None` if out of range or speeds were not
    /// recorded.
    pub fn frame_speeds(&self, tick: Tick) -> Option<&[f64]> {
        let range = self.range(tick)?;
        self.speeds.as_ref().map(|s| &s[range])
    }

    /// Owned configuration at `tick`.
    pub fn configuration(&self, tick: Tick) -> Option<ChainConfiguration> {
        Some(ChainConfiguration {
            time:      self.time(tick)?,
            positions: self.frame(tick)?.to_vec(),
        })
    }

    pub fn position(&self, tick: Tick, link: LinkId) -> Option<Point2> {
        self.frame(tick)?.get(link.index()).copied()
    }

    /// Backward-difference speed of `link` at `tick` (0 at tick 0).
    pub fn speed(&self, tick: Tick, link: LinkId) -> Option<f64> {
        self.frame_speeds(tick)?.get(link.index()).copied()
    }

    /// The lead link's position at every recorded step.
    pub fn lead_trajectory(&self) -> impl Iterator<Item = Point2> + '_ {
        self.positions.iter().step_by(self.link_count.max(1)).copied()
    }

    /// `(tick, time, positions)` for every recorded step.
    pub fn frames(&self) -> impl Iterator<Item = (Tick, f64, &[Point2])> + '_ {
        self.times
            .iter()
            .zip(self.positions.chunks_exact(self.link_count.max(1)))
            .enumerate()
            .map(|(k, (&t, frame))| (Tick(k as u64), t, frame))
    }

    /// Largest speed over every link and step, if speeds were recorded.
    pub fn peak_speed(&self) -> Option<f64> {
        self.speeds
            .as_ref()
            .map(|s| s.iter().copied().fold(0.0, f64::max))
    }

    /// Largest speed at each step, if speeds were recorded.
    pub fn peak_speed_per_step(&self) -> Option<Vec<f64>> {
        let speeds = self.speeds.as_ref()?;
        Some(
            speeds
                .chunks_exact(self.link_count.max(1))
                .map(|frame| frame.iter().copied().fold(0.0, f64::max))
                .collect(),
        )
    }

    fn range(&self, tick: Tick) -> Option<std::ops::Range<usize>> {
        let k = tick.0 as usize;
        (k < self.len()).then(|| k * self.link_count..(k + 1) * self.link_count)
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Two adjacent links closer than the clearance.  The run halts at `tick`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    pub tick:       Tick,
    pub time:       f64,
    pub front:      LinkId,
    pub rear:       LinkId,
    pub separation: f64,
}

/// The lead link reached the boundary radius.  The run halts at `tick`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryEvent {
    pub tick:   Tick,
    pub time:   f64,
    pub radius: f64,
}

// ── SimulationResult ──────────────────────────────────────────────────────────

/// The outcome of one completed run.
///
/// A run that fails (degenerate geometry, undefined direction) returns an
/// error instead; an empty or truncated series here always means a stop
/// condition fired.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub series:    TimeSeries,
    pub collision: Option<CollisionEvent>,
    pub boundary:  Option<BoundaryEvent>,
}

impl SimulationResult {
    /// `true` if a collision or the boundary stopped the run before the
    /// horizon.
    #[inline]
    pub fn halted_early(&self) -> bool {
        self.collision.is_some() || self.boundary.is_some()
    }

    #[inline]
    pub fn peak_speed(&self) -> Option<f64> {
        self.series.peak_speed()
    }
}

// ── SearchResult ──────────────────────────────────────────────────────────────

/// The winning candidate of a parameter search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The pitch or lead speed that was selected.
    pub parameter_value: f64,
    /// First time the lead link reached the boundary (pitch search).
    pub boundary_time:   Option<f64>,
    /// Peak link speed of the selected run (speed search).
    pub peak_speed:      Option<f64>,
    /// Runs performed before the scan stopped.
    pub evaluated:       usize,
}

/// What [`execute`][crate::execute] returns: the (winning) run plus the
/// search outcome in search mode.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOutput {
    pub result: SimulationResult,
    pub search: Option<SearchResult>,
}
