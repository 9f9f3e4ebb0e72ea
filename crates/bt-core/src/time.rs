//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to model time is held in `SimClock`:
//!
//!   time = tick * time_step
//!
//! Using an integer tick as the canonical index means every run visits the
//! same sample instants regardless of how the horizon was written down, and
//! times are computed by multiplication rather than accumulated addition, so
//! there is no drift over a long horizon.
//!
//! The default step is 1 time unit.  A smaller step is only a configuration
//! change; the rest of the engine is agnostic.

use std::fmt;

use crate::{BtError, BtResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The preceding tick, or `None` at tick 0.
    #[inline]
    pub fn prev(self) -> Option<Tick> {
        self.0.checked_sub(1).map(Tick)
    }

    /// `true` when `self` falls on a multiple of `interval` (never for 0).
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Largest `final_tick` a clock accepts.
pub const MAX_TICKS: u64 = 1 << 24;

/// Converts between tick counts and model time over an inclusive horizon.
///
/// The clock covers ticks `0..=final_tick`; `final_tick` is the horizon
/// divided by the step, rounded to the nearest integer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Model time per tick.  Default: 1.
    pub time_step: f64,
    /// Last tick of the run (inclusive).
    pub final_tick: Tick,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock stepping `time_step` over `[0, horizon]`.
    pub fn new(time_step: f64, horizon: f64) -> BtResult<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(BtError::Config(format!(
                "time step must be positive and finite, got {time_step}"
            )));
        }
        if !horizon.is_finite() || horizon < 0.0 {
            return Err(BtError::Config(format!(
                "time horizon must be non-negative and finite, got {horizon}"
            )));
        }
        let ticks = (horizon / time_step).round();
        if !ticks.is_finite() || ticks > MAX_TICKS as f64 {
            return Err(BtError::Config(format!(
                "horizon {horizon} at step {time_step} needs {ticks} ticks, limit is {MAX_TICKS}"
            )));
        }
        Ok(Self {
            time_step,
            final_tick: Tick(ticks as u64),
            current_tick: Tick::ZERO,
        })
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` once every tick in `0..=final_tick` has been visited.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick > self.final_tick
    }

    /// Model time at `tick`.
    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.time_step
    }

    /// Model time at the current tick.
    #[inline]
    pub fn now(&self) -> f64 {
        self.time_at(self.current_tick)
    }

    /// Number of samples the full run produces (`final_tick + 1`).
    #[inline]
    pub fn sample_count(&self) -> usize {
        usize::try_from(self.final_tick.0)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
    }

    /// How many ticks span `duration` time units (nearest, at least 1).
    #[inline]
    pub fn ticks_for(&self, duration: f64) -> u64 {
        ((duration / self.time_step).round() as u64).max(1)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_tick, self.now())
    }
}
