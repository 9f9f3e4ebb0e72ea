//! The `LeadPath` trait and the `PathModel` dispatch enum.
//!
//! # Pluggability
//!
//! `bt-sim` samples the lead link through [`LeadPath`], so a test or an
//! application can drive the chain along any trajectory.  The engine's own
//! configuration record always resolves to [`PathModel`], a closed enum over
//! the built-in families, which keeps the runner monomorphic and `Clone`.

use bt_core::Point2;

use crate::{PathError, PathFamily, PathParams, PathResult, Spiral, Turnaround};

// ── LeadSample ───────────────────────────────────────────────────────────────

/// The lead link's state at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LeadSample {
    pub time:     f64,
    pub position: Point2,
    /// Polar radius of the path at `time`.
    pub radius:   f64,
    /// Polar angle `θ(t)` as produced by the path (not wrapped).
    pub angle:    f64,
}

impl LeadSample {
    /// Build a sample on a circle of `radius` at `angle`, rejecting radii
    /// that would produce NaN/inf or mirrored coordinates.
    pub(crate) fn on_circle(time: f64, radius: f64, angle: f64) -> PathResult<Self> {
        if !radius.is_finite() || radius <= 0.0 || !angle.is_finite() {
            return Err(PathError::DegenerateGeometry { time, radius });
        }
        Ok(Self {
            time,
            position: Point2::from_polar(radius, angle),
            radius,
            angle,
        })
    }
}

// ── LeadPath trait ───────────────────────────────────────────────────────────

/// A time-parameterized planar trajectory for the lead link.
///
/// # Contract
///
/// `sample` is pure: identical `time` in, bit-identical sample out.  It
/// returns [`PathError::DegenerateGeometry`] instead of a non-finite point.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the parameter search can run
/// candidates on Rayon worker threads.
pub trait LeadPath: Send + Sync {
    fn sample(&self, time: f64) -> PathResult<LeadSample>;
}

// ── PathModel ────────────────────────────────────────────────────────────────

/// A configured built-in path.
#[derive(Clone, Debug, PartialEq)]
pub enum PathModel {
    Spiral(Spiral),
    Turnaround(Turnaround),
}

impl PathModel {
    /// Build the path for `family` from `params`.
    ///
    /// `horizon` and `time_step` are only read by the turnaround, which hands
    /// off from the first arc to the second at `horizon / 2` and carries the
    /// angle of the sample one `time_step` earlier.
    pub fn new(
        family:    PathFamily,
        params:    &PathParams,
        horizon:   f64,
        time_step: f64,
    ) -> PathResult<Self> {
        params.validate(family)?;
        crate::params::positive("time_step", time_step)?;
        Ok(match family {
            PathFamily::SpiralIn | PathFamily::SpiralOut => PathModel::Spiral(Spiral {
                initial_radius: params.initial_radius,
                pitch:          params.pitch,
                lead_speed:     params.lead_speed,
                sense:          params.sense_for(family),
            }),
            PathFamily::Turnaround => PathModel::Turnaround(Turnaround::new(
                params.arc_radii,
                params.lead_speed,
                params.start_angle,
                horizon * 0.5,
                time_step,
            )),
        })
    }
}

impl LeadPath for PathModel {
    #[inline]
    fn sample(&self, time: f64) -> PathResult<LeadSample> {
        match self {
            PathModel::Spiral(s)     => s.sample(time),
            PathModel::Turnaround(t) => t.sample(time),
        }
    }
}
