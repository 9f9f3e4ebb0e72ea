//! Fluent builder for constructing a [`Sim`].

use bt_chain::{ChainResolver, CollisionDetector, LinkLengths, VelocityEstimator};
use bt_core::SimClock;
use bt_path::{LeadPath, PathModel};

use crate::{RunConfig, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - `P: LeadPath`: the lead link's trajectory (usually a [`PathModel`])
/// - [`LinkLengths`]: lead-first link lengths
/// - `time_step`, `time_horizon`
///
/// # Optional stages (all off by default)
///
/// | Method                      | Effect                                        |
/// |-----------------------------|-----------------------------------------------|
/// | `.record_speeds(true)`      | Velocity stage: per-link speeds every step    |
/// | `.collision_clearance(c)`   | Collision stage: halt on adjacent gap `< c`   |
/// | `.boundary_radius(r)`       | Halt once the lead path radius is `<= r`      |
/// | `.snapshot_interval(dt)`    | `on_snapshot` every `dt` time units           |
///
/// # Example
///
/// ```rust,ignore
/// let lengths = LinkLengths::lead_and_trailing(223, 3.41, 2.20)?;
/// let sim = SimBuilder::new(path, lengths, 1.0, 1000.0)
///     .collision_clearance(0.30)
///     .build()?;
/// let result = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: LeadPath> {
    path:              P,
    lengths:           LinkLengths,
    time_step:         f64,
    time_horizon:      f64,
    record_speeds:     bool,
    clearance:         Option<f64>,
    boundary_radius:   Option<f64>,
    snapshot_interval: Option<f64>,
}

impl<P: LeadPath> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(path: P, lengths: LinkLengths, time_step: f64, time_horizon: f64) -> Self {
        Self {
            path,
            lengths,
            time_step,
            time_horizon,
            record_speeds:     false,
            clearance:         None,
            boundary_radius:   None,
            snapshot_interval: None,
        }
    }

    pub fn record_speeds(mut self, on: bool) -> Self {
        self.record_speeds = on;
        self
    }

    pub fn collision_clearance(mut self, clearance: f64) -> Self {
        self.clearance = Some(clearance);
        self
    }

    pub fn boundary_radius(mut self, radius: f64) -> Self {
        self.boundary_radius = Some(radius);
        self
    }

    pub fn snapshot_interval(mut self, interval: f64) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let clock = SimClock::new(self.time_step, self.time_horizon)?;

        let velocity = if self.record_speeds {
            Some(VelocityEstimator::new(self.time_step)?)
        } else {
            None
        };

        let collision = self.clearance.map(CollisionDetector::new).transpose()?;

        if let Some(r) = self.boundary_radius {
            if !r.is_finite() || r <= 0.0 {
                return Err(SimError::Config(format!("boundary radius must be positive, got {r}")));
            }
        }

        let snapshot_every = match self.snapshot_interval {
            None => 0,
            Some(dt) if dt.is_finite() && dt > 0.0 => clock.ticks_for(dt),
            Some(dt) => {
                return Err(SimError::Config(format!("snapshot interval must be positive, got {dt}")));
            }
        };

        Ok(Sim {
            clock,
            path:            self.path,
            resolver:        ChainResolver::new(self.lengths),
            velocity,
            collision,
            boundary_radius: self.boundary_radius,
            snapshot_every,
        })
    }
}

impl SimBuilder<PathModel> {
    /// Builder pre-populated from a configuration record.  Search settings
    /// are ignored here; [`execute`][crate::execute] handles them.
    pub fn from_config(config: &RunConfig) -> SimResult<Self> {
        let mut builder = SimBuilder::new(
            config.path_model()?,
            config.lengths()?,
            config.time_step,
            config.time_horizon,
        )
        .record_speeds(config.wants_speeds());

        if let Some(c) = config.collision_clearance {
            builder = builder.collision_clearance(c);
        }
        if let Some(r) = config.path_parameters.boundary_radius {
            builder = builder.boundary_radius(r);
        }
        if let Some(dt) = config.snapshot_interval {
            builder = builder.snapshot_interval(dt);
        }
        Ok(builder)
    }
}
