//! The `Sim` struct and its step loop.

use bt_chain::{ChainResolver, CollisionDetector, VelocityEstimator};
use bt_core::{SimClock, Tick};
use bt_path::LeadPath;
use tracing::{debug, info, warn};

use crate::{BoundaryEvent, CollisionEvent, SimObserver, SimResult, SimulationResult, TimeSeries};

/// One configured simulation.
///
/// `Sim<P>` is immutable once built; [`run`][Self::run] allocates a fresh
/// [`TimeSeries`] every call, so the same `Sim` can be run repeatedly and
/// each run owns its own arrays.  Per tick, strictly in increasing order:
///
/// 1. **Path**: sample the lead link at `t = tick · time_step`.
/// 2. **Resolve**: place every trailing link from the lead position.
/// 3. **Velocity** (optional): backward-difference speeds against the
///    previous step.
/// 4. **Collision** (optional): halt at the first adjacent pair closer than
///    the clearance.
/// 5. **Boundary** (optional): halt once the lead path radius is
///    `<= boundary_radius`.
///
/// A halting step is recorded before the run stops, so the series covers
/// `[0, halt_time]`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
pub struct Sim<P: LeadPath> {
    /// Step size and horizon.  `run` works on a copy rewound to tick 0.
    pub clock: SimClock,

    /// Lead link trajectory.
    pub path: P,

    /// Link lengths and the radial placement rule.
    pub resolver: ChainResolver,

    /// Velocity stage; `None` skips speeds entirely.
    pub velocity: Option<VelocityEstimator>,

    /// Collision stage; `None` never halts on proximity.
    pub collision: Option<CollisionDetector>,

    /// Stop radius for the lead path.
    pub boundary_radius: Option<f64>,

    /// Snapshot period in ticks; 0 disables `on_snapshot`.
    pub snapshot_every: u64,
}

impl<P: LeadPath> Sim<P> {
    #[inline]
    pub fn link_count(&self) -> usize {
        self.resolver.link_count()
    }

    /// Run from tick 0 to the horizon or the first stop condition.
    ///
    /// # Errors
    ///
    /// Path degeneracy and undefined link directions abort the run
    /// immediately; no partial result is returned.
    pub fn run<O: SimObserver>(&self, observer: &mut O) -> SimResult<SimulationResult> {
        let mut clock = self.clock.clone();
        clock.current_tick = Tick::ZERO;

        let n = self.link_count();
        let mut series = TimeSeries::with_capacity(n, clock.sample_count(), self.velocity.is_some())?;
        let mut collision = None;
        let mut boundary = None;

        info!(
            links = n,
            final_tick = clock.final_tick.0,
            time_step = clock.time_step,
            "Starting chain simulation"
        );
        observer.on_run_start(&clock, n);

        while !clock.is_finished() {
            let tick = clock.current_tick;
            let time = clock.now();

            // ── Path + resolve ────────────────────────────────────────────
            let lead = self.path.sample(time)?;
            self.resolver.resolve_into(time, lead.position, &mut series.positions)?;
            series.times.push(time);
            series.lead_radii.push(lead.radius);

            let start = tick.0 as usize * n;
            let current = &series.positions[start..start + n];

            // ── Velocity ──────────────────────────────────────────────────
            if let (Some(est), Some(speeds)) = (&self.velocity, series.speeds.as_mut()) {
                let previous = (start >= n).then(|| &series.positions[start - n..start]);
                est.speeds_into(previous, current, speeds)?;
            }
            let step_speeds = series.speeds.as_ref().map(|s| &s[start..start + n]);

            observer.on_step(tick, time, current, step_speeds);
            if tick.is_multiple_of(self.snapshot_every) {
                debug!(tick = tick.0, time, "Snapshot");
                observer.on_snapshot(tick, time, current);
            }

            // ── Stop conditions ───────────────────────────────────────────
            if let Some(pair) = self.collision.as_ref().and_then(|d| d.detect(current)) {
                let event = CollisionEvent {
                    tick,
                    time,
                    front:      pair.front,
                    rear:       pair.rear,
                    separation: pair.separation,
                };
                warn!(
                    time,
                    front = pair.front.0,
                    rear = pair.rear.0,
                    separation = pair.separation,
                    "Adjacent links closer than clearance"
                );
                observer.on_collision(&event);
                collision = Some(event);
            }

            if let Some(r_turn) = self.boundary_radius {
                if lead.radius <= r_turn {
                    let event = BoundaryEvent { tick, time, radius: lead.radius };
                    debug!(time, radius = lead.radius, "Lead link reached boundary");
                    observer.on_boundary(&event);
                    boundary = Some(event);
                }
            }

            if collision.is_some() || boundary.is_some() {
                break;
            }
            clock.advance();
        }

        let final_tick = series.last_tick().unwrap_or(Tick::ZERO);
        info!(
            steps = series.len(),
            collision = collision.is_some(),
            boundary = boundary.is_some(),
            "Chain simulation finished"
        );
        observer.on_run_end(final_tick);

        Ok(SimulationResult { series, collision, boundary })
    }
}
