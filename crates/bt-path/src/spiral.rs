//! Archimedean spiral path.

use std::f64::consts::TAU;

use crate::{LeadPath, LeadSample, PathResult, RadialSense};

/// `r(t) = r0 ± p·t/(2π)`, `θ(t) = v·t / r(t)`.
///
/// At unit lead speed the angle reduces to `θ = t / r`.  The radial sign is
/// [`RadialSense`]; a shrinking spiral fails with `DegenerateGeometry` once
/// its radius reaches zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Spiral {
    pub initial_radius: f64,
    pub pitch:          f64,
    pub lead_speed:     f64,
    pub sense:          RadialSense,
}

impl Spiral {
    /// Polar radius at `time`, before any degeneracy check.
    #[inline]
    pub fn radius(&self, time: f64) -> f64 {
        self.initial_radius + self.sense.sign() * self.pitch * time / TAU
    }

    /// First time the radius reaches `target`, or `None` if the spiral never
    /// gets there (wrong direction or zero pitch).
    pub fn time_to_radius(&self, target: f64) -> Option<f64> {
        let rate = self.sense.sign() * self.pitch / TAU;
        if rate == 0.0 {
            return (target == self.initial_radius).then_some(0.0);
        }
        let t = (target - self.initial_radius) / rate;
        (t >= 0.0).then_some(t)
    }
}

impl LeadPath for Spiral {
    fn sample(&self, time: f64) -> PathResult<LeadSample> {
        let radius = self.radius(time);
        LeadSample::on_circle(time, radius, self.lead_speed * time / radius)
    }
}
