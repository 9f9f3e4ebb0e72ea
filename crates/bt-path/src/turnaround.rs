//! Two-arc turnaround path.
//!
//! ```text
//! t <  t_h :  θ(t) = v·t/R1 + θ_start          on radius R1
//! t >= t_h :  θ(t) = (t − t_h)/R2 + θ_carry     on radius R2
//! ```
//!
//! `θ_carry = v·(t_h − dt)/R1 + θ_start` is the angle of the last sample
//! taken on the first arc, one time step before the hand-off.  The second arc
//! starts from that angle, so the hand-off sample repeats the previous
//! sample's angle on the smaller radius.  Neither position nor velocity is
//! continuous there.  That is the modeled manoeuvre and is kept as-is.

use crate::{ArcRadii, LeadPath, LeadSample, PathResult};

/// Which arc a time falls on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArcSegment {
    First,
    Second,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Turnaround {
    pub radii:        ArcRadii,
    pub lead_speed:   f64,
    pub start_angle:  f64,
    /// Time at which the lead link switches to the second arc.
    pub handoff_time: f64,
    carry_angle:      f64,
}

impl Turnaround {
    /// `time_step` is the sampling step of the run; the carried angle is the
    /// first arc's angle at `handoff_time - time_step` (not before `t = 0`).
    pub fn new(
        radii:        ArcRadii,
        lead_speed:   f64,
        start_angle:  f64,
        handoff_time: f64,
        time_step:    f64,
    ) -> Self {
        let last_first_arc = (handoff_time - time_step).max(0.0);
        Self {
            radii,
            lead_speed,
            start_angle,
            handoff_time,
            carry_angle: lead_speed * last_first_arc / radii.first + start_angle,
        }
    }

    /// `θ_carry`, the angle of the last first-arc sample.
    #[inline]
    pub fn carry_angle(&self) -> f64 {
        self.carry_angle
    }

    #[inline]
    pub fn arc_at(&self, time: f64) -> ArcSegment {
        if time < self.handoff_time { ArcSegment::First } else { ArcSegment::Second }
    }
}

impl LeadPath for Turnaround {
    fn sample(&self, time: f64) -> PathResult<LeadSample> {
        match self.arc_at(time) {
            ArcSegment::First => {
                let r = self.radii.first;
                LeadSample::on_circle(time, r, self.lead_speed * time / r + self.start_angle)
            }
            ArcSegment::Second => {
                let r = self.radii.second;
                LeadSample::on_circle(time, r, (time - self.handoff_time) / r + self.carry_angle)
            }
        }
    }
}
