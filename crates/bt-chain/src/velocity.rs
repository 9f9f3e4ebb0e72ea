//! First-order backward-difference speed estimate.
//!
//! `speed(t, i) = |p_i(t) − p_i(t − Δt)| / Δt`, and `0` at the first sample.
//! This is a chord length over the step, so it under-reads on curved paths.
//! The maximum-speed search is calibrated against exactly this estimate; do
//! not swap in a centered or higher-order difference.

use bt_core::Point2;

use crate::{ChainError, ChainResult};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VelocityEstimator {
    time_step: f64,
}

impl VelocityEstimator {
    pub fn new(time_step: f64) -> ChainResult<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ChainError::InvalidScalar { what: "time step", value: time_step });
        }
        Ok(Self { time_step })
    }

    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Speed of one link given its previous sample (`None` at `t = 0`).
    #[inline]
    pub fn speed(&self, previous: Option<Point2>, current: Point2) -> f64 {
        match previous {
            None       => 0.0,
            Some(prev) => prev.distance(current) / self.time_step,
        }
    }

    /// Speeds of every link, appended to `out`.
    ///
    /// # Errors
    ///
    /// [`ChainError::LinkCountMismatch`] if `previous` and `current` hold a
    /// different number of links.
    pub fn speeds_into(
        &self,
        previous: Option<&[Point2]>,
        current:  &[Point2],
        out:      &mut Vec<f64>,
    ) -> ChainResult<()> {
        match previous {
            None => out.extend(std::iter::repeat_n(0.0, current.len())),
            Some(prev) => {
                if prev.len() != current.len() {
                    return Err(ChainError::LinkCountMismatch {
                        expected: current.len(),
                        got:      prev.len(),
                        what:     "previous configuration",
                    });
                }
                out.extend(
                    prev.iter()
                        .zip(current)
                        .map(|(&p, &c)| p.distance(c) / self.time_step),
                );
            }
        }
        Ok(())
    }

    pub fn speeds(&self, previous: Option<&[Point2]>, current: &[Point2]) -> ChainResult<Vec<f64>> {
        let mut out = Vec::with_capacity(current.len());
        self.speeds_into(previous, current, &mut out)?;
        Ok(out)
    }
}
