//! Adjacent-link clearance scan.
//!
//! Only neighbours `(i, i + 1)` are compared.  Non-adjacent links are never
//! checked; with the chain's geometry only neighbours are expected to come
//! close.

use bt_core::{LinkId, Point2};

use crate::{ChainError, ChainResult};

/// Two adjacent links and their separation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkPair {
    /// The link nearer the lead (`i`).
    pub front:      LinkId,
    /// `i + 1`.
    pub rear:       LinkId,
    pub separation: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionDetector {
    clearance: f64,
}

impl CollisionDetector {
    /// # Errors
    ///
    /// [`ChainError::InvalidScalar`] for a negative or non-finite clearance.
    pub fn new(clearance: f64) -> ChainResult<Self> {
        if !clearance.is_finite() || clearance < 0.0 {
            return Err(ChainError::InvalidScalar { what: "collision clearance", value: clearance });
        }
        Ok(Self { clearance })
    }

    #[inline]
    pub fn clearance(&self) -> f64 {
        self.clearance
    }

    /// The lowest-index adjacent pair closer than the clearance (strictly),
    /// or `None`.
    pub fn detect(&self, positions: &[Point2]) -> Option<LinkPair> {
        positions.windows(2).enumerate().find_map(|(i, w)| {
            let separation = w[0].distance(w[1]);
            (separation < self.clearance).then(|| LinkPair {
                front: LinkId(i as u32),
                rear:  LinkId(i as u32 + 1),
                separation,
            })
        })
    }
}
