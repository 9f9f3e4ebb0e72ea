//! Every link's position at one instant.

use bt_core::{LinkId, Point2};

/// Link positions at `time`, lead-first.
///
/// Produced by [`ChainResolver`][crate::ChainResolver] and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfiguration {
    pub time:      f64,
    pub positions: Vec<Point2>,
}

impl ChainConfiguration {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The lead link's position.
    ///
    /// # Panics
    /// Panics on an empty configuration; the resolver never produces one.
    #[inline]
    pub fn lead(&self) -> Point2 {
        self.positions[0]
    }

    #[inline]
    pub fn position(&self, link: LinkId) -> Point2 {
        self.positions[link.index()]
    }

    /// Distance between link `i` and link `i + 1`, for every adjacent pair.
    pub fn separations(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.windows(2).map(|w| w[0].distance(w[1]))
    }
}
