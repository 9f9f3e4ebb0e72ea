//! Planar coordinate type and the polar helpers the chain model is built on.
//!
//! Everything is `f64`: the chain is resolved by repeated offsetting from the
//! previous link, so rounding error compounds along a 200+ link train and
//! single precision would visibly break the link-length invariant.

use std::f64::consts::PI;

/// A point (or displacement) in the plane, metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at polar coordinates `(radius, angle)` about the origin.
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the origin.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// `true` only for the exact origin, where the polar angle is undefined.
    ///
    /// `atan2(0, 0)` returns `0` rather than failing, so callers that depend
    /// on a meaningful angle must test this first.
    #[inline]
    pub fn is_origin(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Polar angle `atan2(y, x)` in `(-π, π]`.
    #[inline]
    pub fn polar_angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Direction pointing back through the origin: `polar_angle + π`.
    #[inline]
    pub fn inward_angle(self) -> f64 {
        self.polar_angle() + PI
    }

    /// `self` moved `distance` along `angle`.
    #[inline]
    pub fn offset(self, distance: f64, angle: f64) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
