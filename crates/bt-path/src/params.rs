//! Path family tags and per-run path parameters.

use crate::{PathError, PathResult};

/// The closed set of lead-link trajectories.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathFamily {
    /// Archimedean spiral entered from its outer coil.
    #[default]
    SpiralIn,
    /// Two circular arcs: radius `R1` for the first half of the horizon,
    /// radius `R2` for the second.
    Turnaround,
    /// Archimedean spiral leaving the turnaround region.
    SpiralOut,
}

impl PathFamily {
    /// Radial sense used when the parameters don't name one.
    ///
    /// Both spiral families grow their radius by default; the shrinking sense
    /// is opted into explicitly (the minimum-pitch boundary search uses it).
    #[inline]
    pub fn default_sense(self) -> RadialSense {
        RadialSense::Growing
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathFamily::SpiralIn   => "spiral_in",
            PathFamily::Turnaround => "turnaround",
            PathFamily::SpiralOut  => "spiral_out",
        }
    }
}

impl std::fmt::Display for PathFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign of the radial term `± p·t/(2π)` of a spiral.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RadialSense {
    /// `r(t) = r0 + p·t/(2π)`
    Growing,
    /// `r(t) = r0 − p·t/(2π)`; reaches zero in finite time.
    Shrinking,
}

impl RadialSense {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            RadialSense::Growing   => 1.0,
            RadialSense::Shrinking => -1.0,
        }
    }
}

/// Radii of the two turnaround arcs.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcRadii {
    /// `R1`, followed during the first half of the horizon.
    pub first:  f64,
    /// `R2`, followed during the second half.
    pub second: f64,
}

impl Default for ArcRadii {
    /// `R2 = 4.5` (the turnaround region), `R1 = 2·R2`.
    fn default() -> Self {
        Self { first: 9.0, second: 4.5 }
    }
}

/// Constants describing one run's lead-link path.
///
/// Not every field applies to every family: spirals read `pitch`,
/// `initial_radius`, `lead_speed` and `radial_sense`; the turnaround reads
/// `arc_radii`, `lead_speed` and `start_angle`.  `boundary_radius` is the
/// stop radius consumed by the runner, not by the path itself.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathParams {
    /// Spiral pitch `p`: radial distance between successive coils.
    pub pitch: f64,
    /// Spiral radius at `t = 0`.
    pub initial_radius: f64,
    /// Lead link speed `v_head`.
    pub lead_speed: f64,
    pub arc_radii: ArcRadii,
    /// Turnaround boundary radius `r_turn`; `None` disables the boundary stop.
    pub boundary_radius: Option<f64>,
    /// Overrides [`PathFamily::default_sense`] for spiral families.
    pub radial_sense: Option<RadialSense>,
    /// Polar angle of the lead link at `t = 0` on the first turnaround arc.
    pub start_angle: f64,
}

impl Default for PathParams {
    /// Pitch 0.55 starting on the 16th coil (`r0 = 16·p`) at unit speed.
    fn default() -> Self {
        Self {
            pitch:           0.55,
            initial_radius:  16.0 * 0.55,
            lead_speed:      1.0,
            arc_radii:       ArcRadii::default(),
            boundary_radius: None,
            radial_sense:    None,
            start_angle:     0.0,
        }
    }
}

impl PathParams {
    /// Radial sense for `family`, honoring an explicit override.
    #[inline]
    pub fn sense_for(&self, family: PathFamily) -> RadialSense {
        self.radial_sense.unwrap_or_else(|| family.default_sense())
    }

    /// Check the fields `family` reads for finiteness and sign.
    pub fn validate(&self, family: PathFamily) -> PathResult<()> {
        finite("lead_speed", self.lead_speed)?;
        match family {
            PathFamily::SpiralIn | PathFamily::SpiralOut => {
                finite("pitch", self.pitch)?;
                positive("initial_radius", self.initial_radius)?;
            }
            PathFamily::Turnaround => {
                finite("start_angle", self.start_angle)?;
                positive("arc_radii.first", self.arc_radii.first)?;
                positive("arc_radii.second", self.arc_radii.second)?;
            }
        }
        if let Some(r_turn) = self.boundary_radius {
            positive("boundary_radius", r_turn)?;
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> PathResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PathError::InvalidParameter { name, value })
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> PathResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PathError::InvalidParameter { name, value })
    }
}
