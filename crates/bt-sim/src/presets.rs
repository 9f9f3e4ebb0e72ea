//! Ready-made configurations for the five standard bench train runs.
//!
//! All presets share the standard train: one lead link of length
//! [`LEAD_LENGTH`] followed by `NUM_LINKS - 1` trailing links of
//! [`TRAILING_LENGTH`].  Each returns an owned [`RunConfig`] that callers may
//! tweak before handing it to [`execute`][crate::execute].

use bt_path::{ArcRadii, PathFamily, PathParams, RadialSense};

use crate::{RunConfig, SearchGrid, SearchMode};

pub const NUM_LINKS: usize = 223;
pub const LEAD_LENGTH: f64 = 3.41;
pub const TRAILING_LENGTH: f64 = 2.20;
pub const CLEARANCE: f64 = 0.30;
pub const TURN_RADIUS: f64 = 4.5;

fn standard_lengths() -> Vec<f64> {
    let mut lengths = vec![TRAILING_LENGTH; NUM_LINKS];
    lengths[0] = LEAD_LENGTH;
    lengths
}

fn base(path_family: PathFamily, path_parameters: PathParams, time_horizon: f64) -> RunConfig {
    RunConfig {
        num_links:           NUM_LINKS,
        link_lengths:        standard_lengths(),
        path_family,
        path_parameters,
        time_horizon,
        time_step:           1.0,
        collision_clearance: None,
        record_speeds:       false,
        snapshot_interval:   None,
        search_mode:         SearchMode::None,
        search_grid:         None,
    }
}

/// Positions and speeds of every link on the default spiral for 300 s.
pub fn spiral_survey() -> RunConfig {
    RunConfig {
        record_speeds: true,
        ..base(PathFamily::SpiralIn, PathParams::default(), 300.0)
    }
}

/// The default spiral run to 1000 s with the collision stage on.
pub fn spiral_collision() -> RunConfig {
    RunConfig {
        collision_clearance: Some(CLEARANCE),
        ..base(PathFamily::SpiralIn, PathParams::default(), 1000.0)
    }
}

/// Smallest inward-coiling pitch that reaches the turn radius within 500 s.
pub fn minimum_pitch() -> RunConfig {
    let params = PathParams {
        boundary_radius: Some(TURN_RADIUS),
        radial_sense:    Some(RadialSense::Shrinking),
        ..PathParams::default()
    };
    RunConfig {
        search_mode: SearchMode::MinimizePitch,
        search_grid: Some(SearchGrid::Linspace { start: 0.55, stop: 0.10, count: 100 }),
        ..base(PathFamily::SpiralIn, params, 500.0)
    }
}

/// Two-arc turnaround with the second arc at the turn radius.
pub fn turnaround() -> RunConfig {
    let params = PathParams {
        arc_radii: ArcRadii { first: 2.0 * TURN_RADIUS, second: TURN_RADIUS },
        ..PathParams::default()
    };
    RunConfig {
        record_speeds: true,
        ..base(PathFamily::Turnaround, params, 200.0)
    }
}

/// Fastest lead speed on a wide outward spiral that keeps every link at or
/// below 2 m/s.
pub fn maximum_lead_speed() -> RunConfig {
    let params = PathParams {
        pitch:          1.7,
        initial_radius: 4.5,
        ..PathParams::default()
    };
    RunConfig {
        record_speeds: true,
        search_mode:   SearchMode::MaximizeSpeed { speed_cap: 2.0 },
        search_grid:   Some(SearchGrid::Arange { start: 0.5, stop: 3.0, step: 0.01 }),
        ..base(PathFamily::SpiralOut, params, 500.0)
    }
}
