//! Plain data row types handed to exporters.

/// One link at one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkSampleRow {
    pub time:       f64,
    /// 0-based, lead link first.
    pub link_index: u32,
    pub x_position: f64,
    pub y_position: f64,
    /// `None` when the run did not record speeds.
    pub speed:      Option<f64>,
}

/// The lead link at one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadPointRow {
    pub time:   f64,
    pub x:      f64,
    pub y:      f64,
    pub radius: f64,
}

/// Scalar outcomes of one run.  Fields that don't apply are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSummaryRow {
    pub steps:            u64,
    pub final_time:       f64,
    pub collision_time:   Option<f64>,
    pub collision_front:  Option<u32>,
    pub collision_rear:   Option<u32>,
    pub boundary_time:    Option<f64>,
    pub peak_speed:       Option<f64>,
    /// Winning pitch or lead speed when the run came out of a search.
    pub search_parameter: Option<f64>,
}
