//! Path-model error type.

use thiserror::Error;

/// Errors produced by `bt-path`.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path radius reached zero, went negative, or stopped being finite.
    /// Coordinates past this point would be NaN or mirrored nonsense, so the
    /// run must stop here.
    #[error("degenerate geometry at t = {time}: path radius {radius}")]
    DegenerateGeometry { time: f64, radius: f64 },

    #[error("invalid path parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type PathResult<T> = Result<T, PathError>;
