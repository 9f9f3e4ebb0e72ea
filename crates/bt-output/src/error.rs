//! Error types for bt-output.

use thiserror::Error;

/// Errors that can occur when collecting simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Rows must arrive in non-decreasing time order.
    #[error("rows out of time order: {got} after {previous}")]
    OutOfOrder { previous: f64, got: f64 },

    #[error("writer already finished")]
    Finished,

    #[error("snapshot interval must be positive and finite, got {0}")]
    InvalidInterval(f64),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
