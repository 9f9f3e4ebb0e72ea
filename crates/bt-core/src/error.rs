//! Framework error type.
//!
//! Sub-crates define their own error enums (`PathError`, `ChainError`, …) and
//! `bt-sim` folds them together with `#[from]`.  `BtError` covers the checks
//! that live in this crate: clock construction and finiteness guards.

use thiserror::Error;

/// The error type for `bt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Shorthand result type for `bt-core`.
pub type BtResult<T> = Result<T, BtError>;

/// Reject NaN and infinities with a named error.
pub fn ensure_finite(what: &'static str, value: f64) -> BtResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BtError::NonFinite { what, value })
    }
}
