use bt_core::LinkId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    /// `link` lies exactly on the origin, so the radial direction to the next
    /// link is undefined.
    #[error("undefined link direction at t = {time}: {link} is at the origin")]
    UndefinedDirection { time: f64, link: LinkId },

    #[error("a chain needs at least one link")]
    Empty,

    #[error("{link} has invalid length {length}")]
    InvalidLength { link: LinkId, length: f64 },

    #[error("{what} length {got} does not match link count {expected}")]
    LinkCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what} must be positive and finite, got {value}")]
    InvalidScalar { what: &'static str, value: f64 },
}

pub type ChainResult<T> = Result<T, ChainError>;
