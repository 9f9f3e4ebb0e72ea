use bt_chain::ChainError;
use bt_core::BtError;
use bt_path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match link count {expected}")]
    LinkCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("clock error: {0}")]
    Core(#[from] BtError),

    #[error("path model error: {0}")]
    Path(#[from] PathError),

    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// The search grid was exhausted without any candidate meeting the stop
    /// condition.  Callers may widen the grid and retry.
    #[error("{mode} search found no solution among {candidates} candidates")]
    NoSolutionFound { mode: &'static str, candidates: usize },
}

impl SimError {
    /// `true` only for search exhaustion; geometry and configuration errors
    /// mean the run itself is invalid.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SimError::NoSolutionFound { .. })
    }
}

pub type SimResult<T> = Result<T, SimError>;
