//! Error types for circuit construction

use crate::ModeId;
use thiserror::Error;

/// Errors that can occur while building a qumode circuit
#[derive(Debug, Error)]
pub enum CircuitError {
    /// Invalid mode index used
    #[error("Invalid mode index {0}: program has only {1} modes")]
    InvalidMode(usize, usize),

    /// Operator applied to wrong number of modes
    #[error("Operator '{operator}' acts on {expected} modes, but {actual} were provided")]
    InvalidModeCount {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// Duplicate mode in an operation
    #[error("Duplicate mode {0} in operation")]
    DuplicateMode(ModeId),

    /// Generic argument validation error
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CircuitError {
    /// Create an invalid mode error
    pub fn invalid_mode(mode: usize, num_modes: usize) -> Self {
        Self::InvalidMode(mode, num_modes)
    }

    /// Create an invalid mode count error
    pub fn invalid_mode_count(operator: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidModeCount {
            operator: operator.into(),
            expected,
            actual,
        }
    }
}
