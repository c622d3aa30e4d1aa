//! Error types for backend execution

use thiserror::Error;

/// Errors that can occur while executing a program on a backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Invalid session configuration
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    /// Program register does not match the session register
    #[error("Program has {program} modes but session was begun with {session}")]
    ModeCountMismatch { program: usize, session: usize },

    /// An operator's numeric representation has the wrong dimension
    #[error("Operator '{operator}' has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// An operator did not provide the numeric form its kind promises
    #[error("Operator '{operator}' of kind {kind} provides no numeric representation")]
    MissingNumeric { operator: String, kind: String },

    /// A preparation targeted something other than the full register
    #[error("Preparation '{0}' must target the full register in register order")]
    UnsupportedPreparation(String),

    /// A pure-state result was requested from a mixed state
    #[error("State is mixed; no ket is available")]
    NotPure,

    /// Requested state exceeds the configured element ceiling
    #[error("State of {required} elements exceeds ceiling of {limit}")]
    ResourceExhausted { required: u128, limit: u128 },

    /// Internal tensor bookkeeping failure
    #[error("Tensor shape error: {0}")]
    Shape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BackendError::ModeCountMismatch {
            program: 3,
            session: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3"));
        assert!(msg.contains("2"));

        let err = BackendError::NotPure;
        assert!(format!("{}", err).contains("mixed"));
    }
}
