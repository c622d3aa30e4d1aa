//! Error types for representation extraction

use qumodes_core::CircuitError;
use qumodes_fock::BackendError;
use thiserror::Error;

/// Errors that can occur while extracting a circuit representation
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The program contains a non-gate operator
    #[error("Program is not unitary: it contains non-gate operators")]
    NotUnitary,

    /// The program contains an operator that is neither a gate nor a channel
    #[error("Program is not a channel: it contains operators that are neither gates nor channels")]
    NotChannel,

    /// Vectorization input must have a number of axes divisible by four
    #[error("Tensor has {0} axes; vectorization needs a positive multiple of 4")]
    AxesNotMultipleOfFour(usize),

    /// All axes of the tensor must share one dimension
    #[error("Tensor axes must all have equal dimension")]
    UnequalAxes,

    /// Unvectorization input must have exactly four axes
    #[error("Tensor has {0} axes; unvectorization needs exactly 4")]
    NotRankFour(usize),

    /// Axis size is not an exact power of the cutoff for the mode count
    #[error("Axis size {size} is not an exact {num_modes}-th power")]
    InexactRoot { size: usize, num_modes: usize },

    /// Unrecognized channel representation name
    #[error("Unknown representation '{0}'; expected 'choi', 'liouville' or 'kraus'")]
    UnknownRepresentation(String),

    /// The extraction would exceed the configured tensor-element ceiling
    #[error("Extraction needs a tensor of {required} elements, over the ceiling of {limit}")]
    ResourceLimit { required: u128, limit: u128 },

    /// Internal tensor bookkeeping failure
    #[error("Tensor shape error: {0}")]
    Shape(String),

    /// Failure while augmenting the circuit
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Failure reported by the simulation backend
    #[error(transparent)]
    Backend(#[from] BackendError),
}
