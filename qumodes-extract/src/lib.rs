//! Representation extraction for queued qumode circuits
//!
//! Recovers numerical representations of a circuit's action on its register
//! by the Choi-Jamiolkowski trick: double the register, prepare an
//! unnormalized maximally-correlated reference ket across the two halves,
//! simulate the circuit once on the first half and read the operator off the
//! final state.
//!
//! - [`extract_unitary`]: the truncated unitary matrix of a gates-only
//!   program
//! - [`extract_channel`]: the Choi, Liouville or Kraus representation of a
//!   program of gates and channels
//! - [`vectorize`] / [`unvectorize`]: the index-regrouping codec behind the
//!   rank-4 reshuffles
//!
//! Extraction is generic over [`ExecutionBackend`](qumodes_fock::ExecutionBackend),
//! so any simulator that can prepare a ket and run a program can serve as the
//! numerical oracle.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use qumodes_core::ops::PhaseShift;
//! use qumodes_core::{ModeId, Program};
//! use qumodes_extract::extract_unitary;
//! use qumodes_fock::FockBackend;
//!
//! let mut program = Program::new(1);
//! program.apply(Arc::new(PhaseShift::new(0.5)), &[ModeId::new(0)]).unwrap();
//!
//! let u = extract_unitary(&FockBackend::new(), &program, 4, true).unwrap();
//! assert_eq!(u.shape(), &[4, 4]);
//! ```

pub mod channel;
pub mod cj;
pub mod classify;
pub mod error;
pub mod options;
pub mod unitary;
pub mod vectorize;

pub use channel::{extract_channel, extract_channel_with, Representation};
pub use cj::{augment_with_cj, interleaved_identity};
pub use classify::{is_channel, is_unitary};
pub use error::ExtractError;
pub use options::ExtractOptions;
pub use unitary::{extract_unitary, extract_unitary_with};
pub use vectorize::{unvectorize, vectorize};

/// Type alias for results in qumodes-extract
pub type Result<T> = std::result::Result<T, ExtractError>;
