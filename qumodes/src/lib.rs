//! Qumode circuit toolkit
//!
//! Facade crate bundling the three workspace members:
//! - [`qumodes_core`]: mode register, operator trait and the queued
//!   [`Program`]
//! - [`qumodes_fock`]: the dense Fock-basis simulator behind
//!   [`ExecutionBackend`]
//! - [`qumodes_extract`]: unitary / Choi / Liouville / Kraus representation
//!   extraction via the Choi-Jamiolkowski trick
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use qumodes::ops::PhaseShift;
//! use qumodes::{extract_unitary, FockBackend, ModeId, Program};
//!
//! let mut program = Program::new(1);
//! program.apply(Arc::new(PhaseShift::new(0.25)), &[ModeId::new(0)]).unwrap();
//!
//! let u = extract_unitary(&FockBackend::new(), &program, 5, true).unwrap();
//! assert_eq!(u.shape(), &[5, 5]);
//! ```

pub use qumodes_core::{
    ops, CircuitError, Complex64, ModeId, Operation, Operator, OperatorKind, Program,
    HBAR_DEFAULT,
};

pub use qumodes_fock::{
    BackendError, ExecutionBackend, FockBackend, FockSession, FockState, SessionConfig,
    SimulationOutput,
};

pub use qumodes_extract::{
    augment_with_cj, extract_channel, extract_channel_with, extract_unitary,
    extract_unitary_with, interleaved_identity, is_channel, is_unitary, unvectorize, vectorize,
    ExtractError, ExtractOptions, Representation,
};
