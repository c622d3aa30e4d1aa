//! Dense Fock-basis simulation backend for qumode programs
//!
//! This crate provides the execution side of the qumodes toolkit:
//! - [`ExecutionBackend`]: the trait every simulation backend implements
//! - [`FockBackend`]: a dense state-vector / density-tensor simulator
//! - [`FockState`]: pure and mixed truncated Fock states
//!
//! # Example
//! ```
//! use qumodes_core::Program;
//! use qumodes_fock::{ExecutionBackend, FockBackend, SessionConfig};
//!
//! let backend = FockBackend::new();
//! let mut session = backend.begin(&SessionConfig::pure(1, 3)).unwrap();
//! let output = backend.run(&mut session, &Program::new(1)).unwrap();
//! // Vacuum: all amplitude on |0>
//! assert_eq!(output.ket().unwrap()[[0]].re, 1.0);
//! ```

pub mod backend;
pub mod error;
pub mod simulator;
pub mod state;

pub use backend::{ExecutionBackend, SessionConfig, SimulationOutput};
pub use error::BackendError;
pub use simulator::{FockBackend, FockSession};
pub use state::FockState;

/// Type alias for results in qumodes-fock
pub type Result<T> = std::result::Result<T, BackendError>;
