//! Core types for the qumodes circuit toolkit
//!
//! This crate provides the fundamental types for building qumode circuits in
//! a truncated Fock basis:
//! - [`ModeId`]: Type-safe mode addressing
//! - [`Operator`]: Trait for gates, channels and state preparations
//! - [`Program`]: Ordered operation queue over a mode register
//!
//! # Example
//! ```
//! use qumodes_core::{Program, ModeId};
//!
//! let program = Program::new(2);
//! assert_eq!(program.num_modes(), 2);
//! assert!(program.is_empty());
//! ```

pub mod error;
pub mod mode;
pub mod operator;
pub mod ops;
pub mod program;

// Re-exports for convenience
pub use error::CircuitError;
pub use mode::ModeId;
pub use num_complex::Complex64;
pub use operator::{Operation, Operator, OperatorKind};
pub use program::Program;

/// Default value of hbar in the commutation relation [x, p] = i*hbar
pub const HBAR_DEFAULT: f64 = 2.0;

/// Type alias for results in qumodes-core
pub type Result<T> = std::result::Result<T, CircuitError>;
