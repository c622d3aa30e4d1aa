//! Operator trait and queued operation records

use crate::{CircuitError, ModeId, Result};
use ndarray::{Array2, ArrayD};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Classification of a queued operator
///
/// The representation-extraction routines dispatch on this tag alone and are
/// otherwise agnostic to operator internals.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OperatorKind {
    /// A unitary gate
    Gate,
    /// A (generally non-unitary) quantum channel
    Channel,
    /// A state preparation
    Preparation,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Gate => write!(f, "gate"),
            OperatorKind::Channel => write!(f, "channel"),
            OperatorKind::Preparation => write!(f, "preparation"),
        }
    }
}

/// Trait for quantum operators acting on qumodes
///
/// Operators are stateless and reusable across programs. Numeric
/// representations are parameterized by the cutoff dimension `D` of the
/// truncated Fock basis, since most operators (e.g. a phase shift) have a
/// different matrix at every truncation.
///
/// Exactly one of [`matrix`](Operator::matrix),
/// [`kraus_operators`](Operator::kraus_operators) or [`ket`](Operator::ket)
/// is expected to return `Some`, matching [`Operator::kind`].
pub trait Operator: Send + Sync + fmt::Debug {
    /// The name of the operator (e.g., "R", "Kerr", "Loss")
    fn name(&self) -> &str;

    /// Classification tag used by the extraction routines
    fn kind(&self) -> OperatorKind;

    /// Number of modes this operator acts on
    fn num_modes(&self) -> usize;

    /// The unitary matrix of a gate, as a `D^k x D^k` array for a `k`-mode
    /// gate truncated at `cutoff_dim`
    ///
    /// Returns `None` for operators that are not gates.
    fn matrix(&self, cutoff_dim: usize) -> Option<Array2<Complex64>> {
        let _ = cutoff_dim;
        None
    }

    /// The Kraus operators of a channel, each a `D^k x D^k` array
    ///
    /// Returns `None` for operators that are not channels.
    fn kraus_operators(&self, cutoff_dim: usize) -> Option<Vec<Array2<Complex64>>> {
        let _ = cutoff_dim;
        None
    }

    /// The amplitude tensor of a state preparation, one axis of size
    /// `cutoff_dim` per targeted mode
    ///
    /// Returns `None` for operators that are not preparations.
    fn ket(&self, cutoff_dim: usize) -> Option<ArrayD<Complex64>> {
        let _ = cutoff_dim;
        None
    }

    /// Get a description of this operator
    fn description(&self) -> String {
        format!("{}-mode {} '{}'", self.num_modes(), self.kind(), self.name())
    }
}

/// An operator applied to specific modes
///
/// Combines an operator with the ordered list of modes it acts on. The mode
/// order is significant for multi-mode operators.
#[derive(Clone)]
pub struct Operation {
    operator: Arc<dyn Operator>,
    modes: SmallVec<[ModeId; 2]>,
}

impl Operation {
    /// Create a new operation record
    ///
    /// # Errors
    /// Returns error if:
    /// - Mode count doesn't match the operator arity
    /// - Duplicate modes are specified
    pub fn new(operator: Arc<dyn Operator>, modes: &[ModeId]) -> Result<Self> {
        if modes.len() != operator.num_modes() {
            return Err(CircuitError::invalid_mode_count(
                operator.name(),
                operator.num_modes(),
                modes.len(),
            ));
        }

        for i in 0..modes.len() {
            for j in (i + 1)..modes.len() {
                if modes[i] == modes[j] {
                    return Err(CircuitError::DuplicateMode(modes[i]));
                }
            }
        }

        Ok(Self {
            operator,
            modes: SmallVec::from_slice(modes),
        })
    }

    /// Get the operator
    #[inline]
    pub fn operator(&self) -> &Arc<dyn Operator> {
        &self.operator
    }

    /// Get the modes this operation acts on, in application order
    #[inline]
    pub fn modes(&self) -> &[ModeId] {
        &self.modes
    }

    /// Get the number of modes
    #[inline]
    pub fn num_modes(&self) -> usize {
        self.modes.len()
    }

    /// Classification tag of the underlying operator
    #[inline]
    pub fn kind(&self) -> OperatorKind {
        self.operator.kind()
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operator.name())?;
        for (i, m) in self.modes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockOperator {
        name: String,
        num_modes: usize,
        kind: OperatorKind,
    }

    impl Operator for MockOperator {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> OperatorKind {
            self.kind
        }

        fn num_modes(&self) -> usize {
            self.num_modes
        }
    }

    fn mock_gate(name: &str, num_modes: usize) -> Arc<dyn Operator> {
        Arc::new(MockOperator {
            name: name.to_string(),
            num_modes,
            kind: OperatorKind::Gate,
        })
    }

    #[test]
    fn test_operation_creation() {
        let op = Operation::new(mock_gate("R", 1), &[ModeId::new(0)]).unwrap();
        assert_eq!(op.num_modes(), 1);
        assert_eq!(op.modes()[0], ModeId::new(0));
        assert_eq!(op.kind(), OperatorKind::Gate);
    }

    #[test]
    fn test_operation_invalid_mode_count() {
        let result = Operation::new(mock_gate("BS", 2), &[ModeId::new(0)]);
        assert!(matches!(
            result,
            Err(CircuitError::InvalidModeCount { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_operation_duplicate_modes() {
        let m0 = ModeId::new(0);
        let result = Operation::new(mock_gate("BS", 2), &[m0, m0]);
        assert!(matches!(result, Err(CircuitError::DuplicateMode(_))));
    }

    #[test]
    fn test_operation_display() {
        let op = Operation::new(mock_gate("BS", 2), &[ModeId::new(0), ModeId::new(1)]).unwrap();
        let display = format!("{}", op);
        assert!(display.contains("BS"));
        assert!(display.contains("q0"));
        assert!(display.contains("q1"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", OperatorKind::Gate), "gate");
        assert_eq!(format!("{}", OperatorKind::Channel), "channel");
        assert_eq!(format!("{}", OperatorKind::Preparation), "preparation");
    }
}
