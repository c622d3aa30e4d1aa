//! Operator-kind predicates over queued programs

use qumodes_core::{OperatorKind, Program};

/// Whether every queued operator is a gate
///
/// An empty queue is unitary (it is the identity).
pub fn is_unitary(program: &Program) -> bool {
    program
        .operations()
        .all(|op| op.kind() == OperatorKind::Gate)
}

/// Whether every queued operator is a gate or a channel
///
/// Preparations disqualify a program: they are not trace-preserving maps on
/// the register state.
pub fn is_channel(program: &Program) -> bool {
    program
        .operations()
        .all(|op| matches!(op.kind(), OperatorKind::Gate | OperatorKind::Channel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayD;
    use num_complex::Complex64;
    use qumodes_core::ops::{Ket, LossChannel, PhaseShift};
    use qumodes_core::ModeId;
    use std::sync::Arc;

    #[test]
    fn test_empty_program() {
        let program = Program::new(1);
        assert!(is_unitary(&program));
        assert!(is_channel(&program));
    }

    #[test]
    fn test_gates_only() {
        let mut program = Program::new(1);
        program
            .apply(Arc::new(PhaseShift::new(0.2)), &[ModeId::new(0)])
            .unwrap();
        assert!(is_unitary(&program));
        assert!(is_channel(&program));
    }

    #[test]
    fn test_channel_breaks_unitarity() {
        let mut program = Program::new(1);
        program
            .apply(Arc::new(PhaseShift::new(0.2)), &[ModeId::new(0)])
            .unwrap();
        program
            .apply(Arc::new(LossChannel::new(0.9).unwrap()), &[ModeId::new(0)])
            .unwrap();
        assert!(!is_unitary(&program));
        assert!(is_channel(&program));
    }

    #[test]
    fn test_preparation_breaks_both() {
        let amps = ArrayD::<Complex64>::zeros(vec![2]);
        let mut program = Program::new(1);
        program
            .apply(Arc::new(Ket::new(amps)), &[ModeId::new(0)])
            .unwrap();
        assert!(!is_unitary(&program));
        assert!(!is_channel(&program));
    }
}
