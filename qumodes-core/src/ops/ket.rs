//! State preparation from an explicit amplitude tensor

use crate::operator::{Operator, OperatorKind};
use ndarray::ArrayD;
use num_complex::Complex64;

/// Prepares a register in an explicit multi-mode state
///
/// The amplitude tensor carries one axis per targeted mode, in mode order.
/// The amplitudes are used as given; no renormalization is applied, which is
/// what the Choi-Jamiolkowski augmentation relies on when it seeds the
/// doubled register with an unnormalized maximally-correlated state.
///
/// # Example
/// ```
/// use ndarray::ArrayD;
/// use num_complex::Complex64;
/// use qumodes_core::ops::Ket;
/// use qumodes_core::Operator;
///
/// let mut amp = ArrayD::<Complex64>::zeros(vec![2, 2]);
/// amp[[0, 0]] = Complex64::new(1.0, 0.0);
/// amp[[1, 1]] = Complex64::new(1.0, 0.0);
/// let ket = Ket::new(amp);
/// assert_eq!(ket.num_modes(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Ket {
    amplitudes: ArrayD<Complex64>,
}

impl Ket {
    /// Create a preparation from an amplitude tensor (one axis per mode)
    pub fn new(amplitudes: ArrayD<Complex64>) -> Self {
        Self { amplitudes }
    }

    /// The amplitude tensor
    pub fn amplitudes(&self) -> &ArrayD<Complex64> {
        &self.amplitudes
    }
}

impl Operator for Ket {
    fn name(&self) -> &str {
        "Ket"
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Preparation
    }

    fn num_modes(&self) -> usize {
        self.amplitudes.ndim()
    }

    fn ket(&self, _cutoff_dim: usize) -> Option<ArrayD<Complex64>> {
        Some(self.amplitudes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ket_arity_is_tensor_rank() {
        let amp = ArrayD::<Complex64>::zeros(vec![3, 3, 3]);
        let ket = Ket::new(amp);
        assert_eq!(ket.num_modes(), 3);
        assert_eq!(ket.kind(), OperatorKind::Preparation);
    }

    #[test]
    fn test_ket_amplitudes_returned_verbatim() {
        let mut amp = ArrayD::<Complex64>::zeros(vec![2]);
        amp[[0]] = Complex64::new(2.0, 0.0); // deliberately unnormalized
        let ket = Ket::new(amp.clone());
        assert_eq!(ket.ket(2).unwrap(), amp);
        assert!(ket.matrix(2).is_none());
        assert!(ket.kraus_operators(2).is_none());
    }
}
