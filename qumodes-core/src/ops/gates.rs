//! Unitary gate operators

use crate::operator::{Operator, OperatorKind};
use crate::{CircuitError, Result};
use ndarray::Array2;
use num_complex::Complex64;

/// A gate defined by an explicit unitary matrix
///
/// The matrix must be `D^k x D^k` for a `k`-mode gate at cutoff dimension
/// `D`; the truncation it was built for is fixed at construction time.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use qumodes_core::ops::GateMatrix;
///
/// // Fock-basis "X" on a 2-level truncation
/// let x = Array2::from_shape_vec((2, 2), vec![
///     Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0),
///     Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0),
/// ]).unwrap();
/// let gate = GateMatrix::new("X", 1, x).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct GateMatrix {
    name: String,
    num_modes: usize,
    matrix: Array2<Complex64>,
}

impl GateMatrix {
    /// Create a gate from a square matrix
    ///
    /// # Errors
    /// Returns error if the matrix is not square.
    pub fn new(name: impl Into<String>, num_modes: usize, matrix: Array2<Complex64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(CircuitError::ValidationError(format!(
                "Gate matrix must be square, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            name: name.into(),
            num_modes,
            matrix,
        })
    }
}

impl Operator for GateMatrix {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Gate
    }

    fn num_modes(&self) -> usize {
        self.num_modes
    }

    fn matrix(&self, _cutoff_dim: usize) -> Option<Array2<Complex64>> {
        Some(self.matrix.clone())
    }
}

/// Single-mode rotation (phase-shift) gate
///
/// Diagonal in the Fock basis: `|n> -> e^{i n phi} |n>`.
#[derive(Clone, Copy, Debug)]
pub struct PhaseShift {
    phi: f64,
}

impl PhaseShift {
    /// Create a phase shift by angle `phi`
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }

    /// The rotation angle
    pub fn phi(&self) -> f64 {
        self.phi
    }
}

impl Operator for PhaseShift {
    fn name(&self) -> &str {
        "R"
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Gate
    }

    fn num_modes(&self) -> usize {
        1
    }

    fn matrix(&self, cutoff_dim: usize) -> Option<Array2<Complex64>> {
        let mut m = Array2::<Complex64>::zeros((cutoff_dim, cutoff_dim));
        for n in 0..cutoff_dim {
            m[[n, n]] = Complex64::from_polar(1.0, self.phi * n as f64);
        }
        Some(m)
    }
}

/// Single-mode Kerr gate
///
/// Diagonal in the Fock basis: `|n> -> e^{i kappa n^2} |n>`.
#[derive(Clone, Copy, Debug)]
pub struct Kerr {
    kappa: f64,
}

impl Kerr {
    /// Create a Kerr gate with interaction strength `kappa`
    pub fn new(kappa: f64) -> Self {
        Self { kappa }
    }

    /// The interaction strength
    pub fn kappa(&self) -> f64 {
        self.kappa
    }
}

impl Operator for Kerr {
    fn name(&self) -> &str {
        "Kerr"
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Gate
    }

    fn num_modes(&self) -> usize {
        1
    }

    fn matrix(&self, cutoff_dim: usize) -> Option<Array2<Complex64>> {
        let mut m = Array2::<Complex64>::zeros((cutoff_dim, cutoff_dim));
        for n in 0..cutoff_dim {
            m[[n, n]] = Complex64::from_polar(1.0, self.kappa * (n * n) as f64);
        }
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gate_matrix_rejects_non_square() {
        let m = Array2::<Complex64>::zeros((2, 3));
        assert!(GateMatrix::new("bad", 1, m).is_err());
    }

    #[test]
    fn test_phase_shift_matrix() {
        let gate = PhaseShift::new(std::f64::consts::PI);
        let m = gate.matrix(3).unwrap();
        assert_relative_eq!(m[[0, 0]].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[[1, 1]].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(m[[2, 2]].re, 1.0, epsilon = 1e-12);
        assert_eq!(m[[0, 1]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_kerr_matrix() {
        let gate = Kerr::new(0.5);
        let m = gate.matrix(3).unwrap();
        // n = 2: phase = 0.5 * 4 = 2.0
        assert_relative_eq!(m[[2, 2]].arg(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(m[[2, 2]].norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gates_are_gate_kind() {
        assert_eq!(PhaseShift::new(0.1).kind(), OperatorKind::Gate);
        assert_eq!(Kerr::new(0.1).kind(), OperatorKind::Gate);
    }
}
