//! Non-unitary channel operators

use crate::operator::{Operator, OperatorKind};
use crate::{CircuitError, Result};
use ndarray::Array2;
use num_complex::Complex64;

/// A channel defined by an explicit list of Kraus operators
///
/// The channel transforms a density operator as `rho -> sum_i K_i rho K_i^d`.
/// Operators must all be square and share one dimension; the truncation they
/// were built for is fixed at construction time.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use qumodes_core::ops::KrausChannel;
///
/// let p: f64 = 0.25;
/// let k0 = Array2::from_diag_elem(2, Complex64::new((1.0 - p).sqrt(), 0.0));
/// let mut k1 = Array2::from_diag_elem(2, Complex64::new(p.sqrt(), 0.0));
/// k1[[1, 1]] = -k1[[1, 1]];
/// let dephasing = KrausChannel::new("PhaseDamp", 1, vec![k0, k1]).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct KrausChannel {
    name: String,
    num_modes: usize,
    operators: Vec<Array2<Complex64>>,
}

impl KrausChannel {
    /// Create a channel from its Kraus operators
    ///
    /// # Errors
    /// Returns error if the list is empty, any operator is not square, or
    /// the operators do not share one dimension.
    pub fn new(
        name: impl Into<String>,
        num_modes: usize,
        operators: Vec<Array2<Complex64>>,
    ) -> Result<Self> {
        let name = name.into();
        let first = operators
            .first()
            .ok_or_else(|| {
                CircuitError::ValidationError(format!(
                    "Channel '{}' needs at least one Kraus operator",
                    name
                ))
            })?
            .dim();

        for op in &operators {
            let (rows, cols) = op.dim();
            if rows != cols || (rows, cols) != first {
                return Err(CircuitError::ValidationError(format!(
                    "Kraus operators of '{}' must all be square with equal dimension, got {}x{} vs {}x{}",
                    name, rows, cols, first.0, first.1
                )));
            }
        }

        Ok(Self {
            name,
            num_modes,
            operators,
        })
    }

    /// Number of Kraus operators
    pub fn num_operators(&self) -> usize {
        self.operators.len()
    }
}

impl Operator for KrausChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Channel
    }

    fn num_modes(&self) -> usize {
        self.num_modes
    }

    fn kraus_operators(&self, _cutoff_dim: usize) -> Option<Vec<Array2<Complex64>>> {
        Some(self.operators.clone())
    }
}

/// Single-mode bosonic loss channel
///
/// Couples the mode to an empty environment with transmissivity `T`. In the
/// truncated Fock basis the Kraus operators are
/// `E_k[n-k, n] = sqrt(C(n, k) T^(n-k) (1-T)^k)` for `k = 0..D-1`.
#[derive(Clone, Copy, Debug)]
pub struct LossChannel {
    transmissivity: f64,
}

impl LossChannel {
    /// Create a loss channel
    ///
    /// # Errors
    /// Returns error if the transmissivity is not in [0, 1].
    pub fn new(transmissivity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&transmissivity) {
            return Err(CircuitError::ValidationError(format!(
                "Transmissivity must be in [0,1], got {}",
                transmissivity
            )));
        }
        Ok(Self { transmissivity })
    }

    /// The transmissivity
    pub fn transmissivity(&self) -> f64 {
        self.transmissivity
    }
}

fn binomial(n: usize, k: usize) -> f64 {
    let mut acc = 1.0;
    for i in 0..k {
        acc *= (n - i) as f64 / (k - i) as f64;
    }
    acc
}

impl Operator for LossChannel {
    fn name(&self) -> &str {
        "Loss"
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Channel
    }

    fn num_modes(&self) -> usize {
        1
    }

    fn kraus_operators(&self, cutoff_dim: usize) -> Option<Vec<Array2<Complex64>>> {
        let t = self.transmissivity;
        let mut operators = Vec::with_capacity(cutoff_dim);
        for k in 0..cutoff_dim {
            let mut e = Array2::<Complex64>::zeros((cutoff_dim, cutoff_dim));
            for n in k..cutoff_dim {
                let amp = (binomial(n, k) * t.powi((n - k) as i32) * (1.0 - t).powi(k as i32)).sqrt();
                e[[n - k, n]] = Complex64::new(amp, 0.0);
            }
            operators.push(e);
        }
        Some(operators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kraus_channel_validation() {
        assert!(KrausChannel::new("empty", 1, vec![]).is_err());

        let k0 = Array2::<Complex64>::zeros((2, 2));
        let k1 = Array2::<Complex64>::zeros((3, 3));
        assert!(KrausChannel::new("mixed", 1, vec![k0, k1]).is_err());
    }

    #[test]
    fn test_kraus_channel_roundtrip() {
        let k0 = Array2::from_diag_elem(2, Complex64::new(1.0, 0.0));
        let channel = KrausChannel::new("id", 1, vec![k0.clone()]).unwrap();
        assert_eq!(channel.num_operators(), 1);
        assert_eq!(channel.kraus_operators(2).unwrap()[0], k0);
        assert_eq!(channel.kind(), OperatorKind::Channel);
    }

    #[test]
    fn test_loss_channel_bounds() {
        assert!(LossChannel::new(-0.1).is_err());
        assert!(LossChannel::new(1.1).is_err());
        assert!(LossChannel::new(0.5).is_ok());
    }

    #[test]
    fn test_loss_channel_completeness() {
        // sum_k E_k^d E_k = I on the truncated space
        let channel = LossChannel::new(0.7).unwrap();
        let d = 4;
        let ops = channel.kraus_operators(d).unwrap();
        assert_eq!(ops.len(), d);

        let mut sum = Array2::<Complex64>::zeros((d, d));
        for e in &ops {
            let adj = e.t().mapv(|x| x.conj());
            sum = sum + adj.dot(e);
        }
        for i in 0..d {
            for j in 0..d {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(sum[[i, j]].re, expected, epsilon = 1e-12);
                assert_relative_eq!(sum[[i, j]].im, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_loss_channel_identity_at_full_transmissivity() {
        let ops = LossChannel::new(1.0).unwrap().kraus_operators(3).unwrap();
        // Only E_0 survives and equals the identity
        assert_relative_eq!(ops[0][[0, 0]].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(ops[0][[2, 2]].re, 1.0, epsilon = 1e-12);
        for e in &ops[1..] {
            assert!(e.iter().all(|x| x.norm() < 1e-12));
        }
    }
}
