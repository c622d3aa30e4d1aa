//! Choi-Jamiolkowski circuit augmentation

use crate::Result;
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use qumodes_core::ops::Ket;
use qumodes_core::{ModeId, Operation, Program};
use std::sync::Arc;

/// The unnormalized maximally-correlated reference ket
///
/// Returns the `N`-fold tensor product of `D x D` identity matrices as a
/// rank-`2N` amplitude tensor with all row axes first and all column axes
/// second. Prepared over a `2N`-mode register, mode `k` is maximally
/// correlated with mode `N + k`.
///
/// The ket is deliberately not normalized; the extraction formulas rely on
/// the unit matrix elements.
pub fn interleaved_identity(num_modes: usize, cutoff_dim: usize) -> ArrayD<Complex64> {
    let n = num_modes;
    let d = cutoff_dim;
    let mut t = ArrayD::<Complex64>::zeros(vec![d; 2 * n]);

    let mut idx = vec![0usize; 2 * n];
    for mut flat in 0..d.pow(n as u32) {
        for k in (0..n).rev() {
            idx[k] = flat % d;
            idx[n + k] = flat % d;
            flat /= d;
        }
        t[IxDyn(&idx)] = Complex64::new(1.0, 0.0);
    }
    t
}

/// Double the register and prepend the correlated reference preparation
///
/// Clones the program, appends `N` fresh modes, and prepends a [`Ket`]
/// preparation of [`interleaved_identity`] over the full doubled register.
/// The original operations keep their order and still target the first `N`
/// modes. Returns the augmented program and `N`.
///
/// The caller's program is never modified.
pub fn augment_with_cj(program: &Program, cutoff_dim: usize) -> Result<(Program, usize)> {
    let n = program.num_modes();
    let mut augmented = program.clone();
    augmented.add_modes(n);

    let reference = Ket::new(interleaved_identity(n, cutoff_dim));
    let modes: Vec<ModeId> = (0..2 * n).map(ModeId::new).collect();
    augmented.prepend(Operation::new(Arc::new(reference), &modes)?);

    Ok((augmented, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qumodes_core::ops::PhaseShift;
    use qumodes_core::OperatorKind;

    #[test]
    fn test_interleaved_identity_one_mode() {
        let t = interleaved_identity(1, 3);
        assert_eq!(t.shape(), &[3, 3]);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(t[[i, j]].re, expected);
            }
        }
    }

    #[test]
    fn test_interleaved_identity_two_modes() {
        // Mode 0 pairs with mode 2, mode 1 with mode 3.
        let t = interleaved_identity(2, 2);
        assert_eq!(t.shape(), &[2, 2, 2, 2]);
        assert_eq!(t[[0, 1, 0, 1]].re, 1.0);
        assert_eq!(t[[1, 0, 1, 0]].re, 1.0);
        assert_eq!(t[[0, 1, 1, 0]].re, 0.0);
        assert_eq!(t[[1, 1, 0, 0]].re, 0.0);
    }

    #[test]
    fn test_interleaved_identity_norm() {
        // Unnormalized: squared norm is D^N, not 1.
        let t = interleaved_identity(2, 3);
        let norm_sq: f64 = t.iter().map(|x| x.norm_sqr()).sum();
        assert_eq!(norm_sq, 9.0);
    }

    #[test]
    fn test_augment_doubles_register() {
        let mut program = Program::new(2);
        program
            .apply(Arc::new(PhaseShift::new(0.1)), &[ModeId::new(1)])
            .unwrap();

        let (augmented, n) = augment_with_cj(&program, 3).unwrap();
        assert_eq!(n, 2);
        assert_eq!(augmented.num_modes(), 4);
        assert_eq!(augmented.len(), 2);

        let first = augmented.get_operation(0).unwrap();
        assert_eq!(first.kind(), OperatorKind::Preparation);
        assert_eq!(first.num_modes(), 4);

        let second = augmented.get_operation(1).unwrap();
        assert_eq!(second.modes(), &[ModeId::new(1)]);

        // Caller's program untouched
        assert_eq!(program.num_modes(), 2);
        assert_eq!(program.len(), 1);
    }
}
