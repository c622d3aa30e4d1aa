//! Pure and mixed truncated Fock states

use crate::{BackendError, Result};
use ndarray::{Array2, ArrayD, IxDyn};
use num_complex::Complex64;
use rayon::prelude::*;

/// A multi-mode quantum state in a truncated Fock basis
///
/// A pure state over `N` modes is an amplitude tensor with one axis of size
/// `D` per mode, in register order. A mixed state is a density tensor with
/// two axes per mode, interleaved: axis `2m` is the ket index and axis
/// `2m + 1` the bra index of mode `m`.
#[derive(Clone, Debug)]
pub enum FockState {
    /// Amplitude tensor, one axis per mode
    Pure(ArrayD<Complex64>),
    /// Density tensor, interleaved (ket, bra) axis pair per mode
    Mixed(ArrayD<Complex64>),
}

impl FockState {
    /// The vacuum state |0...0>
    pub fn vacuum(num_modes: usize, cutoff_dim: usize, pure: bool) -> Self {
        if pure {
            let mut t = ArrayD::<Complex64>::zeros(vec![cutoff_dim; num_modes]);
            t[IxDyn(&vec![0; num_modes])] = Complex64::new(1.0, 0.0);
            FockState::Pure(t)
        } else {
            let mut t = ArrayD::<Complex64>::zeros(vec![cutoff_dim; 2 * num_modes]);
            t[IxDyn(&vec![0; 2 * num_modes])] = Complex64::new(1.0, 0.0);
            FockState::Mixed(t)
        }
    }

    /// Whether the state is stored as a pure amplitude tensor
    pub fn is_pure(&self) -> bool {
        matches!(self, FockState::Pure(_))
    }

    /// Number of modes
    pub fn num_modes(&self) -> usize {
        match self {
            FockState::Pure(t) => t.ndim(),
            FockState::Mixed(t) => t.ndim() / 2,
        }
    }

    /// The amplitude tensor, if the state is pure
    pub fn ket(&self) -> Option<&ArrayD<Complex64>> {
        match self {
            FockState::Pure(t) => Some(t),
            FockState::Mixed(_) => None,
        }
    }

    /// The density tensor with interleaved (ket, bra) axis pairs
    ///
    /// For a pure state this forms the outer product `psi (x) conj(psi)`.
    pub fn dm(&self) -> Result<ArrayD<Complex64>> {
        match self {
            FockState::Pure(t) => dm_from_ket(t),
            FockState::Mixed(t) => Ok(t.clone()),
        }
    }

    /// Apply a `k`-mode gate matrix to the given modes
    ///
    /// `matrix` must be `D^k x D^k`. For a mixed state, the matrix acts on
    /// the ket axes and its conjugate on the bra axes.
    pub fn apply_gate(
        &mut self,
        matrix: &Array2<Complex64>,
        modes: &[usize],
        cutoff_dim: usize,
    ) -> Result<()> {
        match self {
            FockState::Pure(t) => {
                *t = contract_matrix(t, matrix, modes, cutoff_dim)?;
            }
            FockState::Mixed(t) => {
                let ket_axes: Vec<usize> = modes.iter().map(|&m| 2 * m).collect();
                let bra_axes: Vec<usize> = modes.iter().map(|&m| 2 * m + 1).collect();
                let conj = matrix.mapv(|x| x.conj());
                let applied = contract_matrix(t, matrix, &ket_axes, cutoff_dim)?;
                *t = contract_matrix(&applied, &conj, &bra_axes, cutoff_dim)?;
            }
        }
        Ok(())
    }

    /// Apply a channel given by Kraus operators to the given modes
    ///
    /// Promotes a pure state to a mixed one, then forms
    /// `sum_t K_t rho K_t^dagger`.
    pub fn apply_channel(
        &mut self,
        kraus: &[Array2<Complex64>],
        modes: &[usize],
        cutoff_dim: usize,
    ) -> Result<()> {
        self.promote_to_mixed()?;
        let rho = match self {
            FockState::Mixed(t) => t,
            FockState::Pure(_) => unreachable!("state was just promoted"),
        };

        let ket_axes: Vec<usize> = modes.iter().map(|&m| 2 * m).collect();
        let bra_axes: Vec<usize> = modes.iter().map(|&m| 2 * m + 1).collect();

        let mut sum = ArrayD::<Complex64>::zeros(rho.shape().to_vec());
        for k in kraus {
            let conj = k.mapv(|x| x.conj());
            let applied = contract_matrix(rho, k, &ket_axes, cutoff_dim)?;
            let applied = contract_matrix(&applied, &conj, &bra_axes, cutoff_dim)?;
            sum = sum + applied;
        }
        *rho = sum;
        Ok(())
    }

    /// Replace a pure state by the equivalent density tensor
    pub fn promote_to_mixed(&mut self) -> Result<()> {
        if let FockState::Pure(t) = self {
            *self = FockState::Mixed(dm_from_ket(t)?);
        }
        Ok(())
    }
}

/// Outer product `psi (x) conj(psi)` arranged with interleaved per-mode
/// (ket, bra) axis pairs
fn dm_from_ket(ket: &ArrayD<Complex64>) -> Result<ArrayD<Complex64>> {
    let num_modes = ket.ndim();
    let d = if num_modes > 0 { ket.shape()[0] } else { 1 };
    let len = ket.len();
    let flat: Vec<Complex64> = ket.iter().copied().collect();

    // Block layout first: all ket axes, then all bra axes.
    let outer: Vec<Complex64> = (0..len * len)
        .into_par_iter()
        .map(|idx| flat[idx / len] * flat[idx % len].conj())
        .collect();
    let block = ArrayD::from_shape_vec(vec![d; 2 * num_modes], outer)
        .map_err(|e| BackendError::Shape(e.to_string()))?;

    // Interleave: output axis 2m is ket_m, axis 2m + 1 is bra_m.
    let mut perm = Vec::with_capacity(2 * num_modes);
    for m in 0..num_modes {
        perm.push(m);
        perm.push(num_modes + m);
    }
    Ok(standardize(block.permuted_axes(IxDyn(&perm))))
}

/// Contract `matrix` rows against the listed tensor axes
///
/// The axes are moved to the front in the given order, flattened row-major,
/// multiplied through, and restored.
fn contract_matrix(
    tensor: &ArrayD<Complex64>,
    matrix: &Array2<Complex64>,
    axes: &[usize],
    cutoff_dim: usize,
) -> Result<ArrayD<Complex64>> {
    let ndim = tensor.ndim();
    let k = axes.len();
    let dk = cutoff_dim.pow(k as u32);
    if matrix.dim() != (dk, dk) {
        return Err(BackendError::Shape(format!(
            "matrix is {:?}, expected ({}, {})",
            matrix.dim(),
            dk,
            dk
        )));
    }

    let mut perm: Vec<usize> = axes.to_vec();
    perm.extend((0..ndim).filter(|a| !axes.contains(a)));

    let fronted: Vec<Complex64> = tensor
        .view()
        .permuted_axes(IxDyn(&perm))
        .iter()
        .copied()
        .collect();
    let rest = tensor.len() / dk;
    let fronted =
        Array2::from_shape_vec((dk, rest), fronted).map_err(|e| BackendError::Shape(e.to_string()))?;

    let out = matrix.dot(&fronted);
    let out: Vec<Complex64> = out.iter().copied().collect();
    let out = ArrayD::from_shape_vec(vec![cutoff_dim; ndim], out)
        .map_err(|e| BackendError::Shape(e.to_string()))?;

    let mut inverse = vec![0; ndim];
    for (i, &p) in perm.iter().enumerate() {
        inverse[p] = i;
    }
    Ok(standardize(out.permuted_axes(IxDyn(&inverse))))
}

/// Copy a permuted tensor into standard (row-major) layout
fn standardize(t: ArrayD<Complex64>) -> ArrayD<Complex64> {
    t.as_standard_layout().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    fn x_gate() -> Array2<Complex64> {
        Array2::from_shape_vec((2, 2), vec![c(0.0), c(1.0), c(1.0), c(0.0)]).unwrap()
    }

    #[test]
    fn test_vacuum_pure() {
        let state = FockState::vacuum(2, 3, true);
        let ket = state.ket().unwrap();
        assert_eq!(ket.ndim(), 2);
        assert_eq!(ket[[0, 0]], c(1.0));
        assert_eq!(ket[[1, 0]], c(0.0));
    }

    #[test]
    fn test_vacuum_mixed() {
        let state = FockState::vacuum(1, 2, false);
        assert!(!state.is_pure());
        let dm = state.dm().unwrap();
        assert_eq!(dm[[0, 0]], c(1.0));
        assert_eq!(dm[[1, 1]], c(0.0));
    }

    #[test]
    fn test_apply_gate_pure_single_mode() {
        let mut state = FockState::vacuum(2, 2, true);
        state.apply_gate(&x_gate(), &[1], 2).unwrap();
        let ket = state.ket().unwrap();
        assert_eq!(ket[[0, 1]], c(1.0));
        assert_eq!(ket[[0, 0]], c(0.0));
    }

    #[test]
    fn test_apply_gate_mixed() {
        let mut state = FockState::vacuum(1, 2, false);
        state.apply_gate(&x_gate(), &[0], 2).unwrap();
        let dm = state.dm().unwrap();
        assert_eq!(dm[[1, 1]], c(1.0));
        assert_eq!(dm[[0, 0]], c(0.0));
    }

    #[test]
    fn test_dm_from_ket_interleaving() {
        // Two modes: |psi> = |0,1>, so dm[i0,j0,i1,j1] = delta(i0,0) delta(j0,0) delta(i1,1) delta(j1,1)
        let mut state = FockState::vacuum(2, 2, true);
        state.apply_gate(&x_gate(), &[1], 2).unwrap();
        let dm = state.dm().unwrap();
        assert_eq!(dm.ndim(), 4);
        assert_eq!(dm[[0, 0, 1, 1]], c(1.0));
        assert_eq!(dm[[1, 1, 0, 0]], c(0.0));
    }

    #[test]
    fn test_apply_channel_dephasing() {
        // Full dephasing of |+> leaves a maximally mixed diagonal
        let plus = ArrayD::from_shape_vec(vec![2], vec![c(1.0 / 2f64.sqrt()); 2]).unwrap();
        let mut state = FockState::Pure(plus);

        let z = Array2::from_shape_vec((2, 2), vec![c(1.0), c(0.0), c(0.0), c(-1.0)]).unwrap();
        let id = Array2::from_diag_elem(2, c(1.0));
        let half = 0.5f64.sqrt();
        let kraus = vec![id.mapv(|x| x * half), z.mapv(|x| x * half)];

        state.apply_channel(&kraus, &[0], 2).unwrap();
        let dm = state.dm().unwrap();
        assert_relative_eq!(dm[[0, 0]].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(dm[[1, 1]].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(dm[[0, 1]].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_mode_gate_mode_order() {
        // A swap permutation matrix applied as (0, 1) vs (1, 0) must differ
        // on an asymmetric input state.
        let mut swap = Array2::<Complex64>::zeros((4, 4));
        // |ab> -> |ba> with row-major composite index a*2+b
        swap[[0, 0]] = c(1.0);
        swap[[1, 2]] = c(1.0);
        swap[[2, 1]] = c(1.0);
        swap[[3, 3]] = c(1.0);

        let mut state = FockState::vacuum(2, 2, true);
        state.apply_gate(&x_gate(), &[1], 2).unwrap(); // |01>
        state.apply_gate(&swap, &[0, 1], 2).unwrap();
        let ket = state.ket().unwrap();
        assert_eq!(ket[[1, 0]], c(1.0));
    }

    #[test]
    fn test_contract_matrix_bad_dimension() {
        let state = ArrayD::<Complex64>::zeros(vec![2, 2]);
        let m = Array2::<Complex64>::zeros((3, 3));
        assert!(contract_matrix(&state, &m, &[0], 2).is_err());
    }
}
