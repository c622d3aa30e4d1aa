//! Index-vectorization codec for density tensors
//!
//! A density tensor over `2N` modes carries `4N` axes of dimension `D`
//! (interleaved ket/bra pairs per mode). Vectorization regroups those into
//! four composite axes of dimension `D^N` so that the Choi, Liouville and
//! Kraus reshuffles become plain rank-4 axis permutations.

use crate::{ExtractError, Result};
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use num_complex::Complex64;

/// Copy of `t` with its axes permuted so output axis `i` is input axis
/// `perm[i]`, in standard layout
pub(crate) fn permuted(t: &ArrayD<Complex64>, perm: &[usize]) -> ArrayD<Complex64> {
    t.view().permuted_axes(IxDyn(perm)).to_owned()
}

/// Row-major reinterpretation of `t` under a new shape
pub(crate) fn reshaped(t: &ArrayD<Complex64>, shape: &[usize]) -> Result<ArrayD<Complex64>> {
    let data: Vec<Complex64> = t.iter().copied().collect();
    ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|e| ExtractError::Shape(e.to_string()))
}

fn equal_axis_dim(t: &ArrayViewD<'_, Complex64>) -> Result<usize> {
    let shape = t.shape();
    let d = shape[0];
    if shape.iter().any(|&s| s != d) {
        return Err(ExtractError::UnequalAxes);
    }
    Ok(d)
}

/// Regroup a rank-`4N` tensor into four composite axes of dimension `D^N`
///
/// Even-numbered axes keep their relative order and form the first composite
/// index of each half; odd-numbered axes form the second. For a density
/// tensor the result reads (left-ket, left-bra, right-ket, right-bra), where
/// "left" covers the first half of the mode register.
///
/// The input is not modified.
///
/// # Errors
/// [`ExtractError::AxesNotMultipleOfFour`] unless the rank is a positive
/// multiple of four, [`ExtractError::UnequalAxes`] unless all axes share one
/// dimension.
pub fn vectorize(tensor: &ArrayD<Complex64>) -> Result<ArrayD<Complex64>> {
    let dims = tensor.ndim();
    if dims == 0 || dims % 4 != 0 {
        return Err(ExtractError::AxesNotMultipleOfFour(dims));
    }
    let d = equal_axis_dim(&tensor.view())?;
    let p = d.pow((dims / 4) as u32);

    // Group even axes ahead of odd axes, preserving relative order.
    let mut perm: Vec<usize> = (0..dims).step_by(2).collect();
    perm.extend((1..dims).step_by(2));
    let grouped = permuted(tensor, &perm);

    // Halve each group into composite indices, then swap the middle axes.
    let squares = reshaped(&grouped, &[p, p, p, p])?;
    Ok(permuted(&squares, &[0, 2, 1, 3]))
}

/// Exact inverse of [`vectorize`]
///
/// `num_modes` is the `N` the composite axes were built with; the per-mode
/// dimension is recovered as the `N`-th root of the axis size.
///
/// # Errors
/// [`ExtractError::NotRankFour`] unless the tensor has exactly four axes,
/// [`ExtractError::UnequalAxes`] unless they share one dimension,
/// [`ExtractError::InexactRoot`] if that dimension is not an exact
/// `num_modes`-th power.
pub fn unvectorize(tensor: &ArrayD<Complex64>, num_modes: usize) -> Result<ArrayD<Complex64>> {
    if tensor.ndim() != 4 {
        return Err(ExtractError::NotRankFour(tensor.ndim()));
    }
    let p = equal_axis_dim(&tensor.view())?;
    let d = exact_root(p, num_modes)?;
    let n2 = 2 * num_modes;

    let swapped = permuted(tensor, &[0, 2, 1, 3]);
    let split = reshaped(&swapped, &vec![d; 2 * n2])?;

    // Undo the even/odd grouping: output axis 2k is group-one axis k, output
    // axis 2k+1 is group-two axis k.
    let mut perm = Vec::with_capacity(2 * n2);
    for k in 0..n2 {
        perm.push(k);
        perm.push(n2 + k);
    }
    Ok(permuted(&split, &perm))
}

/// The integer `d` with `d^num_modes == size`, if one exists
fn exact_root(size: usize, num_modes: usize) -> Result<usize> {
    let inexact = || ExtractError::InexactRoot { size, num_modes };
    if num_modes == 0 || size == 0 {
        return Err(inexact());
    }
    let d = (size as f64).powf(1.0 / num_modes as f64).round() as usize;
    for candidate in d.saturating_sub(1)..=d + 1 {
        if candidate.checked_pow(num_modes as u32) == Some(size) {
            return Ok(candidate);
        }
    }
    Err(inexact())
}
