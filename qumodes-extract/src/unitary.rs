//! Unitary-matrix extraction via the Choi-Jamiolkowski trick

use crate::cj::augment_with_cj;
use crate::classify::is_unitary;
use crate::vectorize::{permuted, reshaped};
use crate::{ExtractError, ExtractOptions, Result};
use ndarray::ArrayD;
use num_complex::Complex64;
use qumodes_core::Program;
use qumodes_fock::{ExecutionBackend, SessionConfig};

/// Extract the truncated unitary matrix of a gates-only program
///
/// Doubles the register, prepares the maximally-correlated reference ket and
/// simulates the program once; the final amplitudes are exactly the matrix
/// elements of the program's unitary at the given truncation.
///
/// With `vectorize_modes = true` the result is a `D^N x D^N` matrix whose
/// composite row index is the output and composite column index the input.
/// With `false` it is a rank-`2N` tensor with one (output, input) axis pair
/// per mode, in mode order.
///
/// # Errors
/// [`ExtractError::NotUnitary`] if any queued operator is not a gate,
/// checked before the backend is touched; [`ExtractError::ResourceLimit`] if
/// the doubled register would exceed the element ceiling.
///
/// # Example
/// ```
/// use qumodes_extract::extract_unitary;
/// use qumodes_fock::FockBackend;
/// use qumodes_core::Program;
///
/// // The empty program is the identity.
/// let u = extract_unitary(&FockBackend::new(), &Program::new(1), 2, true).unwrap();
/// assert_eq!(u[[0, 0]].re, 1.0);
/// assert_eq!(u[[1, 0]].re, 0.0);
/// ```
pub fn extract_unitary<B: ExecutionBackend>(
    backend: &B,
    program: &Program,
    cutoff_dim: usize,
    vectorize_modes: bool,
) -> Result<ArrayD<Complex64>> {
    extract_unitary_with(
        backend,
        program,
        cutoff_dim,
        vectorize_modes,
        &ExtractOptions::default(),
    )
}

/// [`extract_unitary`] with explicit [`ExtractOptions`]
pub fn extract_unitary_with<B: ExecutionBackend>(
    backend: &B,
    program: &Program,
    cutoff_dim: usize,
    vectorize_modes: bool,
    options: &ExtractOptions,
) -> Result<ArrayD<Complex64>> {
    if !is_unitary(program) {
        return Err(ExtractError::NotUnitary);
    }

    let n = program.num_modes();
    let required = (cutoff_dim as u128).saturating_pow(2 * n as u32);
    if required > options.max_tensor_elements {
        return Err(ExtractError::ResourceLimit {
            required,
            limit: options.max_tensor_elements,
        });
    }

    let (augmented, _) = augment_with_cj(program, cutoff_dim)?;
    let config = SessionConfig::pure(2 * n, cutoff_dim).with_hbar(options.hbar);
    let mut session = backend.begin(&config)?;
    let output = backend.run(&mut session, &augmented)?;

    // First N axes are output legs, last N are input legs.
    let ket = output.ket()?;
    let p = cutoff_dim.pow(n as u32);
    if vectorize_modes {
        reshaped(ket, &[p, p])
    } else {
        let mut perm = Vec::with_capacity(2 * n);
        for k in 0..n {
            perm.push(k);
            perm.push(n + k);
        }
        Ok(permuted(ket, &perm))
    }
}
