//! Channel-representation extraction via the Choi-Jamiolkowski trick

use crate::cj::augment_with_cj;
use crate::classify::is_channel;
use crate::vectorize::{permuted, reshaped, unvectorize, vectorize};
use crate::{ExtractError, ExtractOptions, Result};
use faer::complex_native::c64;
use faer::{Mat, Side};
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use qumodes_core::Program;
use qumodes_fock::{ExecutionBackend, SessionConfig};
use std::fmt;
use std::str::FromStr;

/// The channel representations the extractor can produce
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Representation {
    /// Rank-4 Choi tensor; the first composite index pair contracts the
    /// input density matrix
    Choi,
    /// Rank-4 Liouville superoperator tensor; separable for unitary circuits
    Liouville,
    /// Kraus operators stacked along a leading axis
    Kraus,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Choi => write!(f, "choi"),
            Representation::Liouville => write!(f, "liouville"),
            Representation::Kraus => write!(f, "kraus"),
        }
    }
}

impl FromStr for Representation {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "choi" => Ok(Representation::Choi),
            "liouville" => Ok(Representation::Liouville),
            "kraus" => Ok(Representation::Kraus),
            other => Err(ExtractError::UnknownRepresentation(other.to_string())),
        }
    }
}

/// Extract a channel representation of a program of gates and channels
///
/// Doubles the register, prepares the maximally-correlated reference ket,
/// simulates once and reshuffles the final density tensor into the requested
/// representation. Since the reference ket is unnormalized, the Choi tensor
/// of the identity channel has unit matrix elements rather than `1/D^N`.
///
/// With `vectorize_modes = true` the Choi and Liouville results are rank-4
/// tensors over composite `D^N` indices and the Kraus result is a stack of
/// `D^N x D^N` matrices. With `false` every composite index is expanded back
/// into per-mode axes.
///
/// # Errors
/// [`ExtractError::NotChannel`] if any queued operator is a preparation,
/// checked before the backend is touched; [`ExtractError::ResourceLimit`] if
/// the doubled register's density tensor would exceed the element ceiling.
///
/// # Example
/// ```
/// use qumodes_extract::{extract_channel, Representation};
/// use qumodes_fock::FockBackend;
/// use qumodes_core::Program;
///
/// let choi = extract_channel(
///     &FockBackend::new(),
///     &Program::new(1),
///     2,
///     Representation::Choi,
///     true,
/// )
/// .unwrap();
/// assert_eq!(choi.shape(), &[2, 2, 2, 2]);
/// ```
pub fn extract_channel<B: ExecutionBackend>(
    backend: &B,
    program: &Program,
    cutoff_dim: usize,
    representation: Representation,
    vectorize_modes: bool,
) -> Result<ArrayD<Complex64>> {
    extract_channel_with(
        backend,
        program,
        cutoff_dim,
        representation,
        vectorize_modes,
        &ExtractOptions::default(),
    )
}

/// [`extract_channel`] with explicit [`ExtractOptions`]
pub fn extract_channel_with<B: ExecutionBackend>(
    backend: &B,
    program: &Program,
    cutoff_dim: usize,
    representation: Representation,
    vectorize_modes: bool,
    options: &ExtractOptions,
) -> Result<ArrayD<Complex64>> {
    if !is_channel(program) {
        return Err(ExtractError::NotChannel);
    }

    let n = program.num_modes();
    let required = (cutoff_dim as u128).saturating_pow(4 * n as u32);
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

    let dm = output.dm()?;
    let vectorized = vectorize(&dm)?;
    // (left-ket, left-bra, right-ket, right-bra) -> Choi index order, where
    // rho_out[k, l] = sum_{i, j} rho_in[i, j] choi[i, j, k, l].
    let choi = permuted(&vectorized, &[2, 3, 0, 1]);

    match representation {
        Representation::Choi => {
            if vectorize_modes {
                Ok(choi)
            } else {
                unvectorize(&choi, n)
            }
        }
        Representation::Liouville => {
            let liouville = permuted(&choi, &[3, 1, 2, 0]);
            if vectorize_modes {
                Ok(liouville)
            } else {
                unvectorize(&liouville, n)
            }
        }
        Representation::Kraus => kraus_from_choi(&choi, n, cutoff_dim, vectorize_modes, options),
    }
}

/// Decompose a Choi tensor into Kraus operators
///
/// Reshuffling the Choi tensor gives the Hermitian positive-semidefinite
/// matrix `sum_t vec(K_t) vec(K_t)^dagger`; its nonzero eigenpairs are the
/// Kraus operators up to a phase.
fn kraus_from_choi(
    choi: &ArrayD<Complex64>,
    num_modes: usize,
    cutoff_dim: usize,
    vectorize_modes: bool,
    options: &ExtractOptions,
) -> Result<ArrayD<Complex64>> {
    let p = cutoff_dim.pow(num_modes as u32);
    let p2 = p * p;

    let shuffled = permuted(choi, &[2, 0, 3, 1]);
    let gram = reshaped(&shuffled, &[p2, p2])?;

    let mat = Mat::<c64>::from_fn(p2, p2, |i, j| {
        let z = gram[[i, j]];
        c64::new(z.re, z.im)
    });
    let eigen = mat.selfadjoint_eigendecomposition(Side::Lower);
    let values = eigen.s();
    let vectors = eigen.u();

    // Eigenvalues below the tolerance carry no weight; negative ones past
    // roundoff only arise for non-completely-positive maps and are dropped
    // with the rest.
    let mut data = Vec::new();
    let mut count = 0;
    for t in 0..p2 {
        let lambda = values.column_vector().read(t).re;
        if lambda <= options.kraus_tolerance {
            continue;
        }
        let scale = lambda.sqrt();
        for i in 0..p2 {
            let z = vectors.read(i, t);
            data.push(Complex64::new(z.re, z.im) * scale);
        }
        count += 1;
    }

    let stacked = ArrayD::from_shape_vec(IxDyn(&[count, p, p]), data)
        .map_err(|e| ExtractError::Shape(e.to_string()))?;
    if vectorize_modes {
        return Ok(stacked);
    }

    // Expand each operator into interleaved per-mode (output, input) pairs,
    // keeping the operator axis in front.
    let n = num_modes;
    let mut shape = vec![count];
    shape.extend(std::iter::repeat(cutoff_dim).take(2 * n));
    let split = reshaped(&stacked, &shape)?;

    let mut perm = Vec::with_capacity(1 + 2 * n);
    perm.push(0);
    for k in 0..n {
        perm.push(1 + k);
        perm.push(1 + n + k);
    }
    Ok(permuted(&split, &perm))
}
