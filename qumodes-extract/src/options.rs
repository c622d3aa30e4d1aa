//! Tunables for the extraction routines

use qumodes_core::HBAR_DEFAULT;

/// Default ceiling on requested tensor elements
pub const DEFAULT_MAX_TENSOR_ELEMENTS: u128 = 1 << 26;

/// Default absolute cutoff below which Kraus eigenpairs are discarded
pub const DEFAULT_KRAUS_TOLERANCE: f64 = 1e-8;

/// Options shared by the unitary and channel extractors
///
/// # Example
/// ```
/// use qumodes_extract::ExtractOptions;
///
/// let options = ExtractOptions::default().with_kraus_tolerance(1e-6);
/// assert_eq!(options.kraus_tolerance, 1e-6);
/// assert_eq!(options.hbar, 2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ExtractOptions {
    /// Value of hbar passed through to the simulation session
    pub hbar: f64,
    /// Eigenpairs with |lambda| at or below this are dropped from the Kraus set
    pub kraus_tolerance: f64,
    /// Largest tensor, in elements, an extraction is allowed to request
    pub max_tensor_elements: u128,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            hbar: HBAR_DEFAULT,
            kraus_tolerance: DEFAULT_KRAUS_TOLERANCE,
            max_tensor_elements: DEFAULT_MAX_TENSOR_ELEMENTS,
        }
    }
}

impl ExtractOptions {
    /// Set a non-default hbar
    pub fn with_hbar(mut self, hbar: f64) -> Self {
        self.hbar = hbar;
        self
    }

    /// Set the Kraus eigenvalue cutoff
    pub fn with_kraus_tolerance(mut self, tolerance: f64) -> Self {
        self.kraus_tolerance = tolerance;
        self
    }

    /// Set the tensor-element ceiling
    pub fn with_max_tensor_elements(mut self, ceiling: u128) -> Self {
        self.max_tensor_elements = ceiling;
        self
    }
}
