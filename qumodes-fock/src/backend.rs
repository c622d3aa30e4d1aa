//! Backend abstraction for executing qumode programs

use crate::{BackendError, FockState, Result};
use ndarray::ArrayD;
use num_complex::Complex64;
use qumodes_core::{Program, HBAR_DEFAULT};

/// Configuration for one simulation session
///
/// Fixes the register size, the Fock-space truncation and whether the
/// session tracks a pure amplitude tensor or a density tensor.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Number of modes in the register
    pub num_modes: usize,
    /// Fock-space truncation per mode
    pub cutoff_dim: usize,
    /// Value of hbar in the chosen convention
    pub hbar: f64,
    /// Track a pure state rather than a density tensor
    pub pure: bool,
}

impl SessionConfig {
    /// Configuration for a pure-state session with the default hbar
    pub fn pure(num_modes: usize, cutoff_dim: usize) -> Self {
        Self {
            num_modes,
            cutoff_dim,
            hbar: HBAR_DEFAULT,
            pure: true,
        }
    }

    /// Configuration for a density-tensor session with the default hbar
    pub fn mixed(num_modes: usize, cutoff_dim: usize) -> Self {
        Self {
            num_modes,
            cutoff_dim,
            hbar: HBAR_DEFAULT,
            pure: false,
        }
    }

    /// Set a non-default hbar
    pub fn with_hbar(mut self, hbar: f64) -> Self {
        self.hbar = hbar;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.num_modes == 0 {
            return Err(BackendError::InvalidConfig(
                "session needs at least one mode".into(),
            ));
        }
        if self.cutoff_dim < 2 {
            return Err(BackendError::InvalidConfig(format!(
                "cutoff dimension must be at least 2, got {}",
                self.cutoff_dim
            )));
        }
        if !(self.hbar.is_finite() && self.hbar > 0.0) {
            return Err(BackendError::InvalidConfig(format!(
                "hbar must be positive and finite, got {}",
                self.hbar
            )));
        }
        Ok(())
    }

    /// Elements held by the state tensor under this configuration
    pub(crate) fn state_elements(&self) -> u128 {
        let axes = if self.pure {
            self.num_modes
        } else {
            2 * self.num_modes
        };
        (self.cutoff_dim as u128).saturating_pow(axes as u32)
    }
}

/// Final state of a completed simulation
#[derive(Clone, Debug)]
pub struct SimulationOutput {
    state: FockState,
    cutoff_dim: usize,
}

impl SimulationOutput {
    /// Wrap a final state; also used by alternative backend implementations
    pub fn new(state: FockState, cutoff_dim: usize) -> Self {
        Self { state, cutoff_dim }
    }

    /// The amplitude tensor, one axis of size `cutoff_dim` per mode
    ///
    /// # Errors
    /// Returns [`BackendError::NotPure`] if the state is a density tensor.
    pub fn ket(&self) -> Result<&ArrayD<Complex64>> {
        self.state.ket().ok_or(BackendError::NotPure)
    }

    /// The density tensor with interleaved (ket, bra) axis pairs
    ///
    /// A pure state is converted to its outer product.
    pub fn dm(&self) -> Result<ArrayD<Complex64>> {
        self.state.dm()
    }

    /// Whether the final state is stored as a pure amplitude tensor
    pub fn is_pure(&self) -> bool {
        self.state.is_pure()
    }

    /// Fock-space truncation the state was simulated at
    pub fn cutoff_dim(&self) -> usize {
        self.cutoff_dim
    }
}

/// A backend that can execute qumode programs
///
/// Splitting session creation from execution lets one backend value run
/// several programs against independently configured registers.
pub trait ExecutionBackend {
    /// Per-run state owned by the caller
    type Session;

    /// Open a session for the given register configuration
    fn begin(&self, config: &SessionConfig) -> Result<Self::Session>;

    /// Execute a program against the session and return the final state
    fn run(&self, session: &mut Self::Session, program: &Program) -> Result<SimulationOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(SessionConfig::pure(0, 3).validate().is_err());
        assert!(SessionConfig::pure(1, 1).validate().is_err());
        assert!(SessionConfig::pure(1, 3).with_hbar(-1.0).validate().is_err());
        assert!(SessionConfig::pure(1, 3).validate().is_ok());
    }

    #[test]
    fn test_state_elements() {
        assert_eq!(SessionConfig::pure(3, 4).state_elements(), 64);
        assert_eq!(SessionConfig::mixed(3, 4).state_elements(), 4096);
    }

    #[test]
    fn test_output_not_pure() {
        let state = FockState::vacuum(1, 2, false);
        let output = SimulationOutput::new(state, 2);
        assert!(!output.is_pure());
        assert!(matches!(output.ket(), Err(BackendError::NotPure)));
        assert!(output.dm().is_ok());
    }
}
