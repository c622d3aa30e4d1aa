//! Dense Fock-basis simulator

use crate::backend::{ExecutionBackend, SessionConfig, SimulationOutput};
use crate::{BackendError, FockState, Result};
use qumodes_core::{Operation, OperatorKind, Program};

/// Default ceiling on state-tensor elements (about 64M complex entries)
pub const DEFAULT_MAX_ELEMENTS: u128 = 1 << 26;

/// Dense state-vector / density-tensor simulator over a truncated Fock basis
///
/// Each run starts from the vacuum and executes the program's operations in
/// order. Gates contract their matrix into the state tensor, channels apply
/// their Kraus sum (promoting a pure state to a density tensor), and a
/// preparation replaces the register state outright.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use qumodes_core::ops::PhaseShift;
/// use qumodes_core::{ModeId, Program};
/// use qumodes_fock::{ExecutionBackend, FockBackend, SessionConfig};
///
/// let mut program = Program::new(1);
/// program.apply(Arc::new(PhaseShift::new(0.3)), &[ModeId::new(0)]).unwrap();
///
/// let backend = FockBackend::new();
/// let mut session = backend.begin(&SessionConfig::pure(1, 5)).unwrap();
/// let output = backend.run(&mut session, &program).unwrap();
/// assert!(output.is_pure());
/// ```
#[derive(Clone, Debug)]
pub struct FockBackend {
    max_elements: u128,
}

impl FockBackend {
    pub fn new() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }

    /// Set the ceiling on state-tensor elements
    pub fn with_max_elements(mut self, max_elements: u128) -> Self {
        self.max_elements = max_elements;
        self
    }

    fn check_elements(&self, required: u128) -> Result<()> {
        if required > self.max_elements {
            return Err(BackendError::ResourceExhausted {
                required,
                limit: self.max_elements,
            });
        }
        Ok(())
    }

    fn apply_operation(
        &self,
        state: &mut FockState,
        operation: &Operation,
        config: &SessionConfig,
    ) -> Result<()> {
        let d = config.cutoff_dim;
        let operator = operation.operator();
        let modes: Vec<usize> = operation.modes().iter().map(|m| m.index()).collect();

        match operation.kind() {
            OperatorKind::Gate => {
                let matrix = operator.matrix(d).ok_or_else(|| BackendError::MissingNumeric {
                    operator: operator.name().to_string(),
                    kind: operation.kind().to_string(),
                })?;
                let dk = d.pow(modes.len() as u32);
                if matrix.dim() != (dk, dk) {
                    return Err(BackendError::DimensionMismatch {
                        operator: operator.name().to_string(),
                        expected: dk,
                        actual: matrix.dim().0,
                    });
                }
                state.apply_gate(&matrix, &modes, d)
            }
            OperatorKind::Channel => {
                let kraus = operator.kraus_operators(d).ok_or_else(|| {
                    BackendError::MissingNumeric {
                        operator: operator.name().to_string(),
                        kind: operation.kind().to_string(),
                    }
                })?;
                let dk = d.pow(modes.len() as u32);
                for k in &kraus {
                    if k.dim() != (dk, dk) {
                        return Err(BackendError::DimensionMismatch {
                            operator: operator.name().to_string(),
                            expected: dk,
                            actual: k.dim().0,
                        });
                    }
                }
                if state.is_pure() {
                    // Promotion squares the tensor size.
                    let mixed = (d as u128).saturating_pow(2 * config.num_modes as u32);
                    self.check_elements(mixed)?;
                }
                state.apply_channel(&kraus, &modes, d)
            }
            OperatorKind::Preparation => {
                let ket = operator.ket(d).ok_or_else(|| BackendError::MissingNumeric {
                    operator: operator.name().to_string(),
                    kind: operation.kind().to_string(),
                })?;
                let in_register_order = modes.len() == config.num_modes
                    && modes.iter().enumerate().all(|(i, &m)| i == m);
                if !in_register_order {
                    return Err(BackendError::UnsupportedPreparation(
                        operator.name().to_string(),
                    ));
                }
                if ket.ndim() != config.num_modes || ket.shape().iter().any(|&s| s != d) {
                    return Err(BackendError::DimensionMismatch {
                        operator: operator.name().to_string(),
                        expected: d,
                        actual: ket.shape().first().copied().unwrap_or(0),
                    });
                }
                *state = FockState::Pure(ket);
                if !config.pure {
                    state.promote_to_mixed()?;
                }
                Ok(())
            }
        }
    }
}

impl Default for FockBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one simulation session
#[derive(Clone, Debug)]
pub struct FockSession {
    config: SessionConfig,
}

impl FockSession {
    /// The configuration this session was begun with
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl ExecutionBackend for FockBackend {
    type Session = FockSession;

    fn begin(&self, config: &SessionConfig) -> Result<FockSession> {
        config.validate()?;
        self.check_elements(config.state_elements())?;
        Ok(FockSession {
            config: config.clone(),
        })
    }

    fn run(&self, session: &mut FockSession, program: &Program) -> Result<SimulationOutput> {
        let config = &session.config;
        if program.num_modes() != config.num_modes {
            return Err(BackendError::ModeCountMismatch {
                program: program.num_modes(),
                session: config.num_modes,
            });
        }

        let mut state = FockState::vacuum(config.num_modes, config.cutoff_dim, config.pure);
        for operation in program.operations() {
            self.apply_operation(&mut state, operation, config)?;
        }
        Ok(SimulationOutput::new(state, config.cutoff_dim))
    }
}
