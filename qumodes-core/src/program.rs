//! Qumode circuit representation

use crate::operator::Operation;
use crate::{CircuitError, ModeId, Operator, Result};
use std::sync::Arc;

/// A queued qumode circuit
///
/// Contains an ordered mode register and a sequence of operations applied to
/// it. The queue order is the application order: the first record is applied
/// first. Existing records are never reordered; the only structural edits are
/// appending operations, appending fresh modes, and prepending a single
/// operation (used by the Choi-Jamiolkowski augmentation).
///
/// # Example
/// ```
/// use qumodes_core::Program;
///
/// let program = Program::new(3);
/// assert_eq!(program.num_modes(), 3);
/// assert_eq!(program.len(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Program {
    modes: Vec<ModeId>,
    operations: Vec<Operation>,
}

impl Program {
    /// Create a new program over the specified number of modes
    ///
    /// # Panics
    /// Panics if `num_modes` is 0
    pub fn new(num_modes: usize) -> Self {
        assert!(num_modes > 0, "Program must have at least one mode");
        Self {
            modes: (0..num_modes).map(ModeId::new).collect(),
            operations: Vec::new(),
        }
    }

    /// Get the number of modes in the register
    #[inline]
    pub fn num_modes(&self) -> usize {
        self.modes.len()
    }

    /// Get the ordered mode register
    #[inline]
    pub fn modes(&self) -> &[ModeId] {
        &self.modes
    }

    /// Get the number of queued operations
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Queue an operator on the given modes
    ///
    /// # Errors
    /// Returns error if any mode index is out of bounds, the mode count does
    /// not match the operator arity, or a mode is repeated.
    ///
    /// # Example
    /// ```
    /// use qumodes_core::{ops::PhaseShift, ModeId, Program};
    /// use std::sync::Arc;
    ///
    /// let mut program = Program::new(2);
    /// program.apply(Arc::new(PhaseShift::new(0.3)), &[ModeId::new(0)]).unwrap();
    /// assert_eq!(program.len(), 1);
    /// ```
    pub fn apply(&mut self, operator: Arc<dyn Operator>, modes: &[ModeId]) -> Result<()> {
        for &mode in modes {
            if mode.index() >= self.num_modes() {
                return Err(CircuitError::invalid_mode(mode.index(), self.num_modes()));
            }
        }

        let operation = Operation::new(operator, modes)?;
        self.operations.push(operation);
        Ok(())
    }

    /// Get an iterator over the queued operations
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Get a specific operation by queue position
    pub fn get_operation(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Append `count` fresh modes to the register
    ///
    /// The new modes receive the next consecutive indices; existing mode
    /// identities are untouched. Returns the slice of newly added modes.
    pub fn add_modes(&mut self, count: usize) -> &[ModeId] {
        let start = self.modes.len();
        self.modes.extend((start..start + count).map(ModeId::new));
        &self.modes[start..]
    }

    /// Prepend one operation to the queue
    ///
    /// All previously queued operations keep their relative order. The
    /// operation must already reference valid modes.
    pub fn prepend(&mut self, operation: Operation) {
        self.operations.insert(0, operation);
    }

    /// Validate the program
    ///
    /// Checks that all queued operations reference in-range modes.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            for &mode in op.modes() {
                if mode.index() >= self.num_modes() {
                    return Err(CircuitError::ValidationError(format!(
                        "Operation {} uses invalid mode {}",
                        i, mode
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Program({} modes, {} operations)",
            self.num_modes(),
            self.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
