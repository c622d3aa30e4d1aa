//! Mode register addressing

use std::fmt;

/// Identifier of one qumode in a program's register
///
/// A [`Program`](crate::Program) numbers its modes consecutively from zero;
/// operations refer to modes through this newtype rather than raw indices,
/// so a mode cannot be confused with a Fock occupation number or a cutoff
/// dimension in an argument list.
///
/// # Example
/// ```
/// use qumodes_core::{ModeId, Program};
///
/// let program = Program::new(3);
/// let last = ModeId::new(2);
/// assert!(program.modes().contains(&last));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ModeId(usize);

impl ModeId {
    /// Wrap a register position
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// The position in the register
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for ModeId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<ModeId> for usize {
    #[inline]
    fn from(mode: ModeId) -> Self {
        mode.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for i in [0usize, 1, 17] {
            let mode: ModeId = i.into();
            assert_eq!(mode.index(), i);
            assert_eq!(usize::from(mode), i);
            assert_eq!(mode, ModeId::new(i));
        }
    }

    #[test]
    fn test_register_order() {
        // Ordering follows the register position, so mode lists sort the
        // way the register reads.
        let mut modes = vec![ModeId::new(2), ModeId::new(0), ModeId::new(1)];
        modes.sort();
        assert_eq!(modes, vec![ModeId::new(0), ModeId::new(1), ModeId::new(2)]);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ModeId::new(0).to_string(), "q0");
        assert_eq!(ModeId::new(12).to_string(), "q12");
    }
}
