//! Qubit identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit.
///
/// Synthesis routines treat qubit ids as opaque handles: they are attached
/// to gates and carried through to the output, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        let q = QubitId(3);
        assert_eq!(format!("{q}"), "q3");
    }

    #[test]
    fn test_qubit_from_usize() {
        assert_eq!(QubitId::from(7_usize), QubitId(7));
    }
}
