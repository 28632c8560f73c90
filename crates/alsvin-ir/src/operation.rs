//! Gates bound to concrete qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::NativeGate;
use crate::qubit::QubitId;

/// A native gate bound to the qubits it acts on.
///
/// Sequences of operations are ordered: the first element is applied first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeOperation {
    /// The gate being applied.
    pub gate: NativeGate,
    /// The qubits it acts on, in gate-operand order.
    pub qubits: Vec<QubitId>,
}

impl NativeOperation {
    /// The inverse operation: the gate's analytic inverse on the same qubits.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            gate: self.gate.inverse(),
            qubits: self.qubits.clone(),
        }
    }
}

impl fmt::Display for NativeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{q}")?;
        }
        write!(f, ")")
    }
}

/// The element-wise inverse of an operation sequence, in reverse order.
///
/// Appending the result to the original sequence yields an identity
/// (up to floating-point error).
pub fn inverse_ops(ops: &[NativeOperation]) -> Vec<NativeOperation> {
    ops.iter().rev().map(NativeOperation::inverse).collect()
}
