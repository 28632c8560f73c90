//! The native gate set.
//!
//! Target hardware executes exactly three gate families: a continuous
//! rotation about an axis in the XY plane of the Bloch sphere, a rotation
//! about the Z axis, and a partial controlled-Z coupling between a qubit
//! pair. All parameters are expressed in *turns* (1.0 turn = 2π radians),
//! so the half-turn instances are the familiar Pauli X/Y/Z and CZ.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{IrError, IrResult};
use crate::operation::NativeOperation;
use crate::qubit::QubitId;

/// A gate the target hardware can execute directly.
///
/// The gate set is closed and small, so gates are modeled as a tagged enum
/// rather than trait objects. Every variant is diagonalizable with
/// eigenvalues `{1, e^{i·2π·turns}}`, which makes raising to a real power
/// exact: it simply scales `turns`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NativeGate {
    /// Rotation about an axis in the XY plane.
    ///
    /// With `ω = 2π·axis_phase_turns` and `A = cos(ω)·X + sin(ω)·Y`, the
    /// matrix is `(I + A)/2 + e^{i·2π·turns}·(I − A)/2`. A half turn with
    /// axis phase 0 is Pauli X; axis phase 0.25 is Pauli Y.
    Xy {
        /// Rotation amount, in turns.
        turns: f64,
        /// Angle of the rotation axis within the XY plane, in turns.
        axis_phase_turns: f64,
    },
    /// Rotation about the Z axis: `diag(1, e^{i·2π·turns})`.
    Z {
        /// Rotation amount, in turns.
        turns: f64,
    },
    /// Two-qubit coupling: `diag(1, 1, 1, e^{i·2π·turns})`.
    Cz {
        /// Coupling amount, in turns.
        turns: f64,
    },
}

impl NativeGate {
    /// The Pauli X gate (half-turn XY rotation, axis phase 0).
    pub fn x() -> Self {
        NativeGate::Xy {
            turns: 0.5,
            axis_phase_turns: 0.0,
        }
    }

    /// The Pauli Y gate (half-turn XY rotation, axis phase 0.25).
    pub fn y() -> Self {
        NativeGate::Xy {
            turns: 0.5,
            axis_phase_turns: 0.25,
        }
    }

    /// The Pauli Z gate (half-turn Z rotation).
    pub fn z() -> Self {
        NativeGate::Z { turns: 0.5 }
    }

    /// The full controlled-Z gate (half-turn coupling).
    pub fn cz() -> Self {
        NativeGate::Cz { turns: 0.5 }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            NativeGate::Xy { .. } => "xy",
            NativeGate::Z { .. } => "z",
            NativeGate::Cz { .. } => "cz",
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            NativeGate::Xy { .. } | NativeGate::Z { .. } => 1,
            NativeGate::Cz { .. } => 2,
        }
    }

    /// Raise this gate to a real power.
    ///
    /// The fractional application of a gate with eigenvalues
    /// `{1, e^{i·2π·t}}` has eigenvalues `{1, e^{i·2π·t·k}}` on the same
    /// eigenspaces, so powering scales `turns` and leaves the axis alone.
    #[must_use]
    pub fn pow(self, exponent: f64) -> Self {
        match self {
            NativeGate::Xy {
                turns,
                axis_phase_turns,
            } => NativeGate::Xy {
                turns: turns * exponent,
                axis_phase_turns,
            },
            NativeGate::Z { turns } => NativeGate::Z {
                turns: turns * exponent,
            },
            NativeGate::Cz { turns } => NativeGate::Cz {
                turns: turns * exponent,
            },
        }
    }

    /// The analytic inverse of this gate.
    #[must_use]
    pub fn inverse(self) -> Self {
        self.pow(-1.0)
    }

    /// Upper bound on the operator distance between this gate and the
    /// nearest phase-aligned identity.
    ///
    /// The bound is `|sin(π·turns)|`: zero exactly when the gate is a whole
    /// number of turns, and periodic in one turn, so no prior
    /// canonicalization of `turns` is required. Synthesis uses it to decide
    /// whether emitting the gate is worth anything at a given tolerance.
    pub fn trace_distance_bound(&self) -> f64 {
        let turns = match self {
            NativeGate::Xy { turns, .. } | NativeGate::Z { turns } | NativeGate::Cz { turns } => {
                *turns
            }
        };
        (PI * turns).sin().abs()
    }

    /// Bind this single-qubit gate to a qubit.
    pub fn on(self, qubit: QubitId) -> IrResult<NativeOperation> {
        if self.num_qubits() != 1 {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.name().to_string(),
                expected: self.num_qubits(),
                got: 1,
            });
        }
        Ok(NativeOperation {
            gate: self,
            qubits: vec![qubit],
        })
    }

    /// Bind this two-qubit gate to an ordered qubit pair.
    pub fn on_pair(self, a: QubitId, b: QubitId) -> IrResult<NativeOperation> {
        if self.num_qubits() != 2 {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.name().to_string(),
                expected: self.num_qubits(),
                got: 2,
            });
        }
        Ok(NativeOperation {
            gate: self,
            qubits: vec![a, b],
        })
    }
}
