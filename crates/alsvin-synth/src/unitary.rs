//! Small fixed-size unitary matrices.
//!
//! Synthesis only ever handles 2x2 and 4x4 unitaries, so matrices are plain
//! row-major arrays of `Complex64` rather than a general matrix type.
//! Unitarity is an input contract, not something these types validate.

use num_complex::Complex64;

use alsvin_ir::{NativeGate, NativeOperation, QubitId};

/// A 2x2 complex matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix from row-major elements.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// Create a Pauli-X matrix.
    pub fn x() -> Self {
        Self::new(
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        )
    }

    /// Create a Pauli-Y matrix.
    pub fn y() -> Self {
        Self::new(
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, 0.0),
        )
    }

    /// Create a Pauli-Z matrix.
    pub fn z() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(-1.0, 0.0),
        )
    }

    /// Create a Hadamard matrix.
    pub fn h() -> Self {
        let s = 1.0 / 2.0_f64.sqrt();
        Self::new(
            Complex64::new(s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(-s, 0.0),
        )
    }

    /// Create an S gate (sqrt(Z)).
    pub fn s() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 1.0),
        )
    }

    /// Create the phase-correction matrix `diag(1, e^{i·angle})`.
    pub fn phase(angle: f64) -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, angle),
        )
    }

    /// Create the real rotation matrix `[[cos, -sin], [sin, cos]]`.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        )
    }

    /// The matrix of a single-qubit native gate.
    ///
    /// Returns `None` for two-qubit gates.
    pub fn from_gate(gate: &NativeGate) -> Option<Self> {
        use std::f64::consts::TAU;
        match *gate {
            NativeGate::Xy {
                turns,
                axis_phase_turns,
            } => {
                // (I + A)/2 + e^{i·2π·turns}·(I − A)/2 with A the XY-plane axis.
                let spin = Complex64::from_polar(1.0, TAU * turns);
                let diag = (spin + 1.0) / 2.0;
                let off = (-spin + 1.0) / 2.0;
                let axis = Complex64::from_polar(1.0, TAU * axis_phase_turns);
                Some(Self::new(diag, off * axis.conj(), off * axis, diag))
            }
            NativeGate::Z { turns } => Some(Self::phase(TAU * turns)),
            NativeGate::Cz { .. } => None,
        }
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Multiply every element by a complex scalar.
    #[must_use]
    pub fn scale(&self, factor: Complex64) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a * factor, b * factor, c * factor, d * factor)
    }

    /// Largest element-wise distance to `other` after aligning global phase.
    ///
    /// The alignment phase is chosen from the largest-magnitude element of
    /// `other`, which is exact for unitaries that genuinely differ only by
    /// a global phase.
    pub fn distance_up_to_global_phase(&self, other: &Self) -> f64 {
        distance_up_to_global_phase(&self.data, &other.data)
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Unitary2x2::mul(&self, &other)
    }
}

/// A 4x4 complex matrix in row-major order.
///
/// Qubit convention: for an ordered pair `(q0, q1)`, `q0` indexes the more
/// significant bit, so row/column `2·i0 + i1` corresponds to basis state
/// `|i0 i1⟩`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary4x4 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; 16],
}

impl Unitary4x4 {
    /// Create a new 4x4 matrix from row-major elements.
    pub fn new(data: [Complex64; 16]) -> Self {
        Self { data }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        let mut data = [Complex64::new(0.0, 0.0); 16];
        for i in 0..4 {
            data[i * 4 + i] = Complex64::new(1.0, 0.0);
        }
        Self { data }
    }

    /// The Kronecker product `a ⊗ b`, with `a` on the more significant qubit.
    pub fn kron(a: &Unitary2x2, b: &Unitary2x2) -> Self {
        let mut data = [Complex64::new(0.0, 0.0); 16];
        for i0 in 0..2 {
            for j0 in 0..2 {
                for i1 in 0..2 {
                    for j1 in 0..2 {
                        data[(2 * i0 + i1) * 4 + (2 * j0 + j1)] =
                            a.data[i0 * 2 + j0] * b.data[i1 * 2 + j1];
                    }
                }
            }
        }
        Self { data }
    }

    /// The matrix of a bound operation over the ordered pair `(q0, q1)`.
    ///
    /// Single-qubit gates are tensored with the identity on the other
    /// qubit; the CZ coupling is symmetric so either operand order is
    /// accepted. Returns `None` if the operation touches any other qubit.
    pub fn from_operation(op: &NativeOperation, q0: QubitId, q1: QubitId) -> Option<Self> {
        match op.gate {
            NativeGate::Xy { .. } | NativeGate::Z { .. } => {
                let u = Unitary2x2::from_gate(&op.gate)?;
                match op.qubits.as_slice() {
                    [q] if *q == q0 => Some(Self::kron(&u, &Unitary2x2::identity())),
                    [q] if *q == q1 => Some(Self::kron(&Unitary2x2::identity(), &u)),
                    _ => None,
                }
            }
            NativeGate::Cz { turns } => match op.qubits.as_slice() {
                [a, b] if (*a == q0 && *b == q1) || (*a == q1 && *b == q0) => {
                    let mut m = Self::identity();
                    m.data[15] = Complex64::from_polar(1.0, std::f64::consts::TAU * turns);
                    Some(m)
                }
                _ => None,
            },
        }
    }

    /// Multiply this matrix by another: self * other.
    pub fn mul(&self, other: &Self) -> Self {
        let mut data = [Complex64::new(0.0, 0.0); 16];
        for i in 0..4 {
            for j in 0..4 {
                let mut acc = Complex64::new(0.0, 0.0);
                for k in 0..4 {
                    acc += self.data[i * 4 + k] * other.data[k * 4 + j];
                }
                data[i * 4 + j] = acc;
            }
        }
        Self { data }
    }

    /// Multiply every element by a complex scalar.
    #[must_use]
    pub fn scale(&self, factor: Complex64) -> Self {
        let mut data = self.data;
        for v in &mut data {
            *v *= factor;
        }
        Self { data }
    }

    /// Largest element-wise distance to `other` after aligning global phase.
    pub fn distance_up_to_global_phase(&self, other: &Self) -> f64 {
        distance_up_to_global_phase(&self.data, &other.data)
    }
}

impl Default for Unitary4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary4x4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Unitary4x4::mul(&self, &other)
    }
}

fn distance_up_to_global_phase(a: &[Complex64], b: &[Complex64]) -> f64 {
    // Align phases on the largest-magnitude reference element.
    let mut pivot = 0;
    for (i, v) in b.iter().enumerate() {
        if v.norm() > b[pivot].norm() {
            pivot = i;
        }
    }
    let phase = if b[pivot].norm() > 0.0 && a[pivot].norm() > 0.0 {
        let ratio = a[pivot] / b[pivot];
        ratio / ratio.norm()
    } else {
        Complex64::new(1.0, 0.0)
    };
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y * phase).norm())
        .fold(0.0, f64::max)
}
