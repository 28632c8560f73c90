//! The KAK (Cartan) decomposition collaborator contract.
//!
//! Two-qubit synthesis consumes the standard Cartan form of a 4x4 unitary
//! as an opaque result: local single-qubit rotations sandwiching a
//! three-parameter interaction term. Producing that form involves general
//! numerical linear algebra and lives outside this crate; implementations
//! plug in through [`KakDecomposer`].

use num_complex::Complex64;

use crate::error::SynthResult;
use crate::unitary::{Unitary2x2, Unitary4x4};

/// The Cartan form `mat = g · (a0 ⊗ a1) · exp(i(x·XX + y·YY + z·ZZ)) · (b0 ⊗ b1)`,
/// with `⊗` ordered so the first qubit of the pair is most significant.
///
/// The pair fields follow the `(q1, q0)` convention of the decomposition:
/// `after.0`/`before.0` act on the second qubit of the synthesized pair and
/// `after.1`/`before.1` on the first.
#[derive(Debug, Clone)]
pub struct KakDecomposition {
    /// Overall scalar. Synthesis works up to global phase and ignores it.
    pub global_phase: Complex64,
    /// Local rotations applied last: `(a1, a0)`.
    pub after: (Unitary2x2, Unitary2x2),
    /// Interaction coordinates `(x, y, z)`, in radians.
    pub interaction: (f64, f64, f64),
    /// Local rotations applied first: `(b1, b0)`.
    pub before: (Unitary2x2, Unitary2x2),
}

/// A source of Cartan decompositions for two-qubit unitaries.
///
/// The contract is purely algebraic: the returned parts must multiply back
/// to the input within the given tolerance. Implementations are expected to
/// be pure and reentrant; synthesis calls them exactly once per input.
pub trait KakDecomposer {
    /// Decompose `mat` into Cartan form within `tolerance`.
    fn decompose(&self, mat: &Unitary4x4, tolerance: f64) -> SynthResult<KakDecomposition>;
}
