//! Framed phase form of a single-qubit operation.

use num_complex::Complex64;

use crate::linalg::eig2;
use crate::unitary::Unitary2x2;

/// The decomposition `mat = global_phase · u† · diag(1, relative_phase) · u`.
///
/// `u` translates the rotation axis of the operation onto the Z axis, the
/// relative phase carries the rotation about that axis, and the global
/// phase fixes the scalar the translation leaves over. The global phase is
/// unobservable on its own but becomes a control-side Z rotation when the
/// operation is controlled.
#[derive(Debug, Clone, Copy)]
pub struct FramedPhaseForm {
    /// The conjugating unitary.
    pub u: Unitary2x2,
    /// Unit-magnitude rotation factor about the translated axis.
    pub relative_phase: Complex64,
    /// Unit-magnitude overall scalar.
    pub global_phase: Complex64,
}

/// Decompose a 2x2 unitary into framed phase form.
///
/// Built directly on the eigendecomposition: with `mat = V·diag(λ0, λ1)·V†`
/// the frame is `u = V†`, the relative phase `λ1/λ0`, and the global phase
/// `λ0`. Which eigenpair lands in `λ0` follows the collaborator's ordering
/// convention (see [`crate::linalg::eig2`]); both choices satisfy the
/// contract.
pub fn framed_phase_form(mat: &Unitary2x2) -> FramedPhaseForm {
    let (values, vectors) = eig2(mat);
    FramedPhaseForm {
        u: vectors.dagger(),
        relative_phase: values[1] / values[0],
        global_phase: values[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_framed_contract(mat: &Unitary2x2) {
        let form = framed_phase_form(mat);
        let rotation = Unitary2x2::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            form.relative_phase,
        );
        let reconstructed = form
            .u
            .dagger()
            .mul(&rotation)
            .mul(&form.u)
            .scale(form.global_phase);
        let distance = reconstructed.distance_up_to_global_phase(mat);
        assert!(distance < 1e-9, "framed form distance {distance} for {mat:?}");
        // The reconstruction must match exactly, not just up to phase.
        for (lhs, rhs) in reconstructed.data.iter().zip(mat.data.iter()) {
            assert!((lhs - rhs).norm() < 1e-9);
        }
    }

    #[test]
    fn test_framed_contract_holds() {
        for mat in [
            Unitary2x2::x(),
            Unitary2x2::h(),
            Unitary2x2::s(),
            Unitary2x2::rotation(0.9),
            Unitary2x2::phase(2.3).mul(&Unitary2x2::h()),
        ] {
            assert_framed_contract(&mat);
        }
    }

    #[test]
    fn test_identity_has_unit_phases() {
        let form = framed_phase_form(&Unitary2x2::identity());
        assert!((form.relative_phase - 1.0).norm() < 1e-12);
        assert!((form.global_phase - 1.0).norm() < 1e-12);
    }

    #[test]
    fn test_phases_have_unit_magnitude() {
        let form = framed_phase_form(&Unitary2x2::h());
        assert!((form.relative_phase.norm() - 1.0).abs() < 1e-9);
        assert!((form.global_phase.norm() - 1.0).abs() < 1e-9);
    }
}
