//! Single-qubit unitary synthesis.
//!
//! Breaks an arbitrary 2x2 unitary down to at most two native gates: one
//! XY-plane axis rotation and one Z rotation. The pipeline is a ZYZ-style
//! angle deconstruction, a conversion of those angles into canonical gate
//! turns, and a tolerance-driven gate emission step.

use std::f64::consts::{PI, TAU};

use alsvin_ir::NativeGate;

use crate::unitary::Unitary2x2;

/// Canonicalize a turn count into the range `[-0.5, 0.5)`.
///
/// Turns are equivalent modulo 1.0; `rem_euclid` keeps negative inputs
/// wrapping in the mathematical direction.
pub fn signed_mod_1(x: f64) -> f64 {
    (x + 0.5).rem_euclid(1.0) - 0.5
}

/// Whether a rotation by `turns` is within `tolerance` of a whole rotation.
pub fn is_negligible_turn(turns: f64, tolerance: f64) -> bool {
    signed_mod_1(turns).abs() < tolerance
}

/// Break a 2x2 unitary into ZYZ angle parameters.
///
/// Returns `(pre_phase, rotation, post_phase)`: the amount to phase around
/// Z, then rotate around Y, then phase around Z again (all radians). The
/// global phase of `mat` is deliberately discarded, so the angles
/// reconstruct it only up to a unit scalar.
///
/// The step order is load-bearing for numerical behavior and must not be
/// rearranged.
fn deconstruct_into_angles(mat: &Unitary2x2) -> (f64, f64, f64) {
    // Anti-cancel left-vs-right phase along the top row.
    let right_phase = (mat.data[1] * mat.data[0].conj()).arg() + PI;
    let mat = mat.mul(&Unitary2x2::phase(-right_phase));

    // Cancel top-vs-bottom phase along the left column.
    let bottom_phase = (mat.data[2] * mat.data[0].conj()).arg();
    let mat = Unitary2x2::phase(-bottom_phase).mul(&mat);

    // Lined up for a rotation; clear the off-diagonal cells with one.
    let rotation = mat.data[2].norm().atan2(mat.data[0].norm());
    let mat = Unitary2x2::rotation(-rotation).mul(&mat);

    // Cancel top-left-vs-bottom-right phase.
    let diagonal_phase = (mat.data[3] * mat.data[0].conj()).arg();

    (right_phase + diagonal_phase, rotation, bottom_phase)
}

/// Break a 2x2 unitary into native gate parameters.
///
/// Returns `(xy_turns, xy_phase_turns, z_turns)`: the amount to rotate
/// about an XY-plane axis, the phase of that axis, and the amount to
/// rotate about Z afterwards. All three are canonicalized into
/// `[-0.5, 0.5)`.
fn deconstruct_into_turns(mat: &Unitary2x2) -> (f64, f64, f64) {
    let (pre_phase, rotation, post_phase) = deconstruct_into_angles(mat);

    let xy_turns = 2.0 * rotation / TAU;
    let xy_phase_turns = 0.25 - pre_phase / TAU;
    let z_turns = (post_phase + pre_phase) / TAU;

    (
        signed_mod_1(xy_turns),
        signed_mod_1(xy_phase_turns),
        signed_mod_1(z_turns),
    )
}

/// Implement a single-qubit operation with as few native gates as possible.
///
/// Returns gates that, applied in order, perform `mat` up to global phase.
/// Gates whose trace distance bound is at most `tolerance` are elided, so
/// the result has zero, one, or two gates.
///
/// When both gates survive and the XY rotation is within `tolerance` of a
/// half turn, the pair collapses to a single half-turn XY gate: a half
/// turn absorbs a trailing Z rotation by tilting its own axis. The length
/// check deliberately runs *after* elision; if the Z gate was already
/// dropped as negligible, the absorption is skipped rather than counted
/// twice.
pub fn single_qubit_matrix_to_native_gates(mat: &Unitary2x2, tolerance: f64) -> Vec<NativeGate> {
    let (xy_turns, xy_phase_turns, z_turns) = deconstruct_into_turns(mat);

    let gates: Vec<NativeGate> = [
        NativeGate::Xy {
            turns: xy_turns,
            axis_phase_turns: xy_phase_turns,
        },
        NativeGate::Z { turns: z_turns },
    ]
    .into_iter()
    .filter(|gate| gate.trace_distance_bound() > tolerance)
    .collect();

    if gates.len() == 2 && xy_turns.abs() >= 0.5 - tolerance {
        return vec![NativeGate::Xy {
            turns: 0.5,
            axis_phase_turns: xy_phase_turns + z_turns / 2.0,
        }];
    }

    gates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unitary::Unitary2x2;
    use num_complex::Complex64;
    use proptest::prelude::*;

    /// Matrix for applying `gates` in order.
    fn gate_product(gates: &[NativeGate]) -> Unitary2x2 {
        gates.iter().fold(Unitary2x2::identity(), |acc, gate| {
            Unitary2x2::from_gate(gate).unwrap().mul(&acc)
        })
    }

    fn assert_reconstructs(mat: &Unitary2x2, tolerance: f64, slack: f64) {
        let gates = single_qubit_matrix_to_native_gates(mat, tolerance);
        assert!(gates.len() <= 2);
        let product = gate_product(&gates);
        let distance = product.distance_up_to_global_phase(mat);
        assert!(
            distance < slack,
            "reconstruction distance {distance} for {mat:?}, gates {gates:?}"
        );
    }

    #[test]
    fn test_named_unitaries_reconstruct() {
        for mat in [
            Unitary2x2::identity(),
            Unitary2x2::x(),
            Unitary2x2::y(),
            Unitary2x2::z(),
            Unitary2x2::h(),
            Unitary2x2::s(),
            Unitary2x2::phase(0.77),
            Unitary2x2::rotation(-1.3),
        ] {
            assert_reconstructs(&mat, 0.0, 1e-9);
        }
    }

    #[test]
    fn test_identity_synthesizes_to_nothing() {
        let gates = single_qubit_matrix_to_native_gates(&Unitary2x2::identity(), 1e-8);
        assert!(gates.is_empty());

        // Whole-turn gates carry no effect even at zero tolerance.
        let gates = single_qubit_matrix_to_native_gates(&Unitary2x2::identity(), 0.0);
        assert!(gates.is_empty());
    }

    #[test]
    fn test_bit_flip_collapses_to_one_half_turn() {
        let gates = single_qubit_matrix_to_native_gates(&Unitary2x2::x(), 1e-8);
        assert_eq!(gates.len(), 1);
        let NativeGate::Xy { turns, .. } = gates[0] else {
            panic!("expected an XY gate, got {:?}", gates[0]);
        };
        assert!((turns - 0.5).abs() < 1e-9);
        let product = gate_product(&gates);
        assert!(product.distance_up_to_global_phase(&Unitary2x2::x()) < 1e-9);
    }

    #[test]
    fn test_half_turn_absorbs_z_phase() {
        // diag(1, i) · X: a half turn composed with a quarter Z turn.
        let mat = Unitary2x2::phase(std::f64::consts::FRAC_PI_2).mul(&Unitary2x2::x());
        let gates = single_qubit_matrix_to_native_gates(&mat, 1e-8);
        assert_eq!(gates.len(), 1, "absorption should fire: {gates:?}");
        assert!(matches!(gates[0], NativeGate::Xy { .. }));
        assert!(gate_product(&gates).distance_up_to_global_phase(&mat) < 1e-9);
    }

    #[test]
    fn test_absorption_suppressed_when_z_gate_already_elided() {
        // Half turn about an XY axis composed with a tiny residual Z rotation.
        let beta = 1e-3;
        let mat = Unitary2x2::new(
            Complex64::new(0.0, 0.0),
            -Complex64::from_polar(1.0, beta),
            Complex64::from_polar(1.0, -beta),
            Complex64::new(0.0, 0.0),
        );

        // The Z gate falls to elision first, so only one gate survives the
        // filter and the absorption rewrite must not fire: the rotation
        // keeps its canonical -0.5 turns.
        let gates = single_qubit_matrix_to_native_gates(&mat, 1e-2);
        assert_eq!(gates.len(), 1);
        let NativeGate::Xy { turns, .. } = gates[0] else {
            panic!("expected an XY gate, got {:?}", gates[0]);
        };
        assert!(
            (turns + 0.5).abs() < 1e-9,
            "expected the filtered -0.5 turn rotation, got {turns}"
        );

        // At zero tolerance the Z gate survives filtering, both gates are
        // present, and absorption replaces them with the +0.5 turn gate.
        let gates = single_qubit_matrix_to_native_gates(&mat, 0.0);
        assert_eq!(gates.len(), 1);
        let NativeGate::Xy { turns, .. } = gates[0] else {
            panic!("expected an XY gate, got {:?}", gates[0]);
        };
        assert!((turns - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_pure_z_phase_is_one_gate() {
        let mat = Unitary2x2::phase(0.4);
        let gates = single_qubit_matrix_to_native_gates(&mat, 1e-8);
        assert_eq!(gates.len(), 1);
        assert!(matches!(gates[0], NativeGate::Z { .. }));
    }

    #[test]
    fn test_zero_top_left_entry_does_not_panic() {
        // mat[0,0] == 0 exercises the phase-of-zero convention.
        let mat = Unitary2x2::new(
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, 0.9),
            Complex64::from_polar(1.0, -0.2),
            Complex64::new(0.0, 0.0),
        );
        assert_reconstructs(&mat, 0.0, 1e-9);
    }

    #[test]
    fn test_signed_mod_1_canonical_range() {
        assert!((signed_mod_1(0.5) - (-0.5)).abs() < 1e-12);
        assert!((signed_mod_1(-0.5) - (-0.5)).abs() < 1e-12);
        assert!((signed_mod_1(0.49999) - 0.49999).abs() < 1e-12);
        assert!((signed_mod_1(1.25) - 0.25).abs() < 1e-12);
        assert!((signed_mod_1(-1.25) - (-0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_is_negligible_turn_boundary_is_strict() {
        assert!(!is_negligible_turn(0.01, 0.01));
        assert!(is_negligible_turn(0.0099, 0.01));
        assert!(is_negligible_turn(1.0, 0.01));
    }

    proptest! {
        #[test]
        fn prop_signed_mod_1_idempotent(x in -1e3_f64..1e3) {
            let once = signed_mod_1(x);
            prop_assert!((-0.5..0.5).contains(&once));
            prop_assert!((signed_mod_1(once) - once).abs() < 1e-12);
        }

        #[test]
        fn prop_random_unitaries_reconstruct(
            pre in -std::f64::consts::PI..std::f64::consts::PI,
            rot in -std::f64::consts::PI..std::f64::consts::PI,
            post in -std::f64::consts::PI..std::f64::consts::PI,
            global in -std::f64::consts::PI..std::f64::consts::PI,
        ) {
            let mat = Unitary2x2::phase(post)
                .mul(&Unitary2x2::rotation(rot))
                .mul(&Unitary2x2::phase(pre))
                .scale(Complex64::from_polar(1.0, global));
            let gates = single_qubit_matrix_to_native_gates(&mat, 0.0);
            prop_assert!(gates.len() <= 2);
            let product = gate_product(&gates);
            prop_assert!(product.distance_up_to_global_phase(&mat) < 1e-8);
        }
    }
}
