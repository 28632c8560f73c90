//! Two-qubit unitary synthesis.

use std::f64::consts::PI;

use tracing::debug;

use alsvin_ir::{NativeGate, NativeOperation, QubitId};

use crate::error::SynthResult;
use crate::kak::KakDecomposer;
use crate::single_qubit::single_qubit_matrix_to_native_gates;
use crate::unitary::{Unitary2x2, Unitary4x4};

/// Default tolerance for two-qubit synthesis.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Synthesize an arbitrary two-qubit unitary into native gates.
///
/// The KAK collaborator splits `mat` into local rotations around a
/// three-coordinate interaction term; each interaction coordinate then
/// becomes one parity interaction — a partial CZ with Z corrections,
/// conjugated into the right axis by framing gates. The framing choices
/// are load-bearing: `Y^-0.5` turns the coupling's ZZ axis into XX for the
/// x coordinate, `X^0.5` turns it into YY for the y coordinate, and the z
/// coordinate needs no frame at all.
///
/// Returns operations that, applied in order, perform `mat` up to global
/// phase within `O(tolerance)` error; tightening the tolerance never makes
/// the reconstruction worse. [`DEFAULT_TOLERANCE`] is the conventional
/// choice when the caller has no better one.
pub fn two_qubit_matrix_to_native_ops<K: KakDecomposer>(
    decomposer: &K,
    q0: QubitId,
    q1: QubitId,
    mat: &Unitary4x4,
    tolerance: f64,
) -> SynthResult<Vec<NativeOperation>> {
    let kak = decomposer.decompose(mat, tolerance)?;
    let (a1, a0) = &kak.after;
    let (x, y, z) = kak.interaction;
    let (b1, b0) = &kak.before;

    let mut ops = Vec::new();

    single_qubit_on(&mut ops, b1, q1, tolerance)?;
    single_qubit_on(&mut ops, b0, q0, tolerance)?;
    parity_interaction(&mut ops, q0, q1, x, Some(NativeGate::y().pow(-0.5)), tolerance)?;
    parity_interaction(&mut ops, q0, q1, y, Some(NativeGate::x().pow(0.5)), tolerance)?;
    parity_interaction(&mut ops, q0, q1, z, None, tolerance)?;
    single_qubit_on(&mut ops, a1, q1, tolerance)?;
    single_qubit_on(&mut ops, a0, q0, tolerance)?;

    debug!(ops = ops.len(), %q0, %q1, "synthesized two-qubit operation");
    Ok(ops)
}

/// Append the synthesis of a local unitary bound to one qubit.
fn single_qubit_on(
    ops: &mut Vec<NativeOperation>,
    mat: &Unitary2x2,
    qubit: QubitId,
    tolerance: f64,
) -> SynthResult<()> {
    for gate in single_qubit_matrix_to_native_gates(mat, tolerance) {
        ops.push(gate.on(qubit)?);
    }
    Ok(())
}

/// Append one ZZ-type interaction by `rads`, conjugated by `framing`.
///
/// Emits the coupling raised to `4·rads/π` with a compensating `-e/2` Z
/// rotation on each qubit, which together realize `exp(i·rads·ZZ)` up to
/// global phase. Interactions below `tolerance` contribute nothing.
fn parity_interaction(
    ops: &mut Vec<NativeOperation>,
    q0: QubitId,
    q1: QubitId,
    rads: f64,
    framing: Option<NativeGate>,
    tolerance: f64,
) -> SynthResult<()> {
    if rads.abs() < tolerance {
        return Ok(());
    }
    let exponent = rads * 4.0 / PI;
    let half = -exponent / 2.0;

    if let Some(gate) = framing {
        ops.push(gate.on(q0)?);
        ops.push(gate.on(q1)?);
    }
    ops.push(NativeGate::cz().pow(exponent).on_pair(q0, q1)?);
    ops.push(NativeGate::z().pow(half).on(q0)?);
    ops.push(NativeGate::z().pow(half).on(q1)?);
    if let Some(gate) = framing {
        ops.push(gate.inverse().on(q0)?);
        ops.push(gate.inverse().on(q1)?);
    }
    Ok(())
}
