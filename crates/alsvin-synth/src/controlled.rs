//! Controlled single-qubit operation synthesis.

use std::f64::consts::PI;

use tracing::debug;

use alsvin_ir::{NativeGate, NativeOperation, QubitId, inverse_ops};

use crate::error::SynthResult;
use crate::framed::framed_phase_form;
use crate::single_qubit::single_qubit_matrix_to_native_gates;
use crate::unitary::Unitary2x2;

/// Synthesize a controlled single-qubit operation into native gates.
///
/// The framed phase form turns the controlled operation into a partial CZ
/// conjugated by single-qubit frame changes on the target: apply the frame,
/// couple, undo the frame. The decomposition's global phase is observable
/// once the operation is controlled, so it comes back as a Z rotation on
/// the control (the "kickback") whenever it is non-negligible.
///
/// Returns operations that, applied in order, perform the controlled
/// `operation` on `target` exactly — including its phase — within
/// `tolerance`. An operation that is identity on the target up to global
/// phase synthesizes to nothing.
pub fn controlled_op_to_native_ops(
    control: QubitId,
    target: QubitId,
    operation: &Unitary2x2,
    tolerance: f64,
) -> SynthResult<Vec<NativeOperation>> {
    let form = framed_phase_form(operation);
    if (form.relative_phase - 1.0).norm() <= tolerance {
        return Ok(vec![]);
    }

    let mut frame_gates = single_qubit_matrix_to_native_gates(&form.u, tolerance);
    // A trailing Z rotation commutes with the coupling; no point bordering with it.
    if matches!(frame_gates.last(), Some(NativeGate::Z { .. })) {
        frame_gates.pop();
    }

    let ops_before = frame_gates
        .into_iter()
        .map(|gate| gate.on(target))
        .collect::<Result<Vec<_>, _>>()?;
    let ops_after = inverse_ops(&ops_before);

    let mut ops = ops_before;
    ops.push(
        NativeGate::cz()
            .pow(form.relative_phase.arg() / PI)
            .on_pair(control, target)?,
    );
    if (form.global_phase - 1.0).norm() > tolerance {
        ops.push(NativeGate::z().pow(form.global_phase.arg() / PI).on(control)?);
    }
    ops.extend(ops_after);

    debug!(
        ops = ops.len(),
        %control,
        %target,
        "synthesized controlled operation"
    );
    Ok(ops)
}
