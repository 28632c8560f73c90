//! Alsvin Native Gate Synthesis
//!
//! This crate turns small unitary matrices into equivalent sequences of
//! native gates — the XY axis rotation, Z rotation and partial CZ coupling
//! defined in `alsvin-ir` — accurate to a caller-chosen tolerance.
//!
//! # Architecture
//!
//! ```text
//!  Unitary4x4 ──► two_qubit ──► KakDecomposer (external collaborator)
//!                    │
//!  Unitary2x2 ──► controlled ──► framed ──► linalg::eig2
//!                    │              │
//!                    └──────► single_qubit ◄┘
//!                                  │
//!                     angle deconstruction → turn
//!                     normalization → gate emission
//! ```
//!
//! Every entry point is a pure function from immutable inputs to a freshly
//! built operation sequence; nothing is cached between calls and nothing is
//! validated — feeding in a non-unitary matrix yields garbage, not an error.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::NativeGate;
//! use alsvin_synth::single_qubit::single_qubit_matrix_to_native_gates;
//! use alsvin_synth::unitary::Unitary2x2;
//!
//! // A bit flip is a single half-turn rotation in the XY plane.
//! let gates = single_qubit_matrix_to_native_gates(&Unitary2x2::x(), 1e-8);
//! assert_eq!(gates.len(), 1);
//! assert!(matches!(gates[0], NativeGate::Xy { .. }));
//!
//! // The identity needs no gates at all.
//! let gates = single_qubit_matrix_to_native_gates(&Unitary2x2::identity(), 1e-8);
//! assert!(gates.is_empty());
//! ```

pub mod controlled;
pub mod error;
pub mod framed;
pub mod kak;
pub mod linalg;
pub mod single_qubit;
pub mod two_qubit;
pub mod unitary;

pub use controlled::controlled_op_to_native_ops;
pub use error::{SynthError, SynthResult};
pub use framed::{FramedPhaseForm, framed_phase_form};
pub use kak::{KakDecomposer, KakDecomposition};
pub use single_qubit::{is_negligible_turn, signed_mod_1, single_qubit_matrix_to_native_gates};
pub use two_qubit::{DEFAULT_TOLERANCE, two_qubit_matrix_to_native_ops};
pub use unitary::{Unitary2x2, Unitary4x4};
