//! Alsvin Native Gate IR
//!
//! Value types shared by the Alsvin synthesis stack: qubit identities, the
//! native gate set, and gates bound to qubits.
//!
//! # Overview
//!
//! The native gate set is deliberately tiny — an XY-plane axis rotation, a
//! Z rotation, and a partial CZ coupling — because that is what the target
//! hardware executes directly. Everything larger is synthesized down to
//! sequences of these by the `alsvin-synth` crate.
//!
//! All gate parameters are in *turns* (fractions of a full rotation), and
//! every gate supports the small capability contract synthesis relies on:
//! raising to a real power, inversion, binding to qubits, and a trace
//! distance bound for negligibility decisions.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::{NativeGate, QubitId};
//!
//! // An eighth-turn CZ coupling between q0 and q1.
//! let op = NativeGate::cz().pow(0.25).on_pair(QubitId(0), QubitId(1)).unwrap();
//! assert_eq!(op.gate, NativeGate::Cz { turns: 0.125 });
//!
//! // Undoing it is the same gate with negated turns.
//! assert_eq!(op.inverse().gate, NativeGate::Cz { turns: -0.125 });
//! ```

pub mod error;
pub mod gate;
pub mod operation;
pub mod qubit;

pub use error::{IrError, IrResult};
pub use gate::NativeGate;
pub use operation::{NativeOperation, inverse_ops};
pub use qubit::QubitId;
