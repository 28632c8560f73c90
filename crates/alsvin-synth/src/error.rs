//! Error types for the synthesis crate.

use thiserror::Error;

/// Errors that can occur during gate synthesis.
///
/// The synthesis algebra itself is total over well-formed unitary input;
/// errors only arise at the seams: gate binding and the external KAK
/// collaborator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] alsvin_ir::IrError),

    /// The external KAK decomposition collaborator failed.
    #[error("KAK decomposition failed: {0}")]
    KakFailed(String),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
