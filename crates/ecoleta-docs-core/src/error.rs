//! Error types for document validation.

use thiserror::Error;

/// Errors raised by the typed helpers around the validators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown document kind: {0}")]
    UnknownKind(String),
}

/// Why a document was rejected.
///
/// Validators never fail with anything other than a rejection; the reason
/// is carried for logging and for callers that want more than a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty input")]
    Empty,

    #[error("unsupported input shape")]
    UnsupportedInput,

    #[error("text is neither 14 bare digits nor NN.NNN.NNN/NNNN-NN")]
    MalformedText,

    #[error("wrong digit count: expected {expected}, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("check digit {position} mismatch: expected {expected}, got {got}")]
    CheckDigitMismatch {
        /// 1 for the first check digit, 2 for the second.
        position: u8,
        /// The computed check value. For CNH this may be 10 or 11.
        expected: u8,
        got: u8,
    },
}
