//! Error types for the signup document gate.

use ecoleta_docs_core::{CoreError, DocumentKind, ValidationError};
use thiserror::Error;

/// Reasons a signup request is rejected.
#[derive(Debug, Error)]
pub enum SignupError {
    /// No document value in the request.
    #[error("missing document value")]
    MissingDocument,

    /// The document failed validation.
    #[error("invalid document (CPF, CNPJ or CNH): {reason}")]
    InvalidDocument {
        /// The kind it was checked as, if one could be determined.
        kind: Option<DocumentKind>,
        reason: ValidationError,
    },

    /// A collector signed up without a driver's license.
    #[error("missing driver's license")]
    MissingLicense,

    /// The driver's license failed validation.
    #[error("invalid driver's license: {reason}")]
    InvalidLicense { reason: ValidationError },

    /// Phone number digit count outside 10..=11.
    #[error("invalid phone number: {digits} digits")]
    InvalidPhone { digits: usize },

    /// The declared document type is not CPF, CNPJ or CNH.
    #[error("unknown document type: {0}")]
    UnknownKind(#[from] CoreError),

    /// Request body or configuration could not be parsed.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SignupError {
    /// HTTP status a request handler should answer with.
    ///
    /// Validation failures are 422 Unprocessable Entity; unparseable input
    /// is 400 Bad Request.
    pub fn status_code(&self) -> u16 {
        match self {
            SignupError::Json(_) => 400,
            _ => 422,
        }
    }
}

/// Result type for gate operations.
pub type Result<T> = std::result::Result<T, SignupError>;
