//! Routing a raw document string to the right validator.
//!
//! [`is_valid_document`] infers the kind from the digit count alone: 11
//! digits go to CPF, 14 to CNPJ. CNH also has 11 digits, so a CNH can never
//! be recognized this way; callers that accept driver's licenses must name
//! the kind explicitly with [`validate_as`].

use crate::cnh;
use crate::cnpj::{self, CnpjInput};
use crate::cpf;
use crate::error::ValidationError;
use crate::normalize::digits;
use crate::types::DocumentKind;

/// The kind length routing would pick for `raw`, if any.
pub fn infer_kind(raw: &str) -> Option<DocumentKind> {
    match digits(raw).len() {
        11 => Some(DocumentKind::Cpf),
        14 => Some(DocumentKind::Cnpj),
        _ => None,
    }
}

/// Validate `raw` by digit count: CPF at 11 digits, CNPJ at 14.
pub fn check_document(raw: &str) -> Result<DocumentKind, ValidationError> {
    let d = digits(raw);
    match d.len() {
        11 => cpf::validate_digits(&d).map(|_| DocumentKind::Cpf),
        // The cleaned digits always pass the CNPJ text shape gate.
        14 => cnpj::check_cnpj(CnpjInput::Text(d.to_string())).map(|_| DocumentKind::Cnpj),
        got => Err(ValidationError::WrongLength {
            expected: if got < 11 { 11 } else { 14 },
            got,
        }),
    }
}

/// Returns true if `raw` is a valid CPF (11 digits) or CNPJ (14 digits).
pub fn is_valid_document(raw: &str) -> bool {
    check_document(raw).is_ok()
}

/// Validate `raw` as a specific kind of document.
///
/// CNPJ text goes through the same shape gate as [`cnpj::check_cnpj`].
pub fn validate_as(kind: DocumentKind, raw: &str) -> Result<(), ValidationError> {
    match kind {
        DocumentKind::Cpf => cpf::check_cpf(raw),
        DocumentKind::Cnpj => cnpj::check_cnpj(raw),
        DocumentKind::Cnh => cnh::check_cnh(raw),
    }
}

/// Returns true if `raw` is a valid document of the given kind.
pub fn is_valid_as(kind: DocumentKind, raw: &str) -> bool {
    validate_as(kind, raw).is_ok()
}
