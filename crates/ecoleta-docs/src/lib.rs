//! # Ecoleta Docs
//!
//! Document validation for the Ecoleta marketplace: the check-digit
//! validators for CPF, CNPJ and CNH, plus the gate that signup handlers put
//! in front of profile creation.
//!
//! ## Overview
//!
//! - **Validators**: pure functions re-exported from [`core`]. They take a
//!   raw, possibly punctuated string and return a boolean; they never panic
//!   on malformed input.
//! - **Gate**: [`DocumentGate`] checks the document and license fields of a
//!   [`SignupRequest`] and reports failures as [`SignupError`], which maps
//!   to an HTTP status.
//!
//! ## Usage
//!
//! ```rust
//! use ecoleta_docs::{DispatchPolicy, DocumentGate, GateConfig, SignupRequest};
//!
//! let gate = DocumentGate::new(GateConfig {
//!     policy: DispatchPolicy::Declared,
//!     ..GateConfig::default()
//! });
//!
//! let request = SignupRequest::collector("529.982.247-25").with_license("03456781235");
//! let accepted = gate.check(&request).unwrap();
//! assert_eq!(accepted.document, "52998224725");
//!
//! let request = SignupRequest::collector("111.111.111-11");
//! let err = gate.check(&request).unwrap_err();
//! assert_eq!(err.status_code(), 422);
//! ```
//!
//! ## Dispatch
//!
//! CPF and CNH both have 11 digits. The default [`DispatchPolicy::LengthRouted`]
//! routes every 11-digit value to the CPF validator, so a CNH is only ever
//! recognized under [`DispatchPolicy::Declared`] or through
//! [`validate_as`] with [`DocumentKind::Cnh`].

pub mod error;
pub mod gate;
pub mod signup;

// Re-export the validators
pub use ecoleta_docs_core as core;

pub use error::{Result, SignupError};
pub use gate::{Accepted, DispatchPolicy, DocumentGate, GateConfig};
pub use signup::{SignupRequest, UserType};

pub use ecoleta_docs_core::{
    check_cnh, check_cnpj, check_cpf, check_document, format_cnpj, format_cpf, is_valid_as,
    is_valid_cnh, is_valid_cnpj, is_valid_cpf, is_valid_document, validate_as, CnpjInput,
    DocumentKind, FormattedCnpj, ValidationError,
};
