//! # Ecoleta Docs Core
//!
//! Check-digit validation for Brazilian identity documents.
//!
//! This crate contains no I/O and no shared state. Every function is a pure
//! computation over its input and is safe to call from any thread.
//!
//! ## Documents
//!
//! - **CPF** - individual taxpayer registry, 11 digits. See [`cpf`].
//! - **CNPJ** - legal-entity taxpayer registry, 14 digits. See [`cnpj`].
//! - **CNH** - driver's license registry, 11 digits. See [`cnh`].
//!
//! All validators normalize their input first (see [`normalize`]): only the
//! ASCII decimal digits are kept, so `111.444.777-35` and `11144477735` are
//! the same CPF.
//!
//! ## Usage
//!
//! ```rust
//! use ecoleta_docs_core::{format_cnpj, is_valid_cnh, is_valid_cpf, is_valid_document};
//!
//! assert!(is_valid_cpf("111.444.777-35"));
//! assert!(is_valid_cnh("03456781235"));
//! assert!(is_valid_document("11222333000181"));
//!
//! assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(format_cnpj("00000000000000"), "");
//! ```
//!
//! ## Rejection reasons
//!
//! Each `is_valid_*` function has a `check_*` counterpart returning
//! `Result<(), ValidationError>` that says why a document was rejected.

pub mod cnh;
pub mod cnpj;
pub mod cpf;
pub mod dispatch;
pub mod error;
pub mod normalize;
pub mod types;

pub use cnh::{check_cnh, is_valid_cnh};
pub use cnpj::{
    check_cnpj, format_cnpj, is_cnpj_mask, is_valid_cnpj, try_format, CnpjInput, FormattedCnpj,
    CNPJ_MASK_PATTERN,
};
pub use cpf::{check_cpf, format_cpf, is_valid_cpf};
pub use dispatch::{check_document, infer_kind, is_valid_as, is_valid_document, validate_as};
pub use error::{CoreError, ValidationError};
pub use normalize::{digits, Digits};
pub use types::DocumentKind;
