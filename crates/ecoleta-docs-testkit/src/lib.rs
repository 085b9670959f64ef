//! # Ecoleta Docs Testkit
//!
//! Testing utilities for Ecoleta document validation.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known documents with their expected verdicts
//! - **Generators**: Proptest strategies producing valid documents and garbage
//! - **Fixtures**: Random valid documents and signup requests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use ecoleta_docs_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, misses) in verify_all_vectors() {
//!     assert!(passed, "{name}: {misses:?}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ecoleta_docs_testkit::generators::GeneratedDocument;
//!
//! proptest! {
//!     #[test]
//!     fn generated_documents_validate(doc: GeneratedDocument) {
//!         prop_assert!(ecoleta_docs_core::is_valid_as(doc.kind, &doc.raw()));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use ecoleta_docs::DocumentGate;
//! use ecoleta_docs_testkit::fixtures::SignupFixture;
//!
//! let mut fixture = SignupFixture::with_seed(7);
//! let request = fixture.establishment();
//! assert!(DocumentGate::default().accepts(&request));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{random_cnh, random_cnpj, random_cpf, random_document, SignupFixture};
pub use generators::{cnh_from_base, cnpj_from_base, cpf_from_base, GeneratedDocument};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
