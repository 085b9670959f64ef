//! Golden test vectors.
//!
//! Known documents with their expected verdicts. Every validator change must
//! keep these passing.

use ecoleta_docs_core::{format_cnpj, format_cpf, is_valid_as, is_valid_document, DocumentKind};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Kind the input is checked as.
    pub kind: DocumentKind,
    /// Raw input.
    pub input: &'static str,
    /// Expected verdict of the kind's validator.
    pub valid: bool,
    /// Expected verdict of the length-routed dispatcher.
    pub dispatch_valid: bool,
    /// Expected formatter output (CPF and CNPJ only). Empty when invalid.
    pub formatted: Option<&'static str>,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "CPF bare digits",
            kind: DocumentKind::Cpf,
            input: "52998224725",
            valid: true,
            dispatch_valid: true,
            formatted: Some("529.982.247-25"),
        },
        GoldenVector {
            name: "CPF punctuated",
            kind: DocumentKind::Cpf,
            input: "111.444.777-35",
            valid: true,
            dispatch_valid: true,
            formatted: Some("111.444.777-35"),
        },
        GoldenVector {
            name: "CPF all ones",
            kind: DocumentKind::Cpf,
            input: "11111111111",
            valid: false,
            dispatch_valid: false,
            formatted: Some(""),
        },
        GoldenVector {
            name: "CPF wrong second check digit",
            kind: DocumentKind::Cpf,
            input: "529.982.247-26",
            valid: false,
            dispatch_valid: false,
            formatted: Some(""),
        },
        GoldenVector {
            name: "CNPJ bare digits",
            kind: DocumentKind::Cnpj,
            input: "11222333000181",
            valid: true,
            dispatch_valid: true,
            formatted: Some("11.222.333/0001-81"),
        },
        GoldenVector {
            name: "CNPJ masked",
            kind: DocumentKind::Cnpj,
            input: "11.222.333/0001-81",
            valid: true,
            dispatch_valid: true,
            formatted: Some("11.222.333/0001-81"),
        },
        GoldenVector {
            name: "CNPJ partially masked",
            kind: DocumentKind::Cnpj,
            input: "11222333/0001-81",
            valid: false,
            dispatch_valid: true,
            formatted: Some(""),
        },
        GoldenVector {
            name: "CNPJ all zeros",
            kind: DocumentKind::Cnpj,
            input: "00000000000000",
            valid: false,
            dispatch_valid: false,
            formatted: Some(""),
        },
        GoldenVector {
            name: "CNH leading zero",
            kind: DocumentKind::Cnh,
            input: "03456781235",
            valid: true,
            dispatch_valid: false,
            formatted: None,
        },
        GoldenVector {
            name: "CNH second check value zero",
            kind: DocumentKind::Cnh,
            input: "10000000090",
            valid: true,
            dispatch_valid: false,
            formatted: None,
        },
        GoldenVector {
            name: "CNH two-digit check value",
            kind: DocumentKind::Cnh,
            input: "12345678911",
            valid: false,
            dispatch_valid: false,
            formatted: None,
        },
        GoldenVector {
            name: "CNH all sevens",
            kind: DocumentKind::Cnh,
            input: "77777777777",
            valid: false,
            dispatch_valid: false,
            formatted: None,
        },
        GoldenVector {
            name: "Empty input",
            kind: DocumentKind::Cpf,
            input: "",
            valid: false,
            dispatch_valid: false,
            formatted: Some(""),
        },
        GoldenVector {
            name: "Punctuation only",
            kind: DocumentKind::Cnpj,
            input: "../-",
            valid: false,
            dispatch_valid: false,
            formatted: Some(""),
        },
    ]
}

/// Run one vector, returning a description of every expectation it misses.
pub fn check_vector(vector: &GoldenVector) -> Vec<String> {
    let mut misses = Vec::new();

    let valid = is_valid_as(vector.kind, vector.input);
    if valid != vector.valid {
        misses.push(format!("validator returned {valid}"));
    }

    let dispatch_valid = is_valid_document(vector.input);
    if dispatch_valid != vector.dispatch_valid {
        misses.push(format!("dispatcher returned {dispatch_valid}"));
    }

    if let Some(expected) = vector.formatted {
        let formatted = match vector.kind {
            DocumentKind::Cpf => format_cpf(vector.input),
            DocumentKind::Cnpj => format_cnpj(vector.input),
            DocumentKind::Cnh => String::new(),
        };
        if formatted != expected {
            misses.push(format!("formatter returned {formatted:?}"));
        }
    }

    misses
}

/// Verify all golden vectors.
///
/// Returns `(name, passed, misses)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, Vec<String>)> {
    all_vectors()
        .iter()
        .map(|v| {
            let misses = check_vector(v);
            (v.name.to_string(), misses.is_empty(), misses)
        })
        .collect()
}
