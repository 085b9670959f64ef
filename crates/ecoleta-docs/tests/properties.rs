//! Properties every validator must hold for arbitrary input.

use ecoleta_docs::core::digits;
use ecoleta_docs::{
    format_cnpj, format_cpf, is_valid_as, is_valid_cnh, is_valid_cnpj, is_valid_cpf,
    is_valid_document, DocumentKind,
};
use ecoleta_docs_testkit::generators::{
    cnh_from_base, digit_base, garbage, mask_cnpj, valid_cnh, valid_cnpj, valid_cpf,
    GeneratedDocument,
};
use ecoleta_docs_testkit::verify_all_vectors;
use proptest::prelude::*;

#[test]
fn test_golden_vectors() {
    for (name, passed, misses) in verify_all_vectors() {
        assert!(passed, "vector '{name}' failed: {misses:?}");
    }
}

#[test]
fn test_uniform_sequences_never_valid() {
    for d in 0..=9 {
        let eleven = d.to_string().repeat(11);
        let fourteen = d.to_string().repeat(14);
        assert!(!is_valid_cpf(&eleven));
        assert!(!is_valid_cnh(&eleven));
        assert!(!is_valid_cnpj(fourteen.as_str()));
        assert!(!is_valid_document(&eleven));
        assert!(!is_valid_document(&fourteen));
    }
}

#[test]
fn test_oversized_input_rejected() {
    let huge = "52998224725".repeat(10_000);
    assert!(!is_valid_cpf(&huge));
    assert!(!is_valid_cnpj(huge.as_str()));
    assert!(!is_valid_cnh(&huge));
    assert!(!is_valid_document(&huge));
    assert_eq!(format_cnpj(huge.as_str()), "");
}

proptest! {
    #[test]
    fn test_validators_never_panic(raw in garbage()) {
        let before = raw.clone();
        let _ = is_valid_cpf(&raw);
        let _ = is_valid_cnpj(raw.as_str());
        let _ = is_valid_cnh(&raw);
        let _ = is_valid_document(&raw);
        let _ = format_cnpj(raw.as_str());
        let _ = format_cpf(&raw);
        prop_assert_eq!(raw, before);
    }

    #[test]
    fn test_wrong_digit_count_never_valid(raw in garbage()) {
        let n = digits(&raw).len();
        if n != 11 {
            prop_assert!(!is_valid_cpf(&raw));
            prop_assert!(!is_valid_cnh(&raw));
        }
        if n != 14 {
            prop_assert!(!is_valid_cnpj(raw.as_str()));
        }
        if n != 11 && n != 14 {
            prop_assert!(!is_valid_document(&raw));
        }
    }

    #[test]
    fn test_dispatcher_accepts_valid_cpf(cpf in valid_cpf()) {
        prop_assert!(is_valid_document(&cpf));
    }

    #[test]
    fn test_dispatcher_accepts_valid_cnpj(cnpj in valid_cnpj()) {
        prop_assert!(is_valid_document(&cnpj));
        prop_assert!(is_valid_document(&mask_cnpj(&cnpj)));
    }

    #[test]
    fn test_dispatcher_matches_cpf_on_eleven_digits(cnh in valid_cnh()) {
        // Length routing sends every 11-digit value to the CPF validator.
        prop_assert_eq!(is_valid_document(&cnh), is_valid_cpf(&cnh));
        prop_assert!(is_valid_as(DocumentKind::Cnh, &cnh));
    }

    #[test]
    fn test_cnh_built_from_check_digits_validates(base in digit_base::<9>()) {
        if let Some(cnh) = cnh_from_base(&base) {
            prop_assert_eq!(is_valid_cnh(&cnh), !digits(&cnh).is_uniform());
        }
    }

    #[test]
    fn test_cnpj_format_roundtrip(cnpj in valid_cnpj()) {
        let formatted = format_cnpj(cnpj.as_str());
        prop_assert_eq!(&formatted, &mask_cnpj(&cnpj));
        prop_assert!(is_valid_cnpj(formatted.as_str()));
        prop_assert_eq!(format_cnpj(formatted.as_str()), formatted);
    }

    #[test]
    fn test_altered_last_check_digit_detected(doc in any::<GeneratedDocument>(), delta in 1u8..10) {
        let mut d = digits(&doc.digits).into_vec();
        let last = d.len() - 1;
        d[last] = (d[last] + delta) % 10;
        let altered: String = d.iter().map(|x| x.to_string()).collect();
        prop_assert!(!is_valid_as(doc.kind, &altered));
    }
}
