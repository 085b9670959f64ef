//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ecoleta_docs_core::{cnh, cnpj, cpf, DocumentKind};

fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

pub(crate) fn is_uniform(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Build a CPF from its 9-digit base.
pub fn cpf_from_base(base: &[u8; 9]) -> String {
    let mut digits = base.to_vec();
    digits.extend(cpf::check_digits(base));
    render(&digits)
}

/// Build a CNPJ from its 12-digit base.
pub fn cnpj_from_base(base: &[u8; 12]) -> String {
    let mut digits = base.to_vec();
    digits.extend(cnpj::check_digits(base));
    render(&digits)
}

/// Build a CNH from its 9-digit base, if the base has single-digit check values.
pub fn cnh_from_base(base: &[u8; 9]) -> Option<String> {
    let [dv1, dv2] = cnh::check_digits(base)?;
    let mut digits = base.to_vec();
    digits.extend([dv1, dv2]);
    Some(render(&digits))
}

/// Mask an 11-digit CPF as `NNN.NNN.NNN-NN`.
///
/// Input that is not exactly 11 ASCII digits is returned unchanged.
pub fn mask_cpf(digits: &str) -> String {
    if !is_bare(digits, 11) {
        return digits.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Mask a 14-digit CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// Input that is not exactly 14 ASCII digits is returned unchanged.
pub fn mask_cnpj(digits: &str) -> String {
    if !is_bare(digits, 14) {
        return digits.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

fn is_bare(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Generate a base of `N` decimal digits.
pub fn digit_base<const N: usize>() -> impl Strategy<Value = [u8; N]>
where
    [u8; N]: Arbitrary,
{
    any::<[u8; N]>().prop_map(|base| base.map(|b| b % 10))
}

/// Generate a valid CPF as bare digits.
pub fn valid_cpf() -> impl Strategy<Value = String> {
    digit_base::<9>()
        .prop_map(|base| cpf_from_base(&base))
        .prop_filter("uniform CPF", |s| !is_uniform(s))
}

/// Generate a valid CNPJ as bare digits.
pub fn valid_cnpj() -> impl Strategy<Value = String> {
    digit_base::<12>()
        .prop_map(|base| cnpj_from_base(&base))
        .prop_filter("uniform CNPJ", |s| !is_uniform(s))
}

/// Generate a valid CNH as bare digits.
pub fn valid_cnh() -> impl Strategy<Value = String> {
    digit_base::<9>()
        .prop_filter_map("two-digit CNH check value", |base| cnh_from_base(&base))
        .prop_filter("uniform CNH", |s| !is_uniform(s))
}

/// Generate a document kind.
pub fn document_kind() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![
        Just(DocumentKind::Cpf),
        Just(DocumentKind::Cnpj),
        Just(DocumentKind::Cnh),
    ]
}

/// Generate arbitrary text: punctuation, letters, digits and unicode, up to
/// well past the longest document.
pub fn garbage() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[./ -]{0,20}",
        "[0-9./ -]{0,40}",
        ".{0,200}",
    ]
}

/// A valid document together with its kind.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    /// Bare digits.
    pub digits: String,
    /// Whether [`GeneratedDocument::raw`] should carry the canonical mask.
    /// CNH has no mask and ignores this.
    pub masked: bool,
}

impl GeneratedDocument {
    /// The document as a caller would send it.
    pub fn raw(&self) -> String {
        match (self.kind, self.masked) {
            (DocumentKind::Cpf, true) => mask_cpf(&self.digits),
            (DocumentKind::Cnpj, true) => mask_cnpj(&self.digits),
            _ => self.digits.clone(),
        }
    }
}

impl Arbitrary for GeneratedDocument {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (document_kind(), any::<bool>())
            .prop_flat_map(|(kind, masked)| {
                let digits = match kind {
                    DocumentKind::Cpf => valid_cpf().boxed(),
                    DocumentKind::Cnpj => valid_cnpj().boxed(),
                    DocumentKind::Cnh => valid_cnh().boxed(),
                };
                digits.prop_map(move |digits| GeneratedDocument {
                    kind,
                    digits,
                    masked,
                })
            })
            .boxed()
    }
}
