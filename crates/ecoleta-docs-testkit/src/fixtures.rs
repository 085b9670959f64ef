//! Test fixtures and helpers.
//!
//! Random valid documents and ready-made signup requests for integration
//! tests.

use ecoleta_docs::{SignupRequest, UserType};
use ecoleta_docs_core::DocumentKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generators::{
    cnh_from_base, cnpj_from_base, cpf_from_base, is_uniform, mask_cnpj, mask_cpf,
};

fn random_base<const N: usize>(rng: &mut impl Rng) -> [u8; N] {
    let mut base = [0u8; N];
    for d in base.iter_mut() {
        *d = rng.gen_range(0..10);
    }
    base
}

/// A random valid CPF, bare digits.
pub fn random_cpf(rng: &mut impl Rng) -> String {
    loop {
        let cpf = cpf_from_base(&random_base(rng));
        if !is_uniform(&cpf) {
            return cpf;
        }
    }
}

/// A random valid CNPJ, bare digits.
pub fn random_cnpj(rng: &mut impl Rng) -> String {
    loop {
        let cnpj = cnpj_from_base(&random_base(rng));
        if !is_uniform(&cnpj) {
            return cnpj;
        }
    }
}

/// A random valid CNH.
pub fn random_cnh(rng: &mut impl Rng) -> String {
    loop {
        if let Some(cnh) = cnh_from_base(&random_base(rng)) {
            if !is_uniform(&cnh) {
                return cnh;
            }
        }
    }
}

/// A random valid document of the given kind.
pub fn random_document(kind: DocumentKind, rng: &mut impl Rng) -> String {
    match kind {
        DocumentKind::Cpf => random_cpf(rng),
        DocumentKind::Cnpj => random_cnpj(rng),
        DocumentKind::Cnh => random_cnh(rng),
    }
}

/// A source of signup requests with valid documents.
pub struct SignupFixture {
    rng: StdRng,
}

impl SignupFixture {
    /// Create a fixture with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn cpf(&mut self) -> String {
        random_cpf(&mut self.rng)
    }

    pub fn cnpj(&mut self) -> String {
        random_cnpj(&mut self.rng)
    }

    pub fn cnh(&mut self) -> String {
        random_cnh(&mut self.rng)
    }

    /// A collector with a masked CPF and a phone number, no license.
    pub fn collector(&mut self) -> SignupRequest {
        let cpf = mask_cpf(&self.cpf());
        SignupRequest::collector(cpf).with_phone("(11) 98765-4321")
    }

    /// A collector with a masked CPF and a CNH.
    pub fn collector_with_license(&mut self) -> SignupRequest {
        let cnh = self.cnh();
        self.collector().with_license(cnh)
    }

    /// An establishment with a masked CNPJ.
    pub fn establishment(&mut self) -> SignupRequest {
        let cnpj = mask_cnpj(&self.cnpj());
        SignupRequest {
            address: Some("Rua das Flores, 123".into()),
            ..SignupRequest::establishment(cnpj).with_phone("1133334444")
        }
    }

    /// A request of the given user type.
    pub fn for_user_type(&mut self, user_type: UserType) -> SignupRequest {
        match user_type {
            UserType::Collector => self.collector_with_license(),
            UserType::Establishment => self.establishment(),
        }
    }
}

impl Default for SignupFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoleta_docs_core::{is_valid_as, is_valid_cnh, is_valid_cnpj, is_valid_cpf};

    #[test]
    fn test_random_documents_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(is_valid_cpf(&random_cpf(&mut rng)));
            assert!(is_valid_cnpj(random_cnpj(&mut rng)));
            assert!(is_valid_cnh(&random_cnh(&mut rng)));
        }
    }

    #[test]
    fn test_random_document_by_kind() {
        let mut rng = StdRng::seed_from_u64(11);
        for kind in [DocumentKind::Cpf, DocumentKind::Cnpj, DocumentKind::Cnh] {
            let doc = random_document(kind, &mut rng);
            assert_eq!(doc.len(), kind.expected_len());
            assert!(is_valid_as(kind, &doc));
        }
    }

    #[test]
    fn test_seeded_fixture_is_deterministic() {
        let mut a = SignupFixture::with_seed(42);
        let mut b = SignupFixture::with_seed(42);
        assert_eq!(a.collector_with_license(), b.collector_with_license());
        assert_eq!(a.establishment(), b.establishment());
    }

    #[test]
    fn test_fixture_requests_carry_user_type() {
        let mut fixture = SignupFixture::with_seed(1);
        let req = fixture.for_user_type(UserType::Establishment);
        assert_eq!(req.user_type, Some(UserType::Establishment));
        assert!(req.address.is_some());

        let req = fixture.for_user_type(UserType::Collector);
        assert_eq!(req.user_type, Some(UserType::Collector));
        assert!(req.license.is_some());
    }
}
