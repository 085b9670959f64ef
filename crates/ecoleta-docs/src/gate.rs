//! The signup document gate.
//!
//! Sits in front of profile creation and rejects requests whose documents
//! do not validate. Raw document values are never logged.

use ecoleta_docs_core::normalize::{digit_count, digits};
use ecoleta_docs_core::{check_cnh, check_document, infer_kind, validate_as, DocumentKind};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignupError};
use crate::signup::{SignupRequest, UserType};

/// Phone numbers carry a two-digit area code and an 8 or 9 digit number.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

/// How the gate decides which validator a document goes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Infer the kind from the digit count: 11 is CPF, 14 is CNPJ. The
    /// license also goes through length routing, so it is checked as a CPF.
    #[default]
    LengthRouted,
    /// Use the declared `documentType` (or the user type's default kind)
    /// and check the license as a CNH.
    Declared,
}

/// Configuration for the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub policy: DispatchPolicy,
    /// Reject collectors that did not send a license.
    pub require_license_for_collectors: bool,
    /// Check that the phone number has 10 or 11 digits.
    pub validate_phone: bool,
}

impl GateConfig {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A request that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    /// The kind the document validated as.
    pub kind: DocumentKind,
    /// The document's normalized digits.
    pub document: String,
    /// The license's normalized digits, if one was sent.
    pub license: Option<String>,
}

/// Validates the documents of a signup request.
#[derive(Debug, Clone, Default)]
pub struct DocumentGate {
    config: GateConfig,
}

impl DocumentGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Check a signup request.
    ///
    /// This performs, in order:
    /// - Document presence
    /// - Document validation according to the dispatch policy
    /// - License validation, when a license is present
    /// - License presence for collectors, when configured
    /// - Phone digit count, when configured
    pub fn check(&self, request: &SignupRequest) -> Result<Accepted> {
        let result = self.check_inner(request);
        match &result {
            Ok(accepted) => {
                tracing::debug!(
                    kind = %accepted.kind,
                    has_license = accepted.license.is_some(),
                    "signup documents accepted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    user_type = ?request.user_type,
                    policy = ?self.config.policy,
                    error = %e,
                    "signup rejected"
                );
            }
        }
        result
    }

    /// Returns true if the request passes the gate.
    pub fn accepts(&self, request: &SignupRequest) -> bool {
        self.check_inner(request).is_ok()
    }

    fn check_inner(&self, request: &SignupRequest) -> Result<Accepted> {
        // 1. Document must be present
        let document = non_empty(&request.document_value).ok_or(SignupError::MissingDocument)?;

        // 2. Document
        let kind = self.resolve_document(request, document)?;

        // 3. License
        let license = non_empty(&request.license);
        if let Some(license) = license {
            let checked = match self.config.policy {
                DispatchPolicy::LengthRouted => check_document(license).map(|_| ()),
                DispatchPolicy::Declared => check_cnh(license),
            };
            checked.map_err(|reason| SignupError::InvalidLicense { reason })?;
        } else if self.config.require_license_for_collectors
            && request.user_type == Some(UserType::Collector)
        {
            return Err(SignupError::MissingLicense);
        }

        // 4. Phone
        if self.config.validate_phone {
            let count = request.phone.as_deref().map_or(0, digit_count);
            if !PHONE_DIGITS.contains(&count) {
                return Err(SignupError::InvalidPhone { digits: count });
            }
        }

        Ok(Accepted {
            kind,
            document: digits(document).to_string(),
            license: license.map(|l| digits(l).to_string()),
        })
    }

    fn resolve_document(&self, request: &SignupRequest, document: &str) -> Result<DocumentKind> {
        let declared = match self.config.policy {
            DispatchPolicy::LengthRouted => None,
            DispatchPolicy::Declared => match non_empty(&request.document_type) {
                Some(tag) => Some(tag.parse::<DocumentKind>()?),
                None => request.user_type.map(UserType::default_document_kind),
            },
        };

        match declared {
            Some(kind) => validate_as(kind, document)
                .map(|_| kind)
                .map_err(|reason| SignupError::InvalidDocument {
                    kind: Some(kind),
                    reason,
                }),
            None => check_document(document).map_err(|reason| SignupError::InvalidDocument {
                kind: infer_kind(document),
                reason,
            }),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoleta_docs_core::ValidationError;

    const CPF: &str = "529.982.247-25";
    const CNPJ: &str = "11.222.333/0001-81";
    const CNH: &str = "03456781235";

    fn declared() -> DocumentGate {
        DocumentGate::new(GateConfig {
            policy: DispatchPolicy::Declared,
            ..GateConfig::default()
        })
    }

    #[test]
    fn test_default_config_is_length_routed() {
        let config = GateConfig::default();
        assert_eq!(config.policy, DispatchPolicy::LengthRouted);
        assert!(!config.require_license_for_collectors);
        assert!(!config.validate_phone);
    }

    #[test]
    fn test_config_from_json() {
        let config = GateConfig::from_json(r#"{"policy": "declared", "validate_phone": true}"#).unwrap();
        assert_eq!(config.policy, DispatchPolicy::Declared);
        assert!(config.validate_phone);
        assert!(!config.require_license_for_collectors);

        let err = GateConfig::from_json(r#"{"policy": "guess"}"#).unwrap_err();
        assert!(matches!(err, SignupError::Json(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_accepts_cpf_and_cnpj() {
        let gate = DocumentGate::default();

        let accepted = gate.check(&SignupRequest::collector(CPF)).unwrap();
        assert_eq!(accepted.kind, DocumentKind::Cpf);
        assert_eq!(accepted.document, "52998224725");

        let accepted = gate.check(&SignupRequest::establishment(CNPJ)).unwrap();
        assert_eq!(accepted.kind, DocumentKind::Cnpj);
        assert_eq!(accepted.document, "11222333000181");
    }

    #[test]
    fn test_missing_document() {
        let gate = DocumentGate::default();
        let err = gate.check(&SignupRequest::default()).unwrap_err();
        assert!(matches!(err, SignupError::MissingDocument));

        let err = gate.check(&SignupRequest::collector("")).unwrap_err();
        assert!(matches!(err, SignupError::MissingDocument));
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_invalid_document() {
        let gate = DocumentGate::default();
        let err = gate.check(&SignupRequest::collector("11111111111")).unwrap_err();
        assert!(matches!(
            err,
            SignupError::InvalidDocument {
                kind: Some(DocumentKind::Cpf),
                reason: ValidationError::RepeatedDigits
            }
        ));
    }

    #[test]
    fn test_length_routed_license_checked_as_cpf() {
        let gate = DocumentGate::default();

        let req = SignupRequest::collector(CPF).with_license(CNH);
        assert!(matches!(
            gate.check(&req),
            Err(SignupError::InvalidLicense { .. })
        ));

        // A CPF-shaped license passes under length routing.
        let req = SignupRequest::collector(CPF).with_license("111.444.777-35");
        assert!(gate.accepts(&req));
    }

    #[test]
    fn test_declared_license_checked_as_cnh() {
        let gate = declared();

        let req = SignupRequest::collector(CPF).with_license(CNH);
        let accepted = gate.check(&req).unwrap();
        assert_eq!(accepted.license.as_deref(), Some(CNH));

        let req = SignupRequest::collector(CPF).with_license("111.444.777-35");
        assert!(!gate.accepts(&req));
    }

    #[test]
    fn test_declared_kind_overrides_length() {
        let gate = declared();
        let req = SignupRequest {
            document_type: Some("CNH".into()),
            document_value: Some(CNH.into()),
            ..SignupRequest::default()
        };
        assert_eq!(gate.check(&req).unwrap().kind, DocumentKind::Cnh);

        // The same request under length routing is checked as a CPF.
        assert!(!DocumentGate::default().accepts(&req));
    }

    #[test]
    fn test_declared_falls_back_to_user_type() {
        let gate = declared();
        let req = SignupRequest {
            user_type: Some(UserType::Establishment),
            document_value: Some(CPF.into()),
            ..SignupRequest::default()
        };
        assert!(matches!(
            gate.check(&req),
            Err(SignupError::InvalidDocument {
                kind: Some(DocumentKind::Cnpj),
                reason: ValidationError::MalformedText
            })
        ));
    }

    #[test]
    fn test_declared_unknown_kind() {
        let gate = declared();
        let req = SignupRequest {
            document_type: Some("RG".into()),
            document_value: Some(CPF.into()),
            ..SignupRequest::default()
        };
        let err = gate.check(&req).unwrap_err();
        assert!(matches!(err, SignupError::UnknownKind(_)));
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_require_license_for_collectors() {
        let gate = DocumentGate::new(GateConfig {
            require_license_for_collectors: true,
            ..GateConfig::default()
        });

        assert!(matches!(
            gate.check(&SignupRequest::collector(CPF)),
            Err(SignupError::MissingLicense)
        ));
        // Establishments do not need one.
        assert!(gate.accepts(&SignupRequest::establishment(CNPJ)));
    }

    #[test]
    fn test_phone_digit_count() {
        let gate = DocumentGate::new(GateConfig {
            validate_phone: true,
            ..GateConfig::default()
        });

        assert!(gate.accepts(&SignupRequest::collector(CPF).with_phone("(11) 98765-4321")));
        assert!(gate.accepts(&SignupRequest::collector(CPF).with_phone("1133334444")));
        assert!(matches!(
            gate.check(&SignupRequest::collector(CPF).with_phone("98765-4321")),
            Err(SignupError::InvalidPhone { digits: 9 })
        ));
        assert!(matches!(
            gate.check(&SignupRequest::collector(CPF)),
            Err(SignupError::InvalidPhone { digits: 0 })
        ));
    }
}
