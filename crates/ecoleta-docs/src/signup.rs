//! Signup request body.

use ecoleta_docs_core::DocumentKind;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Who is signing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Waste collector, an individual identified by CPF.
    Collector,
    /// Waste-generating establishment, identified by CNPJ.
    Establishment,
}

impl UserType {
    pub fn default_document_kind(self) -> DocumentKind {
        match self {
            UserType::Collector => DocumentKind::Cpf,
            UserType::Establishment => DocumentKind::Cnpj,
        }
    }
}

/// The profile fields of a signup request that the gate looks at.
///
/// Every field is optional here; [`DocumentGate`](crate::DocumentGate)
/// decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_type: Option<UserType>,
    /// Declared kind of `document_value` ("CPF", "CNPJ" or "CNH").
    pub document_type: Option<String>,
    pub document_value: Option<String>,
    pub address: Option<String>,
    /// Driver's license (CNH) number.
    pub license: Option<String>,
}

impl SignupRequest {
    /// Parse a JSON request body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn collector(document: impl Into<String>) -> Self {
        Self {
            user_type: Some(UserType::Collector),
            document_type: Some(DocumentKind::Cpf.to_string()),
            document_value: Some(document.into()),
            ..Self::default()
        }
    }

    pub fn establishment(document: impl Into<String>) -> Self {
        Self {
            user_type: Some(UserType::Establishment),
            document_type: Some(DocumentKind::Cnpj.to_string()),
            document_value: Some(document.into()),
            ..Self::default()
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_body() {
        let body = r#"{
            "name": "Maria",
            "email": "maria@example.com",
            "phone": "11987654321",
            "userType": "collector",
            "documentType": "CPF",
            "documentValue": "52998224725",
            "license": "03456781235"
        }"#;

        let req = SignupRequest::from_json(body).unwrap();
        assert_eq!(req.user_type, Some(UserType::Collector));
        assert_eq!(req.document_type.as_deref(), Some("CPF"));
        assert_eq!(req.document_value.as_deref(), Some("52998224725"));
        assert_eq!(req.license.as_deref(), Some("03456781235"));
        assert_eq!(req.address, None);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let req = SignupRequest::from_json("{}").unwrap();
        assert_eq!(req, SignupRequest::default());
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = SignupRequest::from_json("{").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_default_document_kind() {
        assert_eq!(UserType::Collector.default_document_kind(), DocumentKind::Cpf);
        assert_eq!(UserType::Establishment.default_document_kind(), DocumentKind::Cnpj);
    }
}
