//! Document kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The kind of Brazilian identity document.
///
/// Serialized as the upper-case tag used in the `documentType` field of a
/// user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Individual taxpayer registry (11 digits).
    #[serde(rename = "CPF")]
    Cpf,
    /// Legal-entity taxpayer registry (14 digits).
    #[serde(rename = "CNPJ")]
    Cnpj,
    /// Driver's license registry (11 digits).
    #[serde(rename = "CNH")]
    Cnh,
}

impl DocumentKind {
    /// Number of digits a document of this kind has after normalization.
    pub const fn expected_len(self) -> usize {
        match self {
            Self::Cpf | Self::Cnh => 11,
            Self::Cnpj => 14,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cnh => "CNH",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CPF" => Ok(Self::Cpf),
            "CNPJ" => Ok(Self::Cnpj),
            "CNH" => Ok(Self::Cnh),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}
