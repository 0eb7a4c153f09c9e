//! Pix key kinds as stored by the data layer and as recognised by the normalizer.

use crate::common::errors::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of a Pix key
///
/// The serialized names match the `pix_tipo` column of the store profile.
/// `Opaque` is never declared by a merchant; it is what the normalizer reports
/// for keys that fit the field but match none of the enumerated shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyKind {
    Cpf,
    Cnpj,
    Email,
    #[serde(rename = "telefone")]
    Phone,
    #[serde(rename = "aleatoria")]
    Random,
    #[serde(rename = "outra")]
    Opaque,
}

impl PixKeyKind {
    /// Data-layer name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PixKeyKind::Cpf => "cpf",
            PixKeyKind::Cnpj => "cnpj",
            PixKeyKind::Email => "email",
            PixKeyKind::Phone => "telefone",
            PixKeyKind::Random => "aleatoria",
            PixKeyKind::Opaque => "outra",
        }
    }

    /// Kinds a merchant may declare in their profile
    pub fn declarable() -> [PixKeyKind; 5] {
        [
            PixKeyKind::Cpf,
            PixKeyKind::Cnpj,
            PixKeyKind::Email,
            PixKeyKind::Phone,
            PixKeyKind::Random,
        ]
    }
}

impl fmt::Display for PixKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PixKeyKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(PixKeyKind::Cpf),
            "cnpj" => Ok(PixKeyKind::Cnpj),
            "email" => Ok(PixKeyKind::Email),
            "telefone" | "phone" => Ok(PixKeyKind::Phone),
            "aleatoria" | "random" | "evp" => Ok(PixKeyKind::Random),
            _ => Err(TypeError::UnknownPixKeyKind {
                input: s.to_string(),
            }),
        }
    }
}

/// A normalized Pix key together with its recognised kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixKey {
    pub kind: PixKeyKind,
    pub value: String,
}

impl PixKey {
    pub fn new(kind: PixKeyKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for PixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
