//! Records read from the ledger's data layer
//!
//! Field names on the wire follow the data layer's column names; the Rust
//! names describe what the column holds.

use crate::pix_key::PixKeyKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store profile columns needed to issue a Pix charge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    #[serde(rename = "nome_loja", default)]
    pub store_name: String,
    #[serde(rename = "pix_chave", default)]
    pub pix_key: Option<String>,
    #[serde(rename = "pix_tipo", default)]
    pub pix_kind: Option<PixKeyKind>,
    #[serde(rename = "pix_nome", default)]
    pub pix_name: Option<String>,
    #[serde(rename = "pix_cidade", default)]
    pub pix_city: Option<String>,
}

impl StoreProfile {
    /// Trimmed Pix key, `None` when unset or blank
    pub fn configured_key(&self) -> Option<&str> {
        self.pix_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// A credit note (sale on credit) owed by a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

/// Customer contact used when sending a charge reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "apelido", default)]
    pub nickname: Option<String>,
}

impl CustomerRecord {
    /// Nickname when set, otherwise the full name
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|nick| !nick.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_store_profile_from_data_layer_json() {
        let json = r#"{
            "nome_loja": "Mercearia da Ana",
            "pix_chave": " 11144477735 ",
            "pix_tipo": "cpf",
            "pix_nome": null,
            "pix_cidade": "São Paulo"
        }"#;

        let profile: StoreProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.store_name, "Mercearia da Ana");
        assert_eq!(profile.pix_kind, Some(PixKeyKind::Cpf));
        assert_eq!(profile.configured_key(), Some("11144477735"));
        assert!(profile.pix_name.is_none());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let profile = StoreProfile {
            pix_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.configured_key(), None);
        assert_eq!(StoreProfile::default().configured_key(), None);
    }

    #[test]
    fn test_note_amount_accepts_json_number() {
        let note: NoteRecord =
            serde_json::from_str(r#"{"id": "abc", "valor": 41.5, "descricao": null}"#).unwrap();
        assert_eq!(note.amount, dec!(41.5));
    }

    #[test]
    fn test_customer_display_name() {
        let mut customer = CustomerRecord {
            name: "José da Silva".to_string(),
            phone: "(11) 99876-5432".to_string(),
            nickname: Some("Zé".to_string()),
        };
        assert_eq!(customer.display_name(), "Zé");

        customer.nickname = Some(" ".to_string());
        assert_eq!(customer.display_name(), "José da Silva");
    }
}
