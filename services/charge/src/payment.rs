//! # Payment Display
//!
//! Decides what a customer sees on a note's payment page: a Pix code with
//! its QR image, the bare key when no trustworthy code could be produced, or
//! nothing when the store has not set up Pix.
//!
//! A code is only shown after it passes the configured validation level.
//! Any generation or validation failure degrades to the key; a broken QR
//! code is never rendered.

use crate::links::qr_image_url;
use crate::merchant::{declared_kind_mismatch, merchant_from_store};
use fiado_config::FiadoConfig;
use fiado_types::{NoteRecord, StoreProfile, TransactionParams};
use pix_codec::{constants::MAX_TXID_LEN, generate_payload, PayloadValidator};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// What the payment page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentDisplay {
    /// Copy-and-paste code, its QR image, and the key as a manual fallback
    Code {
        br_code: String,
        qr_image_url: String,
        fallback_key: String,
    },
    /// Key only, for manual entry in the banking app
    KeyOnly { key: String },
    NotConfigured,
}

impl PaymentDisplay {
    /// Text offered for copying, if any
    pub fn copy_text(&self) -> Option<&str> {
        match self {
            PaymentDisplay::Code { br_code, .. } => Some(br_code.as_str()),
            PaymentDisplay::KeyOnly { key } => Some(key.as_str()),
            PaymentDisplay::NotConfigured => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, PaymentDisplay::Code { .. })
    }
}

/// Transaction parameters for a note: its amount when positive, and the
/// leading characters of its id as txid
pub fn note_params(note: &NoteRecord) -> TransactionParams {
    let mut params = TransactionParams::default()
        .with_reference_label(note.id.chars().take(MAX_TXID_LEN).collect::<String>());
    if note.amount > Decimal::ZERO {
        params = params.with_amount(note.amount);
    }
    params
}

/// Prepare the payment display for one note
pub fn prepare_payment(
    profile: &StoreProfile,
    note: &NoteRecord,
    config: &FiadoConfig,
) -> PaymentDisplay {
    let merchant = match merchant_from_store(profile, &config.pix) {
        Ok(merchant) => merchant,
        Err(_) => return PaymentDisplay::NotConfigured,
    };

    if let Some((declared, detected)) = declared_kind_mismatch(profile) {
        warn!(
            declared = %declared,
            detected = %detected,
            "Pix key does not look like its declared kind"
        );
    }

    let key_only = || PaymentDisplay::KeyOnly {
        key: merchant.pix_key.clone(),
    };

    let br_code = match generate_payload(&merchant, &note_params(note)) {
        Ok(code) => code,
        Err(err) => {
            warn!(note_id = %note.id, error = %err, "Pix code generation failed, showing key only");
            return key_only();
        }
    };

    let validator = PayloadValidator::new(config.pix.validation_level);
    if !validator.is_valid(&br_code) {
        warn!(note_id = %note.id, "Generated Pix code failed validation, showing key only");
        return key_only();
    }

    debug!(note_id = %note.id, "Prepared Pix payment");
    PaymentDisplay::Code {
        qr_image_url: qr_image_url(&br_code, &config.charge),
        fallback_key: merchant.pix_key.clone(),
        br_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiado_types::PixKeyKind;
    use pix_codec::BrCode;
    use rust_decimal_macros::dec;

    fn store() -> StoreProfile {
        StoreProfile {
            store_name: "Mercearia da Ana".to_string(),
            pix_key: Some("11144477735".to_string()),
            pix_kind: Some(PixKeyKind::Cpf),
            pix_name: None,
            pix_city: Some("São Paulo".to_string()),
        }
    }

    fn note(id: &str, amount: Decimal) -> NoteRecord {
        NoteRecord {
            id: id.to_string(),
            amount,
            description: None,
        }
    }

    #[test]
    fn test_note_params() {
        let params = note_params(&note("9f1c2d3e-4b5a-6789-0abc-def012345678", dec!(41)));
        assert_eq!(params.amount, Some(dec!(41)));
        assert_eq!(
            params.reference_label.as_deref(),
            Some("9f1c2d3e-4b5a-6789-0abc-d")
        );

        let params = note_params(&note("n1", dec!(0)));
        assert_eq!(params.amount, None);
    }

    #[test]
    fn test_prepare_payment_code() {
        let display = prepare_payment(&store(), &note("NOTA123", dec!(41.00)), &FiadoConfig::default());

        match &display {
            PaymentDisplay::Code {
                br_code,
                qr_image_url,
                fallback_key,
            } => {
                assert!(br_code.ends_with("630450E7"));
                assert!(qr_image_url.starts_with(
                    "https://api.qrserver.com/v1/create-qr-code/?size=256x256&data=000201"
                ));
                assert_eq!(fallback_key, "11144477735");
            }
            other => panic!("expected a code, got {other:?}"),
        }
        assert_eq!(display.copy_text().map(str::len), Some(129));
    }

    #[test]
    fn test_txid_from_uuid_note_id() {
        let display = prepare_payment(
            &store(),
            &note("9f1c2d3e-4b5a-6789-0abc-def012345678", dec!(10)),
            &FiadoConfig::default(),
        );
        let code = BrCode::decode(display.copy_text().unwrap()).unwrap();
        // Hyphens are dropped by the txid normalizer after truncation
        assert_eq!(code.txid(), Some("9f1c2d3e4b5a67890abcd"));
    }

    #[test]
    fn test_not_configured() {
        let mut profile = store();
        profile.pix_key = Some("  ".to_string());
        let display = prepare_payment(&profile, &note("n1", dec!(5)), &FiadoConfig::default());
        assert_eq!(display, PaymentDisplay::NotConfigured);
        assert_eq!(display.copy_text(), None);
    }

    #[test]
    fn test_key_only_when_generation_fails() {
        let mut profile = store();
        profile.pix_key = Some("+55 11".to_string());
        let display = prepare_payment(&profile, &note("n1", dec!(5)), &FiadoConfig::default());
        assert_eq!(
            display,
            PaymentDisplay::KeyOnly {
                key: "+55 11".to_string()
            }
        );
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_value(PaymentDisplay::KeyOnly {
            key: "k".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "key_only");
        assert_eq!(json["key"], "k");
    }
}
