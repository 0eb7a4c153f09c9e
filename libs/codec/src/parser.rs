//! # BR Code Parser - Strict Static Pix Decoding
//!
//! ## Purpose
//!
//! Decodes a complete BR Code string back into its fields with full
//! integrity checking: every length prefix is honoured in bytes, the CRC is
//! recomputed, the Pix GUI and mandatory fields are required, and known
//! fields are checked against the size constraints of the field registry.
//!
//! Unlike [`crate::validation::validate_payload`], which only looks for gross
//! corruption, a successful [`BrCode::decode`] means the payload is
//! structurally what this crate would have produced.
//!
//! ## Tolerances
//!
//! - Unknown top-level tags are kept in `unknown_fields`; EMV allows other
//!   schemes to share the code
//! - The CRC is compared case-insensitively
//! - Field order is not enforced

use crate::constants::{
    CRC_VALUE_LEN, CURRENCY_BRL, PAYLOAD_FORMAT_INDICATOR, PIX_GUI, TXID_PLACEHOLDER,
};
use crate::error::{PixError, PixResult};
use crate::field::{decode_fields, find_field, TlvField};
use crate::tlv_types::{additional_data, merchant_account, FieldRegistry, FieldTag};
use crate::validation::checksum::crc16;
use fiado_types::{MerchantProfile, TransactionParams};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// A decoded static Pix BR Code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrCode {
    pub pix_key: String,
    pub additional_info: Option<String>,
    pub merchant_category_code: String,
    pub currency: String,
    /// `None` for open-amount codes
    pub amount: Option<Decimal>,
    pub country_code: String,
    pub merchant_name: String,
    pub merchant_city: String,
    /// Txid, `***` when the issuer had none
    pub reference_label: String,
    pub crc: String,
    /// Top-level fields outside the Pix profile, as `(tag, value)`
    pub unknown_fields: Vec<(String, String)>,
}

fn required<'a>(fields: &[TlvField<'a>], tag: FieldTag) -> PixResult<&'a str> {
    find_field(fields, tag.code())
        .map(|field| field.value)
        .ok_or_else(|| PixError::missing(tag.code(), tag.name()))
}

fn check_size(field: &TlvField<'_>, tag: FieldTag) -> PixResult<()> {
    if FieldRegistry::validate_size(tag, field.len()) {
        Ok(())
    } else {
        Err(PixError::unexpected(
            tag.code(),
            format!("{:?}", tag.size_constraint()),
            field.value,
        ))
    }
}

impl BrCode {
    /// Decode and verify a complete payload
    pub fn decode(payload: &str) -> PixResult<Self> {
        let fields = decode_fields(payload)?;

        let crc_field = fields
            .last()
            .filter(|field| field.tag == FieldTag::Crc.code() && field.len() == CRC_VALUE_LEN)
            .ok_or_else(|| PixError::missing(FieldTag::Crc.code(), FieldTag::Crc.name()))?;

        // Covers everything up to and including "6304"
        let covered = &payload[..payload.len() - CRC_VALUE_LEN];
        let calculated = crc16(covered);
        if !calculated.eq_ignore_ascii_case(crc_field.value) {
            return Err(PixError::ChecksumMismatch {
                expected: crc_field.value.to_string(),
                calculated,
            });
        }

        match fields.first() {
            Some(first) if first.tag == FieldTag::PayloadFormatIndicator.code() => {
                if first.value != PAYLOAD_FORMAT_INDICATOR {
                    return Err(PixError::unexpected(
                        first.tag,
                        PAYLOAD_FORMAT_INDICATOR,
                        first.value,
                    ));
                }
            }
            _ => {
                let tag = FieldTag::PayloadFormatIndicator;
                return Err(PixError::missing(tag.code(), tag.name()));
            }
        }

        let mut unknown_fields = Vec::new();
        for field in &fields {
            match FieldTag::from_code(field.tag) {
                Some(tag) => check_size(field, tag)?,
                None => unknown_fields.push((field.tag.to_string(), field.value.to_string())),
            }
        }
        for tag in FieldRegistry::mandatory_fields() {
            required(&fields, tag)?;
        }

        let account = decode_fields(required(&fields, FieldTag::MerchantAccountInfo)?)?;
        let gui = find_field(&account, merchant_account::GUI)
            .ok_or_else(|| PixError::missing("26-00", "Pix GUI"))?;
        if !gui.value.eq_ignore_ascii_case(PIX_GUI) {
            return Err(PixError::unexpected("26-00", PIX_GUI, gui.value));
        }
        let pix_key = find_field(&account, merchant_account::KEY)
            .ok_or_else(|| PixError::missing("26-01", "Pix key"))?
            .value
            .to_string();
        let additional_info = find_field(&account, merchant_account::ADDITIONAL_INFO)
            .map(|field| field.value.to_string());

        let currency = required(&fields, FieldTag::TransactionCurrency)?;
        if currency != CURRENCY_BRL {
            return Err(PixError::unexpected(
                FieldTag::TransactionCurrency.code(),
                CURRENCY_BRL,
                currency,
            ));
        }

        let amount = match find_field(&fields, FieldTag::TransactionAmount.code()) {
            Some(field) => {
                let amount = Decimal::from_str(field.value)
                    .ok()
                    .filter(|amount| *amount > Decimal::ZERO)
                    .ok_or_else(|| PixError::InvalidAmount {
                        amount: field.value.to_string(),
                    })?;
                Some(amount)
            }
            None => None,
        };

        let additional = decode_fields(required(&fields, FieldTag::AdditionalDataField)?)?;
        let reference_label = find_field(&additional, additional_data::REFERENCE_LABEL)
            .ok_or_else(|| PixError::missing("62-05", "Reference Label"))?
            .value
            .to_string();

        Ok(Self {
            pix_key,
            additional_info,
            merchant_category_code: required(&fields, FieldTag::MerchantCategoryCode)?
                .to_string(),
            currency: currency.to_string(),
            amount,
            country_code: required(&fields, FieldTag::CountryCode)?.to_string(),
            merchant_name: required(&fields, FieldTag::MerchantName)?.to_string(),
            merchant_city: required(&fields, FieldTag::MerchantCity)?.to_string(),
            reference_label,
            crc: crc_field.value.to_string(),
            unknown_fields,
        })
    }

    /// Whether the payer chooses the amount
    pub fn is_open_amount(&self) -> bool {
        self.amount.is_none()
    }

    /// Txid, or `None` for the `***` placeholder
    pub fn txid(&self) -> Option<&str> {
        Some(self.reference_label.as_str()).filter(|label| *label != TXID_PLACEHOLDER)
    }

    /// Merchant identity carried by the code
    pub fn merchant_profile(&self) -> MerchantProfile {
        MerchantProfile::new(
            self.pix_key.clone(),
            self.merchant_name.clone(),
            self.merchant_city.clone(),
        )
    }

    /// Transaction parameters carried by the code
    pub fn transaction_params(&self) -> TransactionParams {
        TransactionParams {
            amount: self.amount,
            reference_label: self.txid().map(str::to_string),
            additional_info: self.additional_info.clone(),
        }
    }
}

impl FromStr for BrCode {
    type Err = PixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrCode::decode(s)
    }
}
