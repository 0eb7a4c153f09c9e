//! # Pix Payload Builder - Static BR Code Assembly
//!
//! ## Purpose
//!
//! Produces the "copia e cola" text of a static Pix QR code from a
//! [`MerchantProfile`] and [`TransactionParams`]. The same text is handed to
//! the QR renderer and offered for copying, so both paths get identical bytes.
//!
//! ## Architecture
//!
//! ```text
//! MerchantProfile ─┐                                        ┌─> QR renderer
//!                  ├─> normalize ─> field codec ─> CRC16 ──┤
//! TransactionParams┘                                        └─> copy & paste
//! ```
//!
//! ## Guarantees
//!
//! - Fields are emitted in the fixed order of [`FieldTag::emission_order`]
//! - Deterministic: identical inputs give identical payloads
//! - All-or-nothing: any normalization or encoding failure aborts with a
//!   [`PixError`]; nothing partial is ever returned

use crate::constants::{
    COUNTRY_CODE, CRC_FIELD_PREFIX, CURRENCY_BRL, MAX_ADDITIONAL_INFO_LEN, MAX_AMOUNT_LEN,
    MAX_MERCHANT_CITY_LEN, MAX_MERCHANT_NAME_LEN, MERCHANT_CATEGORY_CODE,
    PAYLOAD_FORMAT_INDICATOR, PIX_GUI,
};
use crate::error::{PixError, PixResult};
use crate::field::{template, tlv};
use crate::normalize::{classify_pix_key, normalize_field_text, normalize_txid};
use crate::tlv_types::{additional_data, merchant_account, FieldTag};
use crate::validation::checksum::crc16;
use fiado_types::{MerchantProfile, TransactionParams};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Format a transaction amount for field 54: two decimals, `.` separator
///
/// Rounds half away from zero to cents. Fails if the rounded amount is not
/// positive or needs more than 13 characters.
pub fn format_amount(amount: Decimal) -> PixResult<String> {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded <= Decimal::ZERO {
        return Err(PixError::InvalidAmount {
            amount: amount.to_string(),
        });
    }

    let formatted = format!("{rounded:.2}");
    if formatted.len() > MAX_AMOUNT_LEN {
        return Err(PixError::AmountFieldTooLong {
            length: formatted.len(),
            formatted,
            limit: MAX_AMOUNT_LEN,
        });
    }
    Ok(formatted)
}

/// Convert a float amount, rejecting NaN and infinities
pub fn amount_from_f64(amount: f64) -> PixResult<Decimal> {
    Decimal::from_f64(amount).ok_or_else(|| PixError::InvalidAmount {
        amount: amount.to_string(),
    })
}

/// Builder for static Pix BR Code payloads
#[derive(Debug, Clone)]
pub struct PixPayloadBuilder {
    merchant: MerchantProfile,
    params: TransactionParams,
}

impl PixPayloadBuilder {
    /// Start an open-amount payload with no reference for this merchant
    pub fn new(merchant: MerchantProfile) -> Self {
        Self {
            merchant,
            params: TransactionParams::default(),
        }
    }

    /// Replace all transaction parameters at once
    pub fn with_params(mut self, params: TransactionParams) -> Self {
        self.params = params;
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.params.amount = Some(amount);
        self
    }

    pub fn reference_label(mut self, label: impl Into<String>) -> Self {
        self.params.reference_label = Some(label.into());
        self
    }

    pub fn additional_info(mut self, info: impl Into<String>) -> Self {
        self.params.additional_info = Some(info.into());
        self
    }

    /// Assemble the payload, CRC included
    pub fn build(&self) -> PixResult<String> {
        let key = classify_pix_key(&self.merchant.pix_key)?;
        let merchant_name = normalize_field_text(
            "merchant name",
            &self.merchant.merchant_name,
            MAX_MERCHANT_NAME_LEN,
        )?;
        let merchant_city = normalize_field_text(
            "merchant city",
            &self.merchant.merchant_city,
            MAX_MERCHANT_CITY_LEN,
        )?;
        let additional_info = match self.params.additional_info.as_deref() {
            Some(info) if !info.is_empty() => Some(normalize_field_text(
                "additional info",
                info,
                MAX_ADDITIONAL_INFO_LEN,
            )?),
            _ => None,
        };

        let amount = match self.params.amount {
            Some(amount) if amount.is_zero() => None,
            Some(amount) => Some(format_amount(amount)?),
            None => None,
        };

        let txid = normalize_txid(self.params.reference_label.as_deref());

        let mut fields = Vec::with_capacity(10);
        for tag in FieldTag::emission_order() {
            let code = tag.code();
            let encoded = match tag {
                FieldTag::PayloadFormatIndicator => tlv(code, PAYLOAD_FORMAT_INDICATOR)?,
                FieldTag::MerchantAccountInfo => {
                    let mut account = vec![
                        tlv(merchant_account::GUI, PIX_GUI)?,
                        tlv(merchant_account::KEY, &key.value)?,
                    ];
                    if let Some(info) = &additional_info {
                        account.push(tlv(merchant_account::ADDITIONAL_INFO, info)?);
                    }
                    template(code, &account)?
                }
                FieldTag::MerchantCategoryCode => tlv(code, MERCHANT_CATEGORY_CODE)?,
                FieldTag::TransactionCurrency => tlv(code, CURRENCY_BRL)?,
                FieldTag::TransactionAmount => match &amount {
                    Some(amount) => tlv(code, amount)?,
                    None => continue,
                },
                FieldTag::CountryCode => tlv(code, COUNTRY_CODE)?,
                FieldTag::MerchantName => tlv(code, &merchant_name)?,
                FieldTag::MerchantCity => tlv(code, &merchant_city)?,
                FieldTag::AdditionalDataField => {
                    template(code, &[tlv(additional_data::REFERENCE_LABEL, &txid)?])?
                }
                // Appended once the checksum is known
                FieldTag::Crc => continue,
            };
            fields.push(encoded);
        }

        let mut payload = fields.concat();
        payload.push_str(CRC_FIELD_PREFIX);
        let crc = crc16(&payload);
        payload.push_str(&crc);

        debug!(
            key_kind = %key.kind,
            amount = amount.as_deref().unwrap_or("open"),
            txid = %txid,
            crc = %crc,
            "Generated Pix BR Code"
        );

        Ok(payload)
    }
}

/// Generate the BR Code text for a merchant and transaction
pub fn generate_payload(
    merchant: &MerchantProfile,
    params: &TransactionParams,
) -> PixResult<String> {
    PixPayloadBuilder::new(merchant.clone())
        .with_params(params.clone())
        .build()
}
