//! Inputs to Pix payload generation
//!
//! `MerchantProfile` identifies the payee and rarely changes; `TransactionParams`
//! is built per payload. Neither is normalized here: the raw human text is kept
//! as typed so the codec can report exactly what failed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payee identity used for every payload a merchant issues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantProfile {
    /// Raw Pix key (CPF, CNPJ, email, phone or random key)
    pub pix_key: String,
    /// Payee name, at most 25 bytes once normalized
    pub merchant_name: String,
    /// Payee city, at most 15 bytes once normalized
    pub merchant_city: String,
}

impl MerchantProfile {
    pub fn new(
        pix_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            pix_key: pix_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
        }
    }
}

/// Per-payload parameters
///
/// An absent or zero `amount` produces an open-amount code the payer fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
    pub amount: Option<Decimal>,
    /// Transaction id (txid)
    pub reference_label: Option<String>,
    pub additional_info: Option<String>,
}

impl TransactionParams {
    /// Parameters for an open-amount code with no reference
    pub fn open_amount() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_reference_label(mut self, label: impl Into<String>) -> Self {
        self.reference_label = Some(label.into());
        self
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_params_builder() {
        let params = TransactionParams::default()
            .with_amount(dec!(41.00))
            .with_reference_label("NOTA123");

        assert_eq!(params.amount, Some(dec!(41.00)));
        assert_eq!(params.reference_label.as_deref(), Some("NOTA123"));
        assert!(params.additional_info.is_none());
        assert_eq!(TransactionParams::open_amount().amount, None);
    }
}
