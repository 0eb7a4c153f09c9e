//! # BR Code Field Registry
//!
//! ## Purpose
//!
//! Registry of the top-level fields of a static Pix BR Code: their two-digit
//! tags, human names, size constraints and whether the Pix profile requires
//! them. The assembler emits fields in `FieldTag::emission_order()`; the
//! decoder uses the same table to name fields and check their sizes.
//!
//! ## Field Table
//!
//! ```text
//! 00 Payload Format Indicator   "01"
//! 26 Merchant Account Info      00=br.gov.bcb.pix 01=key 02=info?
//! 52 Merchant Category Code     "0000"
//! 53 Transaction Currency       "986"
//! 54 Transaction Amount         optional, 2 decimals
//! 58 Country Code               "BR"
//! 59 Merchant Name              <= 25 bytes
//! 60 Merchant City              <= 15 bytes
//! 62 Additional Data Template   05=txid or "***"
//! 63 CRC16                      4 uppercase hex
//! ```

use num_enum::TryFromPrimitive;
use std::fmt;

/// Top-level BR Code field tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum FieldTag {
    PayloadFormatIndicator = 0,
    MerchantAccountInfo = 26,
    MerchantCategoryCode = 52,
    TransactionCurrency = 53,
    TransactionAmount = 54,
    CountryCode = 58,
    MerchantName = 59,
    MerchantCity = 60,
    AdditionalDataField = 62,
    Crc = 63,
}

/// Nested tags inside Merchant Account Information (26)
pub mod merchant_account {
    pub const GUI: &str = "00";
    pub const KEY: &str = "01";
    pub const ADDITIONAL_INFO: &str = "02";
}

/// Nested tags inside the Additional Data Field Template (62)
pub mod additional_data {
    pub const REFERENCE_LABEL: &str = "05";
}

/// Size constraint on a field's value, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSizeConstraint {
    Fixed(usize),
    Bounded { min: usize, max: usize },
}

impl FieldTag {
    /// Two-digit wire tag
    pub fn code(&self) -> &'static str {
        match self {
            FieldTag::PayloadFormatIndicator => "00",
            FieldTag::MerchantAccountInfo => "26",
            FieldTag::MerchantCategoryCode => "52",
            FieldTag::TransactionCurrency => "53",
            FieldTag::TransactionAmount => "54",
            FieldTag::CountryCode => "58",
            FieldTag::MerchantName => "59",
            FieldTag::MerchantCity => "60",
            FieldTag::AdditionalDataField => "62",
            FieldTag::Crc => "63",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldTag::PayloadFormatIndicator => "Payload Format Indicator",
            FieldTag::MerchantAccountInfo => "Merchant Account Information",
            FieldTag::MerchantCategoryCode => "Merchant Category Code",
            FieldTag::TransactionCurrency => "Transaction Currency",
            FieldTag::TransactionAmount => "Transaction Amount",
            FieldTag::CountryCode => "Country Code",
            FieldTag::MerchantName => "Merchant Name",
            FieldTag::MerchantCity => "Merchant City",
            FieldTag::AdditionalDataField => "Additional Data Field Template",
            FieldTag::Crc => "CRC16",
        }
    }

    pub fn size_constraint(&self) -> FieldSizeConstraint {
        match self {
            FieldTag::PayloadFormatIndicator => FieldSizeConstraint::Fixed(2),
            FieldTag::MerchantAccountInfo => FieldSizeConstraint::Bounded { min: 1, max: 99 },
            FieldTag::MerchantCategoryCode => FieldSizeConstraint::Fixed(4),
            FieldTag::TransactionCurrency => FieldSizeConstraint::Fixed(3),
            FieldTag::TransactionAmount => FieldSizeConstraint::Bounded { min: 1, max: 13 },
            FieldTag::CountryCode => FieldSizeConstraint::Fixed(2),
            FieldTag::MerchantName => FieldSizeConstraint::Bounded { min: 1, max: 25 },
            FieldTag::MerchantCity => FieldSizeConstraint::Bounded { min: 1, max: 15 },
            FieldTag::AdditionalDataField => FieldSizeConstraint::Bounded { min: 1, max: 99 },
            FieldTag::Crc => FieldSizeConstraint::Fixed(4),
        }
    }

    /// Only the amount may be left out of a static Pix code
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, FieldTag::TransactionAmount)
    }

    /// Order in which fields appear on the wire
    pub fn emission_order() -> [FieldTag; 10] {
        [
            FieldTag::PayloadFormatIndicator,
            FieldTag::MerchantAccountInfo,
            FieldTag::MerchantCategoryCode,
            FieldTag::TransactionCurrency,
            FieldTag::TransactionAmount,
            FieldTag::CountryCode,
            FieldTag::MerchantName,
            FieldTag::MerchantCity,
            FieldTag::AdditionalDataField,
            FieldTag::Crc,
        ]
    }

    /// Look up a tag from its two-digit wire form
    pub fn from_code(code: &str) -> Option<FieldTag> {
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        code.parse::<u8>()
            .ok()
            .and_then(|n| FieldTag::try_from(n).ok())
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}

/// Registry for field metadata
pub struct FieldRegistry;

impl FieldRegistry {
    pub fn mandatory_fields() -> Vec<FieldTag> {
        FieldTag::emission_order()
            .into_iter()
            .filter(FieldTag::is_mandatory)
            .collect()
    }

    /// Validate a value's byte length for the given field
    pub fn validate_size(tag: FieldTag, value_len: usize) -> bool {
        match tag.size_constraint() {
            FieldSizeConstraint::Fixed(expected) => value_len == expected,
            FieldSizeConstraint::Bounded { min, max } => value_len >= min && value_len <= max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag_basic_functionality() {
        let amount = FieldTag::TransactionAmount;
        assert_eq!(amount.code(), "54");
        assert_eq!(amount.name(), "Transaction Amount");
        assert_eq!(amount as u8, 54);
        assert!(!amount.is_mandatory());
        assert!(FieldTag::MerchantName.is_mandatory());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(FieldTag::from_code("00"), Some(FieldTag::PayloadFormatIndicator));
        assert_eq!(FieldTag::from_code("62"), Some(FieldTag::AdditionalDataField));
        assert_eq!(FieldTag::from_code("27"), None);
        assert_eq!(FieldTag::from_code("5"), None);
        assert_eq!(FieldTag::from_code("+5"), None);
    }

    #[test]
    fn test_emission_order_matches_wire_codes() {
        let codes: Vec<&str> = FieldTag::emission_order().iter().map(|t| t.code()).collect();
        assert_eq!(
            codes,
            vec!["00", "26", "52", "53", "54", "58", "59", "60", "62", "63"]
        );
        assert_eq!(FieldRegistry::mandatory_fields().len(), 9);
    }

    #[test]
    fn test_size_validation() {
        assert!(FieldRegistry::validate_size(FieldTag::TransactionCurrency, 3));
        assert!(!FieldRegistry::validate_size(FieldTag::TransactionCurrency, 4));
        assert!(FieldRegistry::validate_size(FieldTag::MerchantName, 25));
        assert!(!FieldRegistry::validate_size(FieldTag::MerchantName, 26));
        assert!(!FieldRegistry::validate_size(FieldTag::MerchantCity, 0));
    }
}
