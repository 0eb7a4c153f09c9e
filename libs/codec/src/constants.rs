//! # BR Code Constants
//!
//! Fixed values of the static Pix BR Code profile published by Banco Central
//! do Brasil on top of EMV QRCPS-MPM. These must stay byte-identical: any
//! change produces codes banking apps reject.

/// Payload Format Indicator value (field 00)
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Globally unique identifier of the Pix scheme (field 26-00)
pub const PIX_GUI: &str = "br.gov.bcb.pix";

/// Merchant Category Code (field 52), unclassified
pub const MERCHANT_CATEGORY_CODE: &str = "0000";

/// ISO 4217 numeric code for BRL (field 53)
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 alpha-2 country code (field 58)
pub const COUNTRY_CODE: &str = "BR";

/// Reference label used when the payload carries no txid (field 62-05)
pub const TXID_PLACEHOLDER: &str = "***";

/// Tag and length of the CRC field, covered by the checksum itself
pub const CRC_FIELD_PREFIX: &str = "6304";

/// Hex digits in the CRC value
pub const CRC_VALUE_LEN: usize = 4;

/// Largest value a two-digit length prefix can declare
pub const MAX_FIELD_LEN: usize = 99;

/// Byte budget for the merchant name (field 59)
pub const MAX_MERCHANT_NAME_LEN: usize = 25;

/// Byte budget for the merchant city (field 60)
pub const MAX_MERCHANT_CITY_LEN: usize = 15;

/// Byte budget for the additional info (field 26-02)
pub const MAX_ADDITIONAL_INFO_LEN: usize = 72;

/// Character budget for the formatted amount (field 54)
pub const MAX_AMOUNT_LEN: usize = 13;

/// Character budget for the txid (field 62-05)
pub const MAX_TXID_LEN: usize = 25;

/// Largest Pix key accepted by the opaque fallback
pub const MAX_PIX_KEY_LEN: usize = 77;
