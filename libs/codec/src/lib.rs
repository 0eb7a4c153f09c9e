//! # Pix Codec - Static BR Code Rules
//!
//! ## Purpose
//!
//! This crate is the "Rules" layer for Pix payments: it turns a merchant's
//! Pix key, name and city plus an optional amount and reference into the
//! static BR Code text that a QR renderer draws and a customer pastes into
//! a banking app, and it decodes and checks such text coming back in.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [pix codec] → services/charge
//!     ↑             ↓               ↓
//! Pure Data    Payload Rules    Presentation
//! MerchantProfile  Normalize     QR image URL
//! TransactionParams Encode/CRC   WhatsApp link
//! ```
//!
//! ## What This Crate Contains
//! - [`normalize`]: merchant text sanitizer and Pix key classifier
//! - [`field`]: the two-digit tag / two-digit length field codec
//! - [`validation::checksum`]: CRC-16/CCITT-FALSE
//! - [`builder`]: [`PixPayloadBuilder`] and [`generate_payload`]
//! - [`parser`]: strict [`BrCode`] decoding
//! - [`validation::validator`]: the shallow [`validate_payload`] check and
//!   deeper [`PayloadValidator`] levels
//!
//! ## What This Crate Does NOT Contain
//! - Dynamic (URL based) Pix codes or PSP integration
//! - QR image rendering
//! - Settlement or payment confirmation
//!
//! ## Example
//!
//! ```
//! use pix_codec::{generate_payload, validate_payload, BrCode};
//! use fiado_types::{Decimal, MerchantProfile, TransactionParams};
//!
//! let merchant = MerchantProfile::new("111.444.777-35", "Mercearia da Ana", "São Paulo");
//! let params = TransactionParams::default()
//!     .with_amount(Decimal::new(4100, 2))
//!     .with_reference_label("NOTA123");
//!
//! let payload = generate_payload(&merchant, &params).unwrap();
//! assert!(validate_payload(&payload));
//! assert!(payload.ends_with("630450E7"));
//!
//! let decoded = BrCode::decode(&payload).unwrap();
//! assert_eq!(decoded.merchant_city, "SAO PAULO");
//! ```

pub mod builder;
pub mod constants;
pub mod error;
pub mod field;
pub mod normalize;
pub mod parser;
pub mod tlv_types;
pub mod validation;

pub use builder::{amount_from_f64, format_amount, generate_payload, PixPayloadBuilder};
pub use constants::*;
pub use error::{PixError, PixResult};
pub use field::{decode_fields, find_field, template, tlv, TlvField};
pub use normalize::{classify_pix_key, normalize_merchant_text, normalize_pix_key, normalize_txid};
pub use parser::BrCode;
pub use tlv_types::{FieldRegistry, FieldSizeConstraint, FieldTag};
pub use validation::{
    crc16, validate_payload, verify_checksum, PayloadValidator, ValidationError, ValidationLevel,
};
