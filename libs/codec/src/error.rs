//! Errors for Pix BR Code generation and decoding
//!
//! Every variant aborts the operation that raised it. There is no degraded
//! payload: a code that looks right but carries a wrong key or length prefix
//! can misdirect a real payment, so callers must show the human-readable key
//! instead of rendering anything when they get an error here.

use thiserror::Error;

/// Pix codec errors with enough context to tell the merchant what to fix
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PixError {
    /// Merchant name, city or additional info had no supported characters left
    #[error("{field} is empty after sanitization (input: {input:?})")]
    EmptyAfterSanitization { field: String, input: String },

    /// Pix key matches none of the supported shapes
    #[error("Unrecognized Pix key format: {input:?}")]
    UnrecognizedPixKeyFormat { input: String },

    /// Key starting with `+` is not `+` followed by 8 to 15 digits
    #[error("Invalid Pix phone key {input:?}: expected + followed by 8-15 digits, got {normalized:?}")]
    InvalidPhoneKey { input: String, normalized: String },

    /// Field tag is not exactly two ASCII digits
    #[error("Invalid tag {tag:?}: expected exactly 2 digits")]
    InvalidTagFormat { tag: String },

    /// Field value does not fit the two-digit length prefix
    #[error("Field {tag} is {length} bytes, exceeds limit {limit}")]
    FieldTooLarge {
        tag: String,
        length: usize,
        limit: usize,
    },

    /// Amount supplied but not a positive number of cents
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount { amount: String },

    /// Formatted amount exceeds the transaction amount field budget
    #[error("Amount {formatted} is {length} characters, field 54 allows at most {limit}")]
    AmountFieldTooLong {
        formatted: String,
        length: usize,
        limit: usize,
    },

    /// Declared field length runs past the end of the input
    #[error("Truncated field {tag} at offset {offset}: need {need} bytes, {available} available")]
    TruncatedField {
        tag: String,
        offset: usize,
        need: usize,
        available: usize,
    },

    /// Length prefix is not two decimal digits
    #[error("Invalid length prefix {prefix:?} for field {tag} at offset {offset}")]
    InvalidLengthPrefix {
        tag: String,
        prefix: String,
        offset: usize,
    },

    /// Declared length ends inside a multi-byte character
    #[error("Field {tag} at offset {offset} splits a multi-byte character (declared {length} bytes)")]
    InvalidUtf8Boundary {
        tag: String,
        offset: usize,
        length: usize,
    },

    /// CRC field does not match the recomputed checksum
    #[error("Checksum mismatch: payload carries {expected}, calculated {calculated}")]
    ChecksumMismatch { expected: String, calculated: String },

    /// Mandatory field absent from a decoded payload
    #[error("Missing mandatory field {tag} ({name})")]
    MissingField { tag: String, name: String },

    /// Field present with a value the Pix profile does not allow
    #[error("Unexpected value {actual:?} in field {tag}: expected {expected}")]
    UnexpectedValue {
        tag: String,
        expected: String,
        actual: String,
    },
}

impl PixError {
    pub fn empty_after_sanitization(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::EmptyAfterSanitization {
            field: field.into(),
            input: input.into(),
        }
    }

    pub fn unrecognized_key(input: impl Into<String>) -> Self {
        Self::UnrecognizedPixKeyFormat {
            input: input.into(),
        }
    }

    pub fn invalid_tag(tag: impl Into<String>) -> Self {
        Self::InvalidTagFormat { tag: tag.into() }
    }

    pub fn truncated(tag: impl Into<String>, offset: usize, need: usize, available: usize) -> Self {
        Self::TruncatedField {
            tag: tag.into(),
            offset,
            need,
            available,
        }
    }

    pub fn missing(tag: &str, name: &str) -> Self {
        Self::MissingField {
            tag: tag.to_string(),
            name: name.to_string(),
        }
    }

    pub fn unexpected(tag: &str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::UnexpectedValue {
            tag: tag.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// True for errors caused by merchant-supplied data rather than corruption
    /// or a programming error
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PixError::EmptyAfterSanitization { .. }
                | PixError::UnrecognizedPixKeyFormat { .. }
                | PixError::InvalidPhoneKey { .. }
                | PixError::InvalidAmount { .. }
                | PixError::AmountFieldTooLong { .. }
        )
    }
}

/// Result type for Pix codec operations
pub type PixResult<T> = std::result::Result<T, PixError>;
