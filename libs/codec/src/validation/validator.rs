//! # BR Code Payload Validator
//!
//! Pre-display sanity checks on a payload, at a configurable depth:
//!
//! - **Shallow**: substring checks that catch empty or truncated strings
//! - **Checksum**: shallow plus CRC recomputation
//! - **Strict**: full decode through [`BrCode::decode`]
//!
//! The shallow check is deliberately weak. It exists to stop gross corruption
//! from reaching a QR renderer, not to prove a payload correct.

use crate::constants::{CRC_FIELD_PREFIX, CRC_VALUE_LEN};
use crate::error::PixError;
use crate::parser::BrCode;
use crate::validation::checksum::verify_checksum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::warn;

const FORMAT_INDICATOR_FIELD: &str = "000201";
const MERCHANT_ACCOUNT_TAG: &str = "26";
const ADDITIONAL_DATA_TAG: &str = "62";

/// Reason a payload failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload does not start with {FORMAT_INDICATOR_FIELD}")]
    MissingFormatIndicator,

    #[error("payload has no room for a CRC after {CRC_FIELD_PREFIX}")]
    MissingChecksumField,

    #[error("payload has no merchant account information (tag {MERCHANT_ACCOUNT_TAG})")]
    MissingMerchantAccount,

    #[error("payload has no additional data field (tag {ADDITIONAL_DATA_TAG})")]
    MissingAdditionalData,

    #[error("payload CRC does not match its contents")]
    ChecksumMismatch,

    #[error("payload failed strict decoding: {0}")]
    Decode(#[from] PixError),
}

/// How deep a validator looks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    #[default]
    Shallow,
    Checksum,
    Strict,
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationLevel::Shallow => "shallow",
            ValidationLevel::Checksum => "checksum",
            ValidationLevel::Strict => "strict",
        };
        f.write_str(name)
    }
}

fn shallow_check(payload: &str) -> Result<(), ValidationError> {
    if !payload.starts_with(FORMAT_INDICATOR_FIELD) {
        return Err(ValidationError::MissingFormatIndicator);
    }

    let has_room_for_crc = payload
        .match_indices(CRC_FIELD_PREFIX)
        .any(|(idx, _)| idx + CRC_FIELD_PREFIX.len() + CRC_VALUE_LEN <= payload.len());
    if !has_room_for_crc {
        return Err(ValidationError::MissingChecksumField);
    }

    if !payload.contains(MERCHANT_ACCOUNT_TAG) {
        return Err(ValidationError::MissingMerchantAccount);
    }
    if !payload.contains(ADDITIONAL_DATA_TAG) {
        return Err(ValidationError::MissingAdditionalData);
    }
    Ok(())
}

/// Validator running the checks of its level
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadValidator {
    level: ValidationLevel,
}

impl PayloadValidator {
    pub fn new(level: ValidationLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    /// Run every check up to this validator's level
    pub fn validate(&self, payload: &str) -> Result<(), ValidationError> {
        shallow_check(payload)?;

        if self.level >= ValidationLevel::Checksum && !verify_checksum(payload) {
            return Err(ValidationError::ChecksumMismatch);
        }
        if self.level >= ValidationLevel::Strict {
            BrCode::decode(payload)?;
        }
        Ok(())
    }

    /// Same as [`validate`](Self::validate), logging the failure
    pub fn is_valid(&self, payload: &str) -> bool {
        match self.validate(payload) {
            Ok(()) => true,
            Err(err) => {
                warn!(level = %self.level, error = %err, "Rejected Pix BR Code");
                false
            }
        }
    }
}

/// Shallow structural check of a BR Code; never fails, reports `false`
pub fn validate_payload(payload: &str) -> bool {
    PayloadValidator::new(ValidationLevel::Shallow).is_valid(payload)
}
