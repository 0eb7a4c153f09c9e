//! # BR Code Integrity Checks
//!
//! - [`checksum`]: CRC-16/CCITT-FALSE over the payload bytes
//! - [`validator`]: shallow, checksum and strict payload validation levels

pub mod checksum;
pub mod validator;

pub use checksum::{calculate_crc16, crc16, split_checksum, verify_checksum, StreamingChecksum};
pub use validator::{validate_payload, PayloadValidator, ValidationError, ValidationLevel};
