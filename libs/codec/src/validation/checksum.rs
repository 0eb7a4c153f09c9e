//! CRC-16/CCITT-FALSE checksum for the BR Code CRC field (63)
//!
//! Polynomial `0x1021`, initial register `0xFFFF`, MSB-first, no reflection,
//! no final XOR. The checksum is computed over the UTF-8 bytes of everything
//! that precedes the four hex digits, including the literal `6304` tag and
//! length of the CRC field itself.

use crate::constants::{CRC_FIELD_PREFIX, CRC_VALUE_LEN};

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Calculate the raw 16-bit CRC of a byte slice
pub fn calculate_crc16(data: &[u8]) -> u16 {
    let mut hasher = StreamingChecksum::new();
    hasher.update(data);
    hasher.finalize()
}

/// Checksum of a partial payload as 4 uppercase hex digits
pub fn crc16(payload: &str) -> String {
    format!("{:04X}", calculate_crc16(payload.as_bytes()))
}

/// Check the trailing CRC of a complete payload
///
/// Recomputes the checksum over everything except the last four characters
/// and compares it, case-insensitively, with them. The four characters must
/// be preceded by `6304`.
pub fn verify_checksum(payload: &str) -> bool {
    match split_checksum(payload) {
        Some((covered, carried)) => crc16(covered).eq_ignore_ascii_case(carried),
        None => false,
    }
}

/// Split a payload into the checksummed part (ending in `6304`) and the
/// carried CRC value
pub fn split_checksum(payload: &str) -> Option<(&str, &str)> {
    if payload.len() < CRC_FIELD_PREFIX.len() + CRC_VALUE_LEN {
        return None;
    }
    let split = payload.len() - CRC_VALUE_LEN;
    let covered = payload.get(..split)?;
    let carried = payload.get(split..)?;
    if !covered.ends_with(CRC_FIELD_PREFIX) {
        return None;
    }
    Some((covered, carried))
}

/// Streaming checksum calculator for payloads assembled piecewise
pub struct StreamingChecksum {
    crc: u16,
}

impl StreamingChecksum {
    pub fn new() -> Self {
        Self { crc: INITIAL }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                self.crc = if self.crc & 0x8000 != 0 {
                    (self.crc << 1) ^ POLYNOMIAL
                } else {
                    self.crc << 1
                };
            }
        }
    }

    pub fn finalize(self) -> u16 {
        self.crc
    }

    pub fn reset(&mut self) {
        self.crc = INITIAL;
    }
}

impl Default for StreamingChecksum {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        // Standard CRC-16/CCITT-FALSE check value
        assert_eq!(calculate_crc16(b"123456789"), 0x29B1);
        assert_eq!(crc16("123456789"), "29B1");
    }

    #[test]
    fn test_empty_input_is_initial_register() {
        assert_eq!(crc16(""), "FFFF");
    }

    #[test]
    fn test_zero_padded_uppercase() {
        for input in ["A", "6304", "000201", "br.gov.bcb.pix"] {
            let out = crc16(input);
            assert_eq!(out.len(), 4);
            assert!(out.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_known_payload() {
        let payload = "00020126330014br.gov.bcb.pix011111144477735520400005303986540541.005802BR5916MERCEARIA DA ANA6009SAO PAULO62110507NOTA1236304";
        assert_eq!(crc16(payload), "50E7");
        assert!(verify_checksum(&format!("{payload}50E7")));
        assert!(verify_checksum(&format!("{payload}50e7")));
        assert!(!verify_checksum(&format!("{payload}50E8")));
    }

    #[test]
    fn test_split_requires_crc_prefix() {
        assert_eq!(split_checksum("63041D3D"), Some(("6304", "1D3D")));
        assert_eq!(split_checksum("63051D3D"), None);
        assert_eq!(split_checksum("6304"), None);
        assert!(!verify_checksum("not a pix code"));
    }

    #[test]
    fn test_streaming_checksum() {
        let mut streaming = StreamingChecksum::new();
        streaming.update(b"12345");
        streaming.update(b"6789");
        assert_eq!(streaming.finalize(), 0x29B1);
    }

    #[test]
    fn test_streaming_reset() {
        let mut hasher = StreamingChecksum::new();
        hasher.update(b"other data");
        hasher.reset();
        hasher.update(b"123456789");
        assert_eq!(hasher.finalize(), calculate_crc16(b"123456789"));
    }
}
