//! # Field Codec
//!
//! Encodes one `(tag, value)` pair as `tag + length + value`, where the
//! length is the two-digit decimal UTF-8 **byte** count of the value, and
//! decodes a flat sequence of such fields back.
//!
//! Byte length, not character count: normalized merchant text is ASCII, but
//! a Pix key or an externally supplied payload need not be, and a length
//! counted in characters would shift every field after the first multi-byte
//! sequence.

use crate::constants::MAX_FIELD_LEN;
use crate::error::{PixError, PixResult};
use serde::Serialize;

/// A decoded field borrowing its tag and value from the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TlvField<'a> {
    pub tag: &'a str,
    /// Byte offset of the tag within the decoded input
    pub offset: usize,
    pub value: &'a str,
}

impl<'a> TlvField<'a> {
    /// Declared (and actual) value length in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Decode this field's value as a nested template
    pub fn children(&self) -> PixResult<Vec<TlvField<'a>>> {
        decode_fields(self.value)
    }
}

fn check_tag(tag: &str) -> PixResult<()> {
    if tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PixError::invalid_tag(tag))
    }
}

/// Encode a single field
pub fn tlv(tag: &str, value: &str) -> PixResult<String> {
    check_tag(tag)?;

    let len = value.len();
    if len > MAX_FIELD_LEN {
        return Err(PixError::FieldTooLarge {
            tag: tag.to_string(),
            length: len,
            limit: MAX_FIELD_LEN,
        });
    }

    Ok(format!("{tag}{len:02}{value}"))
}

/// Encode a template field whose value is the concatenation of encoded children
pub fn template<S: AsRef<str>>(tag: &str, children: &[S]) -> PixResult<String> {
    let value: String = children.iter().map(|child| child.as_ref()).collect();
    tlv(tag, &value)
}

/// Decode a flat sequence of fields, consuming the whole input
pub fn decode_fields(input: &str) -> PixResult<Vec<TlvField<'_>>> {
    let bytes = input.as_bytes();
    let mut fields = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let header_end = offset + 4;
        if header_end > bytes.len() {
            let partial = input.get(offset..).unwrap_or_default();
            return Err(PixError::truncated(
                partial.chars().take(2).collect::<String>(),
                offset,
                4,
                bytes.len() - offset,
            ));
        }

        let tag = input
            .get(offset..offset + 2)
            .ok_or_else(|| PixError::invalid_tag(String::from_utf8_lossy(&bytes[offset..offset + 2])))?;
        check_tag(tag)?;

        let prefix = input
            .get(offset + 2..header_end)
            .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| PixError::InvalidLengthPrefix {
                tag: tag.to_string(),
                prefix: String::from_utf8_lossy(&bytes[offset + 2..header_end]).into_owned(),
                offset,
            })?;
        // Two ASCII digits always parse
        let length: usize = prefix.parse().unwrap_or_default();

        let value_end = header_end + length;
        if value_end > bytes.len() {
            return Err(PixError::truncated(
                tag,
                offset,
                length,
                bytes.len() - header_end,
            ));
        }

        let value = input
            .get(header_end..value_end)
            .ok_or_else(|| PixError::InvalidUtf8Boundary {
                tag: tag.to_string(),
                offset,
                length,
            })?;

        fields.push(TlvField { tag, offset, value });
        offset = value_end;
    }

    Ok(fields)
}

/// Find the first field with the given tag
pub fn find_field<'a, 'b>(fields: &'b [TlvField<'a>], tag: &str) -> Option<&'b TlvField<'a>> {
    fields.iter().find(|field| field.tag == tag)
}
