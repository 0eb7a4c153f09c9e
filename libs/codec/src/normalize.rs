//! # Text and Key Normalization
//!
//! The only place in the codec that interprets merchant-typed text. Everything
//! emitted from here is ASCII, so downstream byte lengths equal character
//! counts, but the field codec still measures bytes.
//!
//! ## Merchant text (name, city, additional info)
//!
//! NFD, drop combining marks, uppercase, map anything outside
//! `[A-Z0-9 @&.,-/]` to a space, collapse spaces, trim, truncate.
//!
//! ## Pix keys
//!
//! Classified by shape, first match wins:
//!
//! ```text
//! contains '@'                     -> email, lowercased
//! 8-4-4-4-12 hex                   -> random key, lowercased
//! starts with '+'                  -> phone, '+' and 8-15 digits or InvalidPhoneKey
//! digits (phone punctuation only),
//!   starts with 55, 12-15 digits   -> phone, '+' prepended
//! 11 digits after stripping        -> CPF
//! 14 alphanumerics after stripping -> CNPJ, uppercased
//! 1-77 alphanumerics               -> opaque key
//! otherwise                        -> UnrecognizedPixKeyFormat
//! ```

use crate::constants::{MAX_PIX_KEY_LEN, MAX_TXID_LEN, TXID_PLACEHOLDER};
use crate::error::{PixError, PixResult};
use fiado_types::{PixKey, PixKeyKind};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("static UUID pattern")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{8,15}$").expect("static phone pattern"));

fn is_allowed_merchant_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, ' ' | '@' | '&' | '.' | ',' | '-' | '/')
}

/// Sanitize merchant text into the BR Code character set within `max_bytes`
pub fn normalize_merchant_text(input: &str, max_bytes: usize) -> PixResult<String> {
    normalize_field_text("text", input, max_bytes)
}

/// Same as [`normalize_merchant_text`], naming the field in the error
pub(crate) fn normalize_field_text(field: &str, input: &str, max_bytes: usize) -> PixResult<String> {
    let stripped: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut cleaned = String::with_capacity(stripped.len());
    for c in stripped.to_uppercase().chars() {
        let c = if is_allowed_merchant_char(c) { c } else { ' ' };
        if c == ' ' && (cleaned.is_empty() || cleaned.ends_with(' ')) {
            continue;
        }
        cleaned.push(c);
    }
    let trimmed_len = cleaned.trim_end().len();
    cleaned.truncate(trimmed_len);

    // ASCII only from here, any byte index is a char boundary
    cleaned.truncate(max_bytes);

    if cleaned.is_empty() {
        return Err(PixError::empty_after_sanitization(field, input));
    }
    Ok(cleaned)
}

/// Normalize a Pix key and report which shape it matched
pub fn classify_pix_key(raw: &str) -> PixResult<PixKey> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(PixError::unrecognized_key(raw));
    }

    if s.contains('@') {
        return Ok(PixKey::new(PixKeyKind::Email, s.to_lowercase()));
    }

    let lower = s.to_lowercase();
    if UUID_PATTERN.is_match(&lower) {
        return Ok(PixKey::new(PixKeyKind::Random, lower));
    }

    if s.starts_with('+') {
        let phone: String = s
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        if !PHONE_PATTERN.is_match(&phone) {
            return Err(PixError::InvalidPhoneKey {
                input: raw.to_string(),
                normalized: phone,
            });
        }
        return Ok(PixKey::new(PixKeyKind::Phone, phone));
    }

    let phone_digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if phone_digits.starts_with("55")
        && (12..=15).contains(&phone_digits.len())
    {
        return Ok(PixKey::new(PixKeyKind::Phone, format!("+{phone_digits}")));
    }

    let alnum: String = s.chars().filter(char::is_ascii_alphanumeric).collect();
    if alnum.len() == 11 && alnum.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(PixKey::new(PixKeyKind::Cpf, alnum));
    }
    if alnum.len() == 14 {
        return Ok(PixKey::new(PixKeyKind::Cnpj, alnum.to_ascii_uppercase()));
    }
    if (1..=MAX_PIX_KEY_LEN).contains(&alnum.len()) {
        return Ok(PixKey::new(PixKeyKind::Opaque, alnum));
    }

    Err(PixError::unrecognized_key(raw))
}

/// Normalize a Pix key into its wire form
pub fn normalize_pix_key(raw: &str) -> PixResult<String> {
    classify_pix_key(raw).map(|key| key.value)
}

/// Reduce a txid to `[0-9A-Za-z]`, at most 25 chars, or the `***` placeholder
pub fn normalize_txid(raw: Option<&str>) -> String {
    let cleaned: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_TXID_LEN)
        .collect();

    if cleaned.is_empty() {
        TXID_PLACEHOLDER.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_text_strips_accents_and_uppercases() {
        assert_eq!(normalize_merchant_text("São Paulo", 15).unwrap(), "SAO PAULO");
        assert_eq!(
            normalize_merchant_text("Mercearia da Ana", 25).unwrap(),
            "MERCEARIA DA ANA"
        );
        assert_eq!(
            normalize_merchant_text("Açougue & Cia.", 25).unwrap(),
            "ACOUGUE & CIA."
        );
    }

    #[test]
    fn test_merchant_text_replaces_and_collapses() {
        assert_eq!(
            normalize_merchant_text("  Loja\t\tdo   Zé!!  (centro) ", 25).unwrap(),
            "LOJA DO ZE CENTRO"
        );
        assert_eq!(normalize_merchant_text("a/b-c,d@e", 25).unwrap(), "A/B-C,D@E");
    }

    #[test]
    fn test_merchant_text_truncates_to_budget() {
        let out = normalize_merchant_text(
            "ÁÉÍÓÚ compríssimo nome de loja que excede o limite de vinte e cinco bytes",
            25,
        )
        .unwrap();
        assert!(out.len() <= 25);
        assert!(out.is_ascii());
        assert_eq!(out, "AEIOU COMPRISSIMO NOME DE");
    }

    #[test]
    fn test_merchant_text_empty_after_sanitization() {
        for input in ["", "   ", "!!!", "中文", "\u{0301}"] {
            assert!(
                matches!(
                    normalize_merchant_text(input, 25),
                    Err(PixError::EmptyAfterSanitization { .. })
                ),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_field_name_in_error() {
        let err = normalize_field_text("merchant city", "???", 15).unwrap_err();
        assert!(err.to_string().contains("merchant city"));
    }

    #[test]
    fn test_key_classification_examples() {
        assert_eq!(
            normalize_pix_key("usuario@exemplo.com").unwrap(),
            "usuario@exemplo.com"
        );
        assert_eq!(normalize_pix_key("11144477735").unwrap(), "11144477735");
        assert_eq!(normalize_pix_key("+5511998765432").unwrap(), "+5511998765432");
        assert_eq!(normalize_pix_key("5511998765432").unwrap(), "+5511998765432");
        assert_eq!(
            normalize_pix_key("123e4567-e89b-12d3-a456-426614174000").unwrap(),
            "123e4567-e89b-12d3-a456-426614174000"
        );
    }

    #[test]
    fn test_key_kinds() {
        let cases = [
            ("Usuario@Exemplo.COM", PixKeyKind::Email, "usuario@exemplo.com"),
            (
                "123E4567-E89B-12D3-A456-426614174000",
                PixKeyKind::Random,
                "123e4567-e89b-12d3-a456-426614174000",
            ),
            ("+55 (11) 99876-5432", PixKeyKind::Phone, "+5511998765432"),
            ("55 (11) 99876-5432", PixKeyKind::Phone, "+5511998765432"),
            ("111.444.777-35", PixKeyKind::Cpf, "11144477735"),
            ("11.222.333/0001-81", PixKeyKind::Cnpj, "11222333000181"),
            ("12.abc.345/01de-35", PixKeyKind::Cnpj, "12ABC34501DE35"),
            ("55 11 99876.5432", PixKeyKind::Phone, "+5511998765432"),
            ("55/11/99876-5432", PixKeyKind::Phone, "+5511998765432"),
            ("55.123.456/0001-90", PixKeyKind::Phone, "+55123456000190"),
            ("chave-legada-42", PixKeyKind::Opaque, "chavelegada42"),
        ];

        for (raw, kind, value) in cases {
            let key = classify_pix_key(raw).unwrap();
            assert_eq!(key.kind, kind, "kind for {raw:?}");
            assert_eq!(key.value, value, "value for {raw:?}");
        }
    }

    #[test]
    fn test_invalid_phone_key() {
        assert!(matches!(
            normalize_pix_key("+55 11"),
            Err(PixError::InvalidPhoneKey { .. })
        ));
        assert!(matches!(
            normalize_pix_key("+1234567890123456"),
            Err(PixError::InvalidPhoneKey { .. })
        ));
    }

    #[test]
    fn test_unrecognized_key() {
        let long = "not a valid key!! ".repeat(10);
        assert!(matches!(
            normalize_pix_key(&long),
            Err(PixError::UnrecognizedPixKeyFormat { .. })
        ));
        assert!(matches!(
            normalize_pix_key("!!! ---"),
            Err(PixError::UnrecognizedPixKeyFormat { .. })
        ));
        assert!(matches!(
            normalize_pix_key("   "),
            Err(PixError::UnrecognizedPixKeyFormat { .. })
        ));
    }

    #[test]
    fn test_txid() {
        assert_eq!(normalize_txid(Some("NOTA-123")), "NOTA123");
        assert_eq!(normalize_txid(None), "***");
        assert_eq!(normalize_txid(Some("")), "***");
        assert_eq!(normalize_txid(Some("-- ç --")), "***");
        assert_eq!(
            normalize_txid(Some("9f1c2d3e-4b5a-6789-0abc-def012345678")),
            "9f1c2d3e4b5a67890abcdef01"
        );
    }
}
