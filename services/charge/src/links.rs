//! Links handed to customers: QR image, note page and WhatsApp chat
//!
//! Every dynamic part is percent-encoded; the BR Code carries spaces, `*`
//! and `@` that would otherwise break the query string.

use crate::error::{ChargeError, Result};
use fiado_config::ChargeConfig;

/// Minimum digits in a customer phone number (area code + number)
pub const MIN_PHONE_DIGITS: usize = 10;

/// URL of the external QR renderer drawing `br_code`
pub fn qr_image_url(br_code: &str, config: &ChargeConfig) -> String {
    format!(
        "{renderer}?size={size}x{size}&data={data}",
        renderer = config.qr_renderer_url,
        size = config.qr_size,
        data = urlencoding::encode(br_code),
    )
}

/// Public page for a single note
pub fn note_link(base_url: &str, note_id: &str) -> String {
    format!(
        "{}/p/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(note_id)
    )
}

/// Reminder text followed by the note link
pub fn charge_message(text: &str, link: &str) -> String {
    format!("{text}\n\n{link}")
}

/// Click-to-chat link opening WhatsApp with `message` prefilled
pub fn whatsapp_link(phone: &str, message: &str, config: &ChargeConfig) -> Result<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ChargeError::InvalidPhone {
            input: phone.to_string(),
            min_digits: MIN_PHONE_DIGITS,
        });
    }

    Ok(format!(
        "{}/{digits}?text={}",
        config.whatsapp_base_url.trim_end_matches('/'),
        urlencoding::encode(message)
    ))
}
