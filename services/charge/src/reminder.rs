//! Charge reminder assembly: payment display, reminder text and the
//! WhatsApp link that carries both to the customer

use crate::error::Result;
use crate::links::{charge_message, note_link, whatsapp_link};
use crate::money::format_brl;
use crate::payment::{prepare_payment, PaymentDisplay};
use fiado_config::{service, FiadoConfig};
use fiado_types::{CustomerRecord, NoteRecord, StoreProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything needed to charge one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub store: StoreProfile,
    pub note: NoteRecord,
    #[serde(default)]
    pub customer: Option<CustomerRecord>,
    /// Custom reminder text; a default is built when absent
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of preparing a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeSummary {
    pub amount: String,
    pub note_link: String,
    pub message: String,
    pub payment: PaymentDisplay,
    /// Present when the customer has a usable phone number
    pub whatsapp_link: Option<String>,
}

/// Default reminder text, addressed by first name when the customer is known
pub fn reminder_text(customer: Option<&CustomerRecord>, amount: Decimal) -> String {
    let first_name = customer
        .and_then(|customer| customer.display_name().split_whitespace().next())
        .filter(|name| !name.is_empty());

    match first_name {
        Some(name) if amount > Decimal::ZERO => format!(
            "Oi {name}! Passando pra lembrar da continha de {}. Dá pra acertar pelo Pix? Obrigado!",
            format_brl(amount)
        ),
        Some(name) => format!(
            "Oi {name}! Passando pra lembrar da continha. Dá pra acertar pelo Pix? Obrigado!"
        ),
        None => service::charge::DEFAULT_REMINDER.to_string(),
    }
}

/// Prepare the payment display, message and WhatsApp link for one note
///
/// Fails only when the customer is given with an unusable phone number.
pub fn prepare_charge(request: &ChargeRequest, config: &FiadoConfig) -> Result<ChargeSummary> {
    let payment = prepare_payment(&request.store, &request.note, config);
    let link = note_link(&config.charge.public_base_url, &request.note.id);

    let text = request
        .message
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| reminder_text(request.customer.as_ref(), request.note.amount));
    let message = charge_message(&text, &link);

    let whatsapp_link = request
        .customer
        .as_ref()
        .map(|customer| whatsapp_link(&customer.phone, &message, &config.charge))
        .transpose()?;

    Ok(ChargeSummary {
        amount: format_brl(request.note.amount),
        note_link: link,
        message,
        payment,
        whatsapp_link,
    })
}
