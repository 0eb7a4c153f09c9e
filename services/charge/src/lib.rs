//! # Fiado Charge Flow
//!
//! Turns a store's Pix settings and a credit note into what the customer
//! receives: a validated Pix code (or the bare key), a QR image link, the
//! note page link, and a WhatsApp click-to-chat link carrying the reminder.
//!
//! Payload rules live in `pix-codec`; this crate only decides what to show
//! and how to link to it.
//!
//! ```text
//! StoreProfile + NoteRecord
//!        │
//!        ├─> merchant_from_store ─> generate_payload ─> PayloadValidator
//!        │                                                  │
//!        │                           PaymentDisplay::{Code, KeyOnly, NotConfigured}
//!        │
//!        └─> note_link ─> charge_message ─> whatsapp_link
//! ```

pub mod error;
pub mod links;
pub mod merchant;
pub mod money;
pub mod payment;
pub mod reminder;

pub use error::{ChargeError, Result};
pub use links::{charge_message, note_link, qr_image_url, whatsapp_link};
pub use merchant::{declared_kind_mismatch, merchant_from_store};
pub use money::format_brl;
pub use payment::{note_params, prepare_payment, PaymentDisplay};
pub use reminder::{prepare_charge, reminder_text, ChargeRequest, ChargeSummary};
