//! # Fiado Types Library
//!
//! Data model shared by the Pix codec and the charge services.
//!
//! ## Design Philosophy
//!
//! - **Raw In, Normalized Out**: model types hold what the merchant typed; the
//!   codec owns normalization and reports failures precisely
//! - **No Precision Loss**: amounts are `rust_decimal::Decimal`, never floats;
//!   float input is converted once at the boundary
//! - **Data-Layer Names on the Wire**: records deserialize straight from the
//!   ledger's column names (`pix_chave`, `valor`, ...)
//!
//! ## Quick Start
//!
//! ```rust
//! use fiado_types::{Decimal, MerchantProfile, TransactionParams};
//!
//! let merchant = MerchantProfile::new("11144477735", "Mercearia da Ana", "São Paulo");
//! let params = TransactionParams::default()
//!     .with_amount(Decimal::new(4100, 2))
//!     .with_reference_label("NOTA123");
//! # let _ = (merchant, params);
//! ```

pub mod common;
pub mod merchant;
pub mod pix_key;
pub mod records;

pub use common::errors::TypeError;
pub use merchant::{MerchantProfile, TransactionParams};
pub use pix_key::{PixKey, PixKeyKind};
pub use records::{CustomerRecord, NoteRecord, StoreProfile};

pub use rust_decimal::Decimal;
