//! Error types for the charge flow

use pix_codec::PixError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChargeError {
    #[error("Pix is not configured for this store")]
    PixNotConfigured,

    #[error("Pix error: {0}")]
    Pix(#[from] PixError),

    #[error("Invalid phone number {input:?}: expected at least {min_digits} digits")]
    InvalidPhone { input: String, min_digits: usize },
}

pub type Result<T> = std::result::Result<T, ChargeError>;
