//! Error types for parsing data-layer values into typed model values

use thiserror::Error;

/// Errors raised while converting raw data-layer values into model types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Declared Pix key kind is not one of the known kinds
    #[error("Unknown Pix key kind '{input}': expected cpf, cnpj, email, telefone or aleatoria")]
    UnknownPixKeyKind { input: String },
}
